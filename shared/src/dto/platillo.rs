//! # Menu Item DTOs
//!
//! `query { platillos { ... } }` feeds the id → name map used to label invoice
//! lines that only carry an item id.

use crate::utils::deserialize_opt_f64;
use crate::utils::deserialize_opt_i64;
use serde::{Deserialize, Serialize};

/// Menu item. The name field has been renamed across backend versions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Platillo {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre_item: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "nombre_item")]
    pub nombre_item_legacy: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub precio: Option<f64>,
}

impl Platillo {
    /// First non-empty of `nombreItem`, `nombre`, `name`, `nombre_item`.
    pub fn display_name(&self) -> Option<&str> {
        [
            &self.nombre_item,
            &self.nombre,
            &self.name,
            &self.nombre_item_legacy,
        ]
        .into_iter()
        .filter_map(|name| name.as_deref())
        .find(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatillosData {
    #[serde(default)]
    pub platillos: Option<Vec<Platillo>>,
}
