//! Menu item id → name map.

use std::collections::HashMap;

use shared::Platillo;

/// Names of menu items keyed by id (as text), fetched once per visit to the
/// invoices screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuMap(HashMap<String, String>);

impl MenuMap {
    /// Items without a name map to their own id.
    pub fn from_platillos(platillos: &[Platillo]) -> Self {
        let map = platillos
            .iter()
            .filter_map(|platillo| {
                let id = platillo.id?.to_string();
                let name = platillo.display_name().map(str::to_string).unwrap_or_else(|| id.clone());
                Some((id, name))
            })
            .collect();
        Self(map)
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
