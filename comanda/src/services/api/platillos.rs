//! # Menu Endpoints

use shared::{Platillo, PlatillosData};

use super::client::ApiClient;
use super::queries::PLATILLOS_QUERY;
use crate::core::error::Result;

/// Full menu, used to label invoice lines that only carry an item id.
pub async fn list_platillos(client: &ApiClient) -> Result<Vec<Platillo>> {
    let data: PlatillosData = client
        .graphql::<serde_json::Value, _>("platillos", PLATILLOS_QUERY, None)
        .await?;

    let platillos = data.platillos.unwrap_or_default();
    tracing::debug!(count = platillos.len(), "Menu items fetched");
    Ok(platillos)
}
