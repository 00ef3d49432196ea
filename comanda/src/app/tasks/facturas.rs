//! # Invoice Tasks
//!
//! Async tasks for the seller invoice list and the menu-item name map.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::invoice::unwrap_factura_list;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the invoice list
///
/// Tries `GET /facturacion` (all invoices) first and falls back to
/// `GET /facturacion/mis-facturas` when that fails. Either payload shape is
/// unwrapped to a list of invoice objects. A call made while a load is running
/// is queued and runs once that load lands.
///
/// Internal task function - spawns async task and sends the result via event channel.
pub(crate) fn fetch_facturas(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if state.facturas.loading {
            state.facturas.reload_queued = true;
            return;
        }
        state.facturas.loading = true;
        state.api_client.clone()
    };

    spawn(async move {
        let result = match api_client.get_all_facturas().await {
            Ok(response) => Ok(unwrap_factura_list(response)),
            Err(e) => {
                tracing::warn!(error = %e, "Listing all invoices failed, falling back to mis-facturas");
                api_client.get_mis_facturas().await.map(unwrap_factura_list)
            }
        };

        match &result {
            Ok(facturas) => tracing::info!(count = facturas.len(), "Fetched invoices"),
            Err(e) => tracing::error!(error = %e, "Failed to fetch invoices"),
        }
        let _ = event_tx.send(AppEvent::FacturasLoaded(result)).await;
    });
}

/// Fetch menu items to name invoice lines that only carry an item id
///
/// Internal task function - spawns async task and sends the result via event channel.
pub(crate) fn fetch_menu(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();

    spawn(async move {
        let result = api_client.list_platillos().await;
        match &result {
            Ok(platillos) => tracing::debug!(count = platillos.len(), "Fetched menu items"),
            Err(e) => tracing::warn!(error = %e, "Failed to fetch menu items"),
        }
        let _ = event_tx.send(AppEvent::MenuLoaded(result)).await;
    });
}
