//! # Order Tasks
//!
//! Async tasks for the admin order list and the seller's authorized orders.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::orders;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch every order for the admin screen
///
/// Internal task function - spawns async task and sends the result via event channel.
pub(crate) fn fetch_pedidos(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();

        // Skip if already fetching (prevents task pileup)
        if state.admin.loading {
            return;
        }

        state.admin.loading = true;
        state.api_client.clone()
    };

    spawn(async move {
        let result = api_client.list_pedidos().await;
        match &result {
            Ok(pedidos) => tracing::info!(count = pedidos.len(), "Fetched orders"),
            Err(e) => tracing::error!(error = %e, "Failed to fetch orders"),
        }
        let _ = event_tx.send(AppEvent::PedidosLoaded(result)).await;
    });
}

/// Fetch the orders waiting for an invoice (status `Autorizado`)
///
/// Internal task function - spawns async task and sends the result via event channel.
pub(crate) fn fetch_autorizados(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if state.facturas.loading_autorizados {
            return;
        }
        state.facturas.loading_autorizados = true;
        state.api_client.clone()
    };

    spawn(async move {
        let result = api_client.list_pedidos().await.map(orders::autorizados);
        match &result {
            Ok(pedidos) => tracing::info!(count = pedidos.len(), "Fetched authorized orders"),
            Err(e) => tracing::error!(error = %e, "Failed to fetch authorized orders"),
        }
        let _ = event_tx.send(AppEvent::AutorizadosLoaded(result)).await;
    });
}
