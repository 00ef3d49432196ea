//! # Order Status Handlers
//!
//! Admin status changes: button → confirmation → optimistic local rewrite →
//! `updatePedido` mutation. A failed mutation refetches the whole list (see
//! [`crate::app::App::handle_pedido_estado_updated`]).

use crate::app::events::AppEvent;
use crate::app::state::{Alert, AppState, PendingConfirm};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::EstadoPedido;
use std::sync::Arc;

/// Handle a status button: ask for confirmation first.
///
/// Internal handler function - use [`crate::app::App::handle_estado_click`] instead.
pub(crate) fn handle_estado_click(state: Arc<RwLock<AppState>>, pedido_id: i64, estado: EstadoPedido) {
    let mut state = state.write();
    if state.admin.updating.is_some() {
        return;
    }

    let allowed = state
        .admin
        .board
        .get(pedido_id)
        .map(|p| p.estado_pedido.can_transition_to(estado))
        .unwrap_or(false);
    if !allowed {
        tracing::warn!(pedido_id, estado = %estado, "Status button for a transition that is not allowed");
        return;
    }

    state.confirm = Some(PendingConfirm::ChangeEstado { pedido_id, estado });
}

/// Apply the confirmed change locally and send it to the server.
pub(crate) fn confirm_estado_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    pedido_id: i64,
    estado: EstadoPedido,
) {
    let api_client = {
        let mut state = state.write();
        match state.admin.board.apply_optimistic(pedido_id, estado) {
            Ok(previous) => {
                tracing::info!(pedido_id, from = %previous, to = %estado, "Updating order status");
            }
            Err(e) => {
                state.show_alert(Alert::error("Error", e.user_message()));
                return;
            }
        }
        state.admin.updating = Some(pedido_id);
        state.api_client.clone()
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api_client.update_pedido_estado(pedido_id, estado).await;
        let _ = tx
            .send(AppEvent::PedidoEstadoUpdated { pedido_id, estado, result })
            .await;
    });
}
