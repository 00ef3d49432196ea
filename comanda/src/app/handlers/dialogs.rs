//! # Dialog Handlers
//!
//! Answers to the confirmation dialog and dismissal of the message dialog.

use crate::app::events::AppEvent;
use crate::app::handlers::{auth, pedidos};
use crate::app::state::{AppState, PendingConfirm};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Run the action waiting for confirmation.
///
/// Internal handler function - use [`crate::app::App::handle_confirm_accept`] instead.
pub(crate) fn handle_confirm_accept(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let pending = state.write().confirm.take();
    match pending {
        Some(PendingConfirm::ChangeEstado { pedido_id, estado }) => {
            pedidos::confirm_estado_change(state, event_tx, pedido_id, estado);
        }
        Some(PendingConfirm::Logout) => auth::perform_logout(state),
        None => {}
    }
}

/// Internal handler function - use [`crate::app::App::handle_confirm_cancel`] instead.
pub(crate) fn handle_confirm_cancel(state: Arc<RwLock<AppState>>) {
    state.write().confirm = None;
}

/// Internal handler function - use [`crate::app::App::handle_alert_dismiss`] instead.
pub(crate) fn handle_alert_dismiss(state: Arc<RwLock<AppState>>) {
    state.write().alert = None;
}
