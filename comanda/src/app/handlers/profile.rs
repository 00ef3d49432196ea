//! # Profile Handlers
//!
//! Change-password dialog.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::session;
use crate::utils::validation::validate_password_change;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Internal handler function - use [`crate::app::App::handle_open_change_password`] instead.
pub(crate) fn handle_open_change_password(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.profile.reset_password_form();
    state.profile.show_change_password = true;
}

/// Internal handler function - use [`crate::app::App::handle_close_change_password`] instead.
pub(crate) fn handle_close_change_password(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if state.profile.submitting {
        return;
    }
    state.profile.reset_password_form();
}

/// Validate the dialog fields and send the mutation.
///
/// Internal handler function - use [`crate::app::App::handle_change_password_submit`] instead.
pub(crate) fn handle_change_password_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, old_password, new_password) = {
        let mut state = state.write();
        if state.profile.submitting {
            return;
        }

        let profile = &state.profile;
        let check = validate_password_change(
            &profile.old_password,
            &profile.new_password,
            &profile.confirm_password,
        );
        if !check.is_valid {
            state.profile.error = check.error;
            return;
        }

        state.profile.error = None;
        state.profile.submitting = true;
        (
            state.api_client.clone(),
            state.profile.old_password.clone(),
            state.profile.new_password.clone(),
        )
    };

    tracing::info!("Password change requested");
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = session::change_password(api_client.as_ref(), old_password, new_password).await;
        let _ = tx.send(AppEvent::ChangePasswordResult(result)).await;
    });
}
