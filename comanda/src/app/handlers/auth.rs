//! # Authentication Handlers
//!
//! Handlers for login, registration and logout.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState, PendingConfirm, Screen, ToastKind};
use crate::session::{self, RegisterForm};
use crate::utils::validation::{validate_login, validate_register};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let check = validate_login(&email, &password);
    if !check.is_valid {
        state.write().auth.set_error(check.error);
        return;
    }

    let (api_client, store) = {
        let mut state = state.write();
        if state.auth.is_submitting() {
            return;
        }
        state.auth.set_submitting(true);
        state.auth.set_error(None);
        (state.api_client.clone(), state.store.clone())
    };

    tracing::info!(email = %email.trim(), "Login requested");
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = session::login(api_client.as_ref(), &store, email, password).await;
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle register button click
///
/// Internal handler function - use [`crate::app::App::handle_register_click`] instead.
pub(crate) fn handle_register_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    form: RegisterForm,
    confirm_password: String,
) {
    let check = validate_register(&form, &confirm_password);
    if !check.is_valid {
        state.write().auth.set_error(check.error);
        return;
    }

    let api_client = {
        let mut state = state.write();
        if state.auth.is_submitting() {
            return;
        }
        state.auth.set_submitting(true);
        state.auth.set_error(None);
        state.api_client.clone()
    };

    tracing::info!(email = %form.email.trim(), "Registration requested");
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = session::register(api_client.as_ref(), &form).await;
        let _ = tx.send(AppEvent::RegisterResult(result)).await;
    });
}

/// Switch to login form
///
/// Internal handler function - use [`crate::app::App::handle_switch_to_login`] instead.
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.auth = AuthState::login();
}

/// Switch to registration form
///
/// Internal handler function - use [`crate::app::App::handle_switch_to_signup`] instead.
pub(crate) fn handle_switch_to_signup(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.auth = AuthState::signup();
}

/// Ask before logging out
///
/// Internal handler function - use [`crate::app::App::handle_logout_click`] instead.
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>) {
    state.write().confirm = Some(PendingConfirm::Logout);
}

/// Clear the session and stored credentials, back to Login.
pub(crate) fn perform_logout(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let store = state.store.clone();

    if let Err(e) = session::logout(&mut state.session, &store) {
        state.toast(ToastKind::Warning, e.user_message());
    }

    state.reset_screens();
    state.auth = AuthState::login();
    state.current_screen = Screen::Login;
    state.toast(ToastKind::Info, "Sesión cerrada");
}
