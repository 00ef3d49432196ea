//! # Navigation Handlers
//!
//! Screen changes, guarded by the logged-in user's role.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change with role guard
///
/// Returns the screen actually shown. A screen the user may not open leaves
/// them on their role's home screen (or on Login when logged out).
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) -> Screen {
    let mut state = state.write();
    let role = state.role();

    let target = if screen.allowed_for(role) {
        screen
    } else {
        let fallback = role.map(Screen::home_for).unwrap_or(Screen::Login);
        tracing::info!(
            requested = screen.title(),
            redirected = fallback.title(),
            "Access denied for current role"
        );
        fallback
    };

    state.current_screen = target;
    target
}

/// Step through the role's tabs, wrapping around. `None` when there is nowhere to go.
///
/// Internal handler function - use [`crate::app::App::next_screen`] instead.
pub(crate) fn cycle_screen(state: Arc<RwLock<AppState>>, forward: bool) -> Option<Screen> {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped screen navigation - state locked");
            return None;
        }
    };

    let tabs = Screen::tabs_for(state.role()?);
    if tabs.len() < 2 {
        return None;
    }

    let current_idx = tabs.iter().position(|&s| s == state.current_screen).unwrap_or(0);
    let next_idx = if forward {
        (current_idx + 1) % tabs.len()
    } else {
        (current_idx + tabs.len() - 1) % tabs.len()
    };

    state.current_screen = tabs[next_idx];
    Some(tabs[next_idx])
}
