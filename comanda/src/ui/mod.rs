//! # GUI Rendering
//!
//! Per-frame rendering: navigation bar, the active screen and the blocking
//! dialogs, all drawn from one state snapshot.

pub mod desktop;
pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppState, Screen};
use crate::ui::widgets::{dialogs, nav_bar};

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Clone a snapshot; rendering happens without holding the lock
    let state: AppState = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        None => return,
    };

    let authenticated = state.session.is_authenticated();
    let screen = if authenticated {
        state.current_screen
    } else {
        Screen::Login
    };

    if authenticated {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            nav_bar::render_nav_bar(ui, &state, app);
        });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        if authenticated && state.alert.is_none() && state.confirm.is_none() && !ctx.memory(|m| m.focused().is_some()) {
            if ctx.input(|i| i.key_pressed(egui::Key::Tab) && !i.modifiers.shift) {
                app.next_screen();
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Tab) && i.modifiers.shift) {
                app.previous_screen();
            }
        }

        match screen {
            Screen::Login => screens::login::render(ui, &state, app),
            Screen::AdminOrders => screens::admin_orders::render(ui, &state, app),
            Screen::Facturas => screens::facturas::render(ui, &state, app),
            Screen::Profile => screens::profile::render(ui, &state, app),
        }
    });

    if let Some(confirm) = &state.confirm {
        dialogs::render_confirm(ctx, confirm, app);
    }
    if let Some(alert) = &state.alert {
        dialogs::render_alert(ctx, alert, app);
    }
}
