//! # Desktop Window
//!
//! eframe glue: one [`App`] driven by the egui update loop.

use std::time::Duration;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;

/// Repaint interval while idle, so finished background requests show up
/// without user input.
const IDLE_REPAINT: Duration = Duration::from_millis(250);

pub struct DesktopApp {
    app: App,
    notifications: NotificationManager,
}

impl DesktopApp {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        let toasts = std::mem::take(&mut self.app.state.write().pending_toasts);
        for (kind, message) in toasts {
            self.notifications.push(kind, message);
        }

        crate::ui::render(ctx, &mut self.app);
        self.notifications.show(ctx);

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}
