//! # Notifications Widget
//!
//! Toast notifications using egui-notify for short, non-blocking confirmations
//! such as "Sesión cerrada". Anything the user must acknowledge is an
//! [`crate::app::Alert`] instead.

use egui_notify::Toasts;

use crate::app::ToastKind;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        let toasts = Toasts::default();

        Self { toasts }
    }
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Show a toast queued by the application state
    pub fn push(&mut self, kind: ToastKind, message: String) {
        match kind {
            ToastKind::Info => self.info(message),
            ToastKind::Success => self.success(message),
            ToastKind::Warning => self.warning(message),
            ToastKind::Error => self.error(message),
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
