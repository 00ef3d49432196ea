//! # Dialogs
//!
//! The blocking alert and the yes/no confirmation, drawn as egui modals over
//! whatever screen is active. Both read the state snapshot and report the
//! user's answer through [`AppLike`].

use egui::RichText;

use crate::app::{Alert, AlertKind, AppLike, PendingConfirm};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::render_button;

/// Render the current alert, if any.
pub fn render_alert(ctx: &egui::Context, alert: &Alert, app: &mut impl AppLike) {
    let theme = Theme::default();
    let color = match alert.kind {
        AlertKind::Info => theme.info,
        AlertKind::Success => theme.success,
        AlertKind::Error => theme.error,
    };

    let modal = egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
        ui.set_width(360.0);
        ui.label(RichText::new(&alert.title).size(18.0).strong().color(color));
        ui.add_space(8.0);
        ui.label(&alert.message);
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if alert.file.is_some() {
                if render_button(ui, "Abrir / Compartir", Some(theme.selected), None).clicked() {
                    app.handle_open_exported();
                }
                if ui.button("Guardar como…").clicked() {
                    app.handle_save_exported_as();
                }
            }
            if ui.button("Cerrar").clicked() {
                app.handle_alert_dismiss();
            }
        });
    });

    if modal.should_close() {
        app.handle_alert_dismiss();
    }
}

/// Render the pending confirmation, if any.
pub fn render_confirm(ctx: &egui::Context, confirm: &PendingConfirm, app: &mut impl AppLike) {
    let theme = Theme::default();

    let modal = egui::Modal::new(egui::Id::new("confirm_modal")).show(ctx, |ui| {
        ui.set_width(340.0);
        ui.label(RichText::new(confirm.title()).size(18.0).strong());
        ui.add_space(8.0);
        ui.label(confirm.message());
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if ui.button("Cancelar").clicked() {
                app.handle_confirm_cancel();
            }
            let fill = match confirm {
                PendingConfirm::Logout => theme.error,
                PendingConfirm::ChangeEstado { estado, .. } => theme.action_color(*estado),
            };
            if render_button(ui, confirm.confirm_label(), Some(fill), None).clicked() {
                app.handle_confirm_accept();
            }
        });
    });

    if modal.should_close() {
        app.handle_confirm_cancel();
    }
}
