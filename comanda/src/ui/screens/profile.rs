//! # Profile Screen
//!
//! Account details of the logged-in user, the change-password dialog and
//! logout.

use egui::RichText;
use shared::RolKind;

use crate::app::{AppLike, AppState, ProfileState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, nav_bar, tables};

/// Render the profile screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let Some(user) = state.session.user() else {
        return;
    };

    let role_color = if user.role() == RolKind::Administrador {
        theme.selected
    } else {
        theme.info
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            nav_bar::render_avatar(ui, user.initial(), 40.0, &theme);
            ui.add_space(8.0);
            ui.label(RichText::new(&user.nombre).size(22.0).strong());
            tables::render_badge(ui, &user.role_initial().to_string(), role_color);
            ui.add_space(4.0);
            ui.colored_label(theme.dim, user.role_name());
        });

        ui.add_space(16.0);

        tables::render_card(ui, &theme, |ui| {
            ui.label(RichText::new("Detalles de la Cuenta").size(16.0).strong());
            ui.add_space(8.0);
            render_info_row(ui, "Correo Electrónico", &user.email, &theme);
            render_info_row(
                ui,
                "Cédula",
                user.cedula.as_deref().unwrap_or("No registrada"),
                &theme,
            );
            if let Some(direccion) = user.direccion_principal.as_deref().filter(|d| !d.is_empty()) {
                render_info_row(ui, "Dirección Principal", direccion, &theme);
            }
        });

        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if forms::render_button(ui, "Cambiar Contraseña", Some(theme.info), None).clicked() {
                app.handle_open_change_password();
            }
            if ui
                .button(RichText::new("Cerrar Sesión").color(theme.selected).strong())
                .clicked()
            {
                app.handle_logout_click();
            }
        });
    });

    if state.profile.show_change_password {
        render_change_password(ui.ctx(), &state.profile, app, &theme);
    }
}

fn render_info_row(ui: &mut egui::Ui, label: &str, value: &str, theme: &Theme) {
    ui.add_space(4.0);
    ui.label(RichText::new(label).small().color(theme.dim));
    ui.label(RichText::new(value).size(15.0));
    ui.add_space(4.0);
}

fn render_change_password(ctx: &egui::Context, profile: &ProfileState, app: &mut impl AppLike, theme: &Theme) {
    let mut old_input = profile.old_password.clone();
    let mut new_input = profile.new_password.clone();
    let mut confirm_input = profile.confirm_password.clone();

    let reveal_id = egui::Id::new("profile_reveal_passwords");
    let mut reveal = ctx.data(|d| d.get_temp::<bool>(reveal_id).unwrap_or(false));

    let modal = egui::Modal::new(egui::Id::new("change_password_modal")).show(ctx, |ui| {
        ui.set_width(320.0);
        forms::render_form_heading(ui, "Cambiar Contraseña", theme);

        let size = [300.0, 30.0];
        let mut changed = false;
        ui.add_enabled_ui(!profile.submitting, |ui| {
            changed |= forms::render_text_input(ui, "Contraseña Actual", &mut old_input, "", !reveal, size).changed();
            ui.add_space(6.0);
            changed |= forms::render_text_input(ui, "Nueva Contraseña", &mut new_input, "", !reveal, size).changed();
            ui.add_space(6.0);
            changed |=
                forms::render_text_input(ui, "Confirmar Nueva Contraseña", &mut confirm_input, "", !reveal, size)
                    .changed();
            ui.add_space(6.0);
            ui.checkbox(&mut reveal, "Mostrar contraseñas");
        });

        if changed {
            let mut state = app.state().write();
            state.profile.old_password = old_input.clone();
            state.profile.new_password = new_input.clone();
            state.profile.confirm_password = confirm_input.clone();
        }

        ui.add_space(10.0);
        if let Some(err) = &profile.error {
            forms::render_error(ui, err, theme);
        }

        ui.horizontal(|ui| {
            if profile.submitting {
                ui.spinner();
                return;
            }
            if ui.button("Cancelar").clicked() {
                app.handle_close_change_password();
            }
            if forms::render_button(ui, "Cambiar", Some(theme.selected), None).clicked() {
                app.handle_change_password_submit();
            }
        });
    });

    ctx.data_mut(|d| d.insert_temp(reveal_id, reveal));

    if modal.should_close() {
        app.handle_close_change_password();
    }
}
