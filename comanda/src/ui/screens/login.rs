//! # Login Screen
//!
//! Login and registration forms using egui widgets. Text edits are written
//! back into [`AuthState`] as they happen; the buttons hand the values to the
//! app handlers, which validate them.

use egui::RichText;

use crate::app::{AppLike, AppState, AuthState};
use crate::session::RegisterForm;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const FIELD_SIZE: [f32; 2] = [300.0, 30.0];

/// Render the login/registration screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(RichText::new("Pedido Listo").size(32.0).strong().color(theme.selected));
            ui.add_space(24.0);

            egui::Frame::new()
                .fill(theme.surface)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .corner_radius(12.0)
                .inner_margin(egui::Margin::same(24))
                .show(ui, |ui| {
                    ui.set_width(FIELD_SIZE[0]);
                    match &state.auth {
                        AuthState::Login {
                            email,
                            password,
                            error,
                            submitting,
                        } => render_login_form(ui, email, password, error.as_deref(), *submitting, app, &theme),
                        AuthState::Signup {
                            form,
                            confirm_password,
                            error,
                            submitting,
                        } => render_signup_form(
                            ui,
                            form,
                            confirm_password,
                            error.as_deref(),
                            *submitting,
                            app,
                            &theme,
                        ),
                    }
                });
        });
    });
}

fn render_login_form(
    ui: &mut egui::Ui,
    email: &str,
    password: &str,
    error: Option<&str>,
    submitting: bool,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Bienvenido de vuelta", theme);

    let mut email_input = email.to_string();
    let mut password_input = password.to_string();

    let email_response = forms::render_text_input(
        ui,
        "Correo electrónico",
        &mut email_input,
        "tu@correo.com",
        false,
        FIELD_SIZE,
    );
    ui.add_space(10.0);
    let password_response =
        forms::render_text_input(ui, "Contraseña", &mut password_input, "••••••", true, FIELD_SIZE);

    if email_response.changed() || password_response.changed() {
        let mut state = app.state().write();
        if let AuthState::Login { email, password, .. } = &mut state.auth {
            *email = email_input.clone();
            *password = password_input.clone();
        }
    }

    let submit = forms::submitted(ui, &password_response);
    ui.add_space(15.0);

    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    if submitting {
        ui.horizontal(|ui| {
            ui.spinner();
            forms::render_hint(ui, "Ingresando…", theme);
        });
        return;
    }

    let clicked = forms::render_button(
        ui,
        "Iniciar sesión",
        Some(theme.selected),
        Some(egui::vec2(FIELD_SIZE[0], 36.0)),
    )
    .clicked();
    if clicked || submit {
        app.handle_login_click(email_input, password_input);
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        forms::render_hint(ui, "¿No tienes cuenta?", theme);
        if ui.link("Regístrate").clicked() {
            app.handle_switch_to_signup();
        }
    });
}

fn render_signup_form(
    ui: &mut egui::Ui,
    form: &RegisterForm,
    confirm_password: &str,
    error: Option<&str>,
    submitting: bool,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Crear cuenta", theme);

    let mut form_input = form.clone();
    let mut confirm_input = confirm_password.to_string();
    let mut changed = false;

    {
        let fields: [(&str, &str, &mut String, bool); 7] = [
            ("Cédula", "1234567890", &mut form_input.cedula, false),
            ("Nombre", "Nombre", &mut form_input.nombre, false),
            ("Apellido", "Apellido", &mut form_input.apellido, false),
            ("Correo electrónico", "tu@correo.com", &mut form_input.email, false),
            ("Teléfono", "300 000 0000", &mut form_input.telefono, false),
            ("Dirección", "Calle 1 # 2-3", &mut form_input.direccion, false),
            ("Contraseña", "Mínimo 6 caracteres", &mut form_input.password, true),
        ];
        for (label, hint, value, password) in fields {
            changed |= forms::render_text_input(ui, label, value, hint, password, FIELD_SIZE).changed();
            ui.add_space(6.0);
        }
    }

    let confirm_response = forms::render_text_input(
        ui,
        "Confirmar contraseña",
        &mut confirm_input,
        "Repite la contraseña",
        true,
        FIELD_SIZE,
    );
    changed |= confirm_response.changed();

    if changed {
        let mut state = app.state().write();
        if let AuthState::Signup {
            form,
            confirm_password,
            ..
        } = &mut state.auth
        {
            *form = form_input.clone();
            *confirm_password = confirm_input.clone();
        }
    }

    let submit = forms::submitted(ui, &confirm_response);
    ui.add_space(15.0);

    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    if submitting {
        ui.horizontal(|ui| {
            ui.spinner();
            forms::render_hint(ui, "Creando cuenta…", theme);
        });
        return;
    }

    let clicked = forms::render_button(
        ui,
        "Registrarse",
        Some(theme.selected),
        Some(egui::vec2(FIELD_SIZE[0], 36.0)),
    )
    .clicked();
    if clicked || submit {
        app.handle_register_click(form_input, confirm_input);
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        forms::render_hint(ui, "¿Ya tienes cuenta?", theme);
        if ui.link("Inicia sesión").clicked() {
            app.handle_switch_to_login();
        }
    });
}
