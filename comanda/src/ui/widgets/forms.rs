//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use egui::{FontId, RichText};

use crate::ui::theme::Theme;

/// Render a labelled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    size: [f32; 2],
) -> egui::Response {
    ui.label(RichText::new(label).font(FontId::proportional(14.0)));
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint)
            .font(FontId::proportional(14.0)),
    )
}

/// Render a styled button
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut label = RichText::new(text).font(FontId::proportional(16.0));
    if fill_color.is_some() {
        label = label.color(egui::Color32::WHITE).strong();
    }

    let mut button = egui::Button::new(label);
    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add(button)
}

/// Render a filled button that is greyed out while `enabled` is false
pub fn render_action_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: egui::Color32,
    enabled: bool,
) -> egui::Response {
    let button = egui::Button::new(RichText::new(text).color(egui::Color32::WHITE).strong())
        .fill(fill_color)
        .min_size(egui::vec2(96.0, 30.0));
    ui.add_enabled(enabled, button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    let heading = RichText::new(text)
        .font(FontId::proportional(24.0))
        .strong()
        .color(theme.selected);
    ui.label(heading);
    ui.add_space(20.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(RichText::new(error).font(FontId::proportional(14.0)).color(theme.error));
    ui.add_space(10.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(RichText::new(hint).font(FontId::proportional(14.0)).color(theme.dim));
}

/// Render a `label: value` line, value strong
pub fn render_field(ui: &mut egui::Ui, label: &str, value: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{}:", label)).color(theme.dim));
        ui.label(RichText::new(value).strong());
    });
}

/// Whether Enter was pressed while `response` had focus
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
