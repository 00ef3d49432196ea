//! # Table Components
//!
//! Reusable list and table pieces for displaying data consistently

use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::ui::theme::Theme;

/// Render a striped table with fixed headers. `rows` is called once per row
/// with the row index and must fill one cell per header.
pub fn render_table<F>(ui: &mut egui::Ui, id: &str, headers: &[&str], row_count: usize, theme: &Theme, mut rows: F)
where
    F: FnMut(usize, &mut egui_extras::TableRow<'_, '_>),
{
    ui.push_id(id, |ui| {
        let mut table = TableBuilder::new(ui).striped(true).vscroll(false);
        for (i, _) in headers.iter().enumerate() {
            // First column takes the slack (product names)
            table = if i == 0 {
                table.column(Column::remainder().at_least(140.0))
            } else {
                table.column(Column::auto().at_least(70.0))
            };
        }

        table
            .header(24.0, |mut header| {
                for title in headers {
                    header.col(|ui| {
                        ui.label(RichText::new(*title).strong().color(theme.selected));
                    });
                }
            })
            .body(|mut body| {
                for index in 0..row_count {
                    body.row(22.0, |mut row| rows(index, &mut row));
                }
            });
    });
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.label(RichText::new(primary_text).size(16.0).color(theme.dim));
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}

/// Render a loading row with a spinner
pub fn render_loading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.spinner();
        ui.colored_label(theme.dim, text);
    });
}

/// Render stats summary (e.g., "Pendiente: 3  |  Autorizado: 1")
pub fn render_stats_summary(ui: &mut egui::Ui, stats: &[(&str, usize)]) {
    ui.horizontal(|ui| {
        let parts: Vec<String> = stats
            .iter()
            .map(|(label, count)| format!("{}: {}", label, count))
            .collect();
        ui.label(parts.join("  |  "));
    });
}

/// Render a small filled badge with white text
pub fn render_badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(egui::Color32::WHITE));
        });
}

/// Render a white card with a border
pub fn render_card<R>(ui: &mut egui::Ui, theme: &Theme, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}
