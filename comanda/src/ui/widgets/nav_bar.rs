//! # Navigation Bar
//!
//! Top bar with the role's tabs, navigation arrows and the logged-in user.
//! Only rendered for an authenticated session.

use egui::RichText;

use crate::app::{AppLike, AppState, Screen};
use crate::ui::theme::Theme;

/// Render the navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let Some(user) = state.session.user() else {
        return;
    };
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.set_height(36.0);

        ui.label(RichText::new("Comanda").size(20.0).strong().color(theme.selected));
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(2.0, 0.0);
            if ui.button("<").on_hover_text("Shift+Tab").clicked() {
                app.previous_screen();
            }
            if ui.button(">").on_hover_text("Tab").clicked() {
                app.next_screen();
            }
        });

        ui.add_space(8.0);

        for screen in Screen::tabs_for(user.role()) {
            let active = state.current_screen == *screen;
            let text = if active {
                RichText::new(screen.title()).strong().color(theme.selected)
            } else {
                RichText::new(screen.title()).color(theme.normal)
            };
            if ui.selectable_label(active, text).clicked() && !active {
                app.handle_screen_change(*screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(user.role_name()).small().color(theme.dim));
            ui.label(RichText::new(&user.nombre).strong());
            render_avatar(ui, user.initial(), 14.0, &theme);
        });
    });
}

/// Circle with the user's initial
pub fn render_avatar(ui: &mut egui::Ui, initial: char, radius: f32, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), radius, theme.selected);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(radius),
        egui::Color32::WHITE,
    );
}
