//! # GUI Theme
//!
//! Light theme with the Comanda red accent for egui, plus the status colors
//! shared by the order badges and action buttons.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use shared::EstadoPedido;

/// Comanda color palette
#[derive(Clone)]
pub struct ComandaColors {
    /// Page background (#F5F5F5)
    pub background: Color32,
    /// Card and panel fill (white)
    pub surface: Color32,
    /// Main text
    pub text: Color32,
    /// Brand red (#D7263D)
    pub accent: Color32,
    /// Pale red used behind selected tabs (#F7E9EB)
    pub accent_soft: Color32,
    /// Card borders (#E0E0E0)
    pub border: Color32,
    /// Row stripes and inactive fills (#F0F0F0)
    pub faint: Color32,
    /// Secondary text
    pub gray_secondary: Color32,
    /// Emerald (#10B981)
    pub green_success: Color32,
    /// Red (#EF4444)
    pub red_error: Color32,
    /// Amber
    pub yellow_warning: Color32,
    /// Blue (#3B82F6)
    pub blue_info: Color32,
    /// Violet (#8B5CF6), used for the role badge
    pub violet: Color32,
}

impl Default for ComandaColors {
    fn default() -> Self {
        ComandaColors {
            background: Color32::from_rgb(245, 245, 245),   // #F5F5F5
            surface: Color32::WHITE,
            text: Color32::from_rgb(33, 33, 33),            // #212121
            accent: Color32::from_rgb(215, 38, 61),         // #D7263D
            accent_soft: Color32::from_rgb(247, 233, 235),  // #F7E9EB
            border: Color32::from_rgb(224, 224, 224),       // #E0E0E0
            faint: Color32::from_rgb(240, 240, 240),        // #F0F0F0
            gray_secondary: Color32::from_rgb(110, 110, 110),

            green_success: Color32::from_rgb(16, 185, 129), // #10B981
            red_error: Color32::from_rgb(239, 68, 68),      // #EF4444
            yellow_warning: Color32::from_rgb(245, 158, 11), // #F59E0B
            blue_info: Color32::from_rgb(59, 130, 246),     // #3B82F6
            violet: Color32::from_rgb(139, 92, 246),        // #8B5CF6
        }
    }
}

/// Application theme
pub struct Theme {
    /// Color palette
    pub colors: ComandaColors,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items (brand red)
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    /// Card fill
    pub surface: Color32,
    /// Background color
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = ComandaColors::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.accent,
            border: colors.border,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            info: colors.blue_info,
            surface: colors.surface,
            background: colors.background,
        }
    }
}

impl Theme {
    /// Badge color for an order status.
    pub fn estado_color(&self, estado: EstadoPedido) -> Color32 {
        match estado {
            EstadoPedido::Pendiente => self.warning,
            EstadoPedido::Autorizado => self.success,
            EstadoPedido::Enviado => self.info,
            EstadoPedido::Entregado => Color32::from_rgb(22, 163, 74), // #16A34A
            EstadoPedido::Cancelado => self.error,
            EstadoPedido::Desconocido => self.dim,
        }
    }

    /// Fill of the action button that moves an order to `estado`.
    pub fn action_color(&self, estado: EstadoPedido) -> Color32 {
        match estado {
            EstadoPedido::Cancelado => self.error,
            EstadoPedido::Enviado => self.info,
            EstadoPedido::Autorizado | EstadoPedido::Entregado => self.success,
            EstadoPedido::Pendiente | EstadoPedido::Desconocido => self.selected,
        }
    }

    /// Create Comanda egui Visuals
    pub fn comanda_visuals() -> Visuals {
        let colors = ComandaColors::default();
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.text);

        visuals.faint_bg_color = colors.faint;
        visuals.extreme_bg_color = colors.surface;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.faint;
        visuals.widgets.inactive.weak_bg_fill = colors.faint;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        // Hover and press tint toward the brand red
        visuals.widgets.hovered.bg_fill = colors.accent_soft;
        visuals.widgets.hovered.weak_bg_fill = colors.accent_soft;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);

        visuals.widgets.active.bg_fill = colors.accent_soft;
        visuals.widgets.active.weak_bg_fill = colors.accent_soft;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.accent);

        visuals.widgets.open.bg_fill = colors.accent_soft;
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, colors.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(215, 38, 61, 60);
        visuals.selection.stroke = Stroke::new(1.0, colors.accent);

        visuals.hyperlink_color = colors.accent;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the Comanda theme to an egui context.
    ///
    /// Uses `style_mut_of` for both egui themes so a system theme switch keeps
    /// the same look.
    pub fn apply(ctx: &Context) {
        let visuals = Self::comanda_visuals();

        for theme in [EguiTheme::Light, EguiTheme::Dark] {
            let visuals = visuals.clone();
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.window_margin = egui::Margin::same(12);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
            });
        }

        tracing::debug!("Applied Comanda theme visuals");
    }
}
