//! # Admin Orders Screen
//!
//! Order cards, newest first, with the status actions each state allows:
//! `Pendiente` → Cancelar / Autorizar, `Autorizado` → Enviar,
//! `Enviado` → Entregado. Every action goes through a confirmation first.

use egui::RichText;
use shared::{EstadoPedido, Pedido};

use crate::app::{AdminOrdersState, AppLike, AppState};
use crate::invoice::totals::format_money;
use crate::invoice::view::format_fecha;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};

/// Label of the button that moves an order to `estado`.
pub fn action_label(estado: EstadoPedido) -> &'static str {
    match estado {
        EstadoPedido::Cancelado => "Cancelar",
        EstadoPedido::Autorizado => "Autorizar",
        EstadoPedido::Enviado => "Enviar",
        EstadoPedido::Entregado => "Entregado",
        EstadoPedido::Pendiente | EstadoPedido::Desconocido => "",
    }
}

/// Render the admin orders screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let admin = &state.admin;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Pedidos").size(22.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!admin.loading, egui::Button::new("⟳ Actualizar")).clicked() {
                app.refresh_pedidos();
            }
            if admin.loading {
                ui.spinner();
            }
        });
    });

    if !admin.board.is_empty() {
        let counts: Vec<(&str, usize)> = EstadoPedido::ALL
            .iter()
            .map(|estado| {
                let n = admin.board.pedidos().iter().filter(|p| p.estado_pedido == *estado).count();
                (estado.as_str(), n)
            })
            .collect();
        tables::render_stats_summary(ui, &counts);
    }
    ui.add_space(8.0);

    if admin.loading && admin.board.is_empty() {
        tables::render_loading(ui, "Cargando pedidos…", &theme);
        return;
    }
    if admin.board.is_empty() {
        tables::render_empty_state(ui, "No hay pedidos", None, &theme);
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for pedido in admin.board.pedidos() {
            render_order_card(ui, pedido, admin, app, &theme);
            ui.add_space(8.0);
        }
    });
}

fn render_order_card(
    ui: &mut egui::Ui,
    pedido: &Pedido,
    admin: &AdminOrdersState,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    tables::render_card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Pedido #{}", pedido.id)).size(16.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                tables::render_badge(ui, pedido.estado_pedido.as_str(), theme.estado_color(pedido.estado_pedido));
            });
        });

        ui.colored_label(theme.dim, pedido.cliente());
        ui.colored_label(theme.dim, format_fecha(pedido.fecha_pedido.as_deref()));
        ui.label(
            RichText::new(format!("Total: ${}", format_money(pedido.monto_total.unwrap_or(0.0))))
                .strong()
                .color(theme.selected),
        );

        ui.add_space(4.0);
        for detalle in &pedido.detalles {
            ui.label(format!("• {}x {}", detalle.cantidad.unwrap_or(0), detalle.nombre()));
        }

        let actions = pedido.estado_pedido.next_states();
        if actions.is_empty() {
            return;
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let busy = admin.updating.is_some();
            for estado in actions {
                let clicked =
                    forms::render_action_button(ui, action_label(*estado), theme.action_color(*estado), !busy)
                        .clicked();
                if clicked {
                    app.handle_estado_click(pedido.id, *estado);
                }
            }
            if admin.updating == Some(pedido.id) {
                ui.spinner();
            }
        });
    });
}
