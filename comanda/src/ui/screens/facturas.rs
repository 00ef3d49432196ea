//! # Invoices Screen
//!
//! The seller's invoice list with CSV export, the detail dialog with PDF
//! export, and the authorized orders that still need an invoice.
//!
//! Every invoice is read through [`FacturaView`], so the card, the dialog and
//! the exported documents always agree on names and totals.

use egui::RichText;
use shared::Pedido;

use crate::app::{AppLike, AppState, FacturasState};
use crate::invoice::totals::format_money;
use crate::invoice::view::format_fecha;
use crate::invoice::FacturaView;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};

/// "1 factura", "3 facturas"
pub fn count_label(count: usize) -> String {
    format!("{} factura{}", count, if count == 1 { "" } else { "s" })
}

/// Render the invoices screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let facturas = &state.facturas;

    ui.columns(2, |columns| {
        render_invoice_list(&mut columns[0], facturas, app, &theme);
        render_autorizados(&mut columns[1], facturas, app, &theme);
    });

    if let Some(view) = facturas.selected_view() {
        render_detail(ui.ctx(), &view, app, &theme);
    }
}

fn render_invoice_list(ui: &mut egui::Ui, facturas: &FacturasState, app: &mut impl AppLike, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("Mis Facturas").size(22.0).strong());
            ui.colored_label(theme.dim, count_label(facturas.facturas.len()));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let can_export = !facturas.facturas.is_empty();
            if forms::render_action_button(ui, "Exportar CSV", theme.selected, can_export).clicked() {
                app.handle_export_csv();
            }
            if ui.add_enabled(!facturas.loading, egui::Button::new("⟳")).on_hover_text("Actualizar").clicked() {
                app.refresh_facturas();
            }
        });
    });
    ui.add_space(8.0);

    if facturas.loading && facturas.facturas.is_empty() {
        tables::render_loading(ui, "Cargando facturas…", theme);
        return;
    }
    if facturas.facturas.is_empty() {
        tables::render_empty_state(ui, "No hay facturas", None, theme);
        return;
    }

    egui::ScrollArea::vertical().id_salt("facturas_list").show(ui, |ui| {
        for (index, raw) in facturas.facturas.iter().enumerate() {
            let view = FacturaView::from_value(raw, &facturas.menu);
            let response = ui.push_id(("factura", index, view.key()), |ui| render_invoice_card(ui, &view, theme));
            let card = response.response.interact(egui::Sense::click());
            if card.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                app.handle_factura_select(view.key());
            }
            ui.add_space(8.0);
        }
    });
}

fn render_invoice_card(ui: &mut egui::Ui, view: &FacturaView, theme: &Theme) {
    tables::render_card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Factura #{}", view.numero_label())).size(16.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(view.estado_label()).strong().color(theme.selected));
            });
        });
        ui.horizontal(|ui| {
            forms::render_field(ui, "Cliente", view.cliente_label(), theme);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(view.fecha_label()).strong());
                ui.colored_label(theme.dim, "Fecha:");
            });
        });
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, "Total:");
            ui.label(
                RichText::new(format!("${}", format_money(view.totals.total)))
                    .size(16.0)
                    .strong()
                    .color(theme.selected),
            );
        });
        ui.label(RichText::new("Toca para ver detalles").small().italics().color(theme.dim));
    });
}

fn render_autorizados(ui: &mut egui::Ui, facturas: &FacturasState, app: &mut impl AppLike, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Pedidos autorizados").size(18.0).strong());
        if facturas.loading_autorizados {
            ui.spinner();
        }
    });
    ui.colored_label(theme.dim, "Pedidos listos para facturar");
    ui.add_space(8.0);

    if facturas.autorizados.is_empty() {
        let text = if facturas.loading_autorizados {
            "Cargando pedidos…"
        } else {
            "No hay pedidos autorizados"
        };
        tables::render_empty_state(ui, text, None, theme);
        return;
    }

    egui::ScrollArea::vertical().id_salt("autorizados_list").show(ui, |ui| {
        for pedido in &facturas.autorizados {
            render_autorizado_card(ui, pedido, facturas.creating_for, app, theme);
            ui.add_space(8.0);
        }
    });
}

fn render_autorizado_card(
    ui: &mut egui::Ui,
    pedido: &Pedido,
    creating_for: Option<i64>,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    tables::render_card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Pedido #{}", pedido.id)).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                tables::render_badge(ui, pedido.estado_pedido.as_str(), theme.estado_color(pedido.estado_pedido));
            });
        });
        ui.colored_label(theme.dim, pedido.cliente());
        ui.colored_label(theme.dim, format_fecha(pedido.fecha_pedido.as_deref()));
        ui.label(format!("Total: ${}", format_money(pedido.monto_total.unwrap_or(0.0))));

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let enabled = creating_for.is_none();
            if forms::render_action_button(ui, "Crear factura", theme.selected, enabled).clicked() {
                app.handle_crear_factura(pedido.id);
            }
            if creating_for == Some(pedido.id) {
                ui.spinner();
            }
        });
    });
}

fn render_detail(
    ctx: &egui::Context,
    view: &FacturaView,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    let modal = egui::Modal::new(egui::Id::new("factura_detail_modal")).show(ctx, |ui| {
        ui.set_width(520.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Detalle Factura").size(20.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").clicked() {
                    app.handle_factura_close();
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical().max_height(460.0).show(ui, |ui| {
            section_title(ui, "Información General", theme);
            forms::render_field(ui, "N° Factura", view.numero_label(), theme);
            forms::render_field(ui, "Fecha", &view.fecha_label(), theme);
            forms::render_field(ui, "Estado", view.estado_label(), theme);

            section_title(ui, "Cliente", theme);
            let not_available = crate::invoice::view::NOT_AVAILABLE;
            forms::render_field(ui, "Nombre", view.cliente.nombre.as_deref().unwrap_or(not_available), theme);
            forms::render_field(ui, "Cédula", view.cliente.cedula.as_deref().unwrap_or(not_available), theme);
            forms::render_field(ui, "Correo", view.cliente.email.as_deref().unwrap_or(not_available), theme);

            if !view.lines.is_empty() {
                section_title(ui, "Productos", theme);
                tables::render_table(
                    ui,
                    "factura_lines",
                    &["Producto", "Cantidad", "Precio Unit.", "Subtotal"],
                    view.lines.len(),
                    theme,
                    |i, row| {
                        let line = &view.lines[i];
                        row.col(|ui| {
                            ui.label(&line.producto);
                        });
                        row.col(|ui| {
                            ui.label(line.cantidad_label());
                        });
                        row.col(|ui| {
                            ui.label(format!("${}", format_money(line.precio_unitario)));
                        });
                        row.col(|ui| {
                            ui.label(format!("${}", format_money(line.subtotal)));
                        });
                    },
                );
            }

            section_title(ui, "Resumen Financiero", theme);
            forms::render_field(ui, "Subtotal", &format!("${}", format_money(view.totals.subtotal)), theme);
            forms::render_field(ui, "IVA (19%)", &format!("${}", format_money(view.totals.iva)), theme);
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(RichText::new("TOTAL:").strong());
                ui.label(
                    RichText::new(format!("${}", format_money(view.totals.total)))
                        .size(18.0)
                        .strong()
                        .color(theme.selected),
                );
            });
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if forms::render_action_button(ui, "Descargar PDF", theme.selected, true).clicked() {
                app.handle_export_factura(&view.key());
            }
            if ui.button("Cerrar").clicked() {
                app.handle_factura_close();
            }
        });
    });

    if modal.should_close() {
        app.handle_factura_close();
    }
}

fn section_title(ui: &mut egui::Ui, title: &str, theme: &Theme) {
    ui.add_space(10.0);
    ui.label(RichText::new(title).size(15.0).strong().color(theme.selected));
    ui.add_space(4.0);
}
