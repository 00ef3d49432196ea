//! Invoice request built from an authorized order.

use shared::{CrearFacturaDirecta, DetalleFacturaInput, DetallePedido, Pedido};

use super::totals::Totals;
use crate::core::error::{AppError, Result};

pub const NO_VALID_LINES: &str = "El pedido no tiene detalles válidos para crear factura";

/// Turn an order into a `crear-directa` request.
///
/// Each line takes its item id from the line or its `platillo`, and its unit
/// price from `precioUnitario`, `platillo.precio` or `precio` (first non-zero,
/// else an explicit zero). Lines missing the id, the price or the quantity are
/// dropped. Tax is 19 % of
/// the subtotal.
pub fn build_from_pedido(pedido: &Pedido) -> Result<CrearFacturaDirecta> {
    let detalles: Vec<DetalleFacturaInput> = pedido
        .detalles
        .iter()
        .map(line_from_detalle)
        .filter(DetalleFacturaInput::is_complete)
        .collect();

    if detalles.len() < pedido.detalles.len() {
        tracing::warn!(
            pedido_id = pedido.id,
            original = pedido.detalles.len(),
            kept = detalles.len(),
            "Order lines skipped for invoice"
        );
    }

    if detalles.is_empty() {
        return Err(AppError::Validation(NO_VALID_LINES.to_string()));
    }

    let subtotal: f64 = detalles.iter().map(DetalleFacturaInput::line_total).sum();
    let totals = Totals::from_subtotal(subtotal);

    Ok(CrearFacturaDirecta {
        usuario_cedula: pedido.usuario_cedula.clone(),
        detalles,
        monto_subtotal: totals.subtotal,
        monto_iva: totals.iva,
        monto_total: totals.total,
        descripcion: format!("Factura generada manualmente desde app (Pedido #{})", pedido.id),
    })
}

fn line_from_detalle(detalle: &DetallePedido) -> DetalleFacturaInput {
    let platillo = detalle.platillo.as_ref();

    let item_id = detalle
        .item_id
        .or_else(|| platillo.and_then(|p| p.id))
        .or_else(|| platillo.and_then(|p| p.item_id));

    let precios: Vec<f64> = [
        detalle.precio_unitario,
        platillo.and_then(|p| p.precio),
        detalle.precio,
    ]
    .into_iter()
    .flatten()
    .collect();

    // A zero defers to a later source but still counts as a price.
    let precio_unitario = precios
        .iter()
        .copied()
        .find(|precio| *precio != 0.0)
        .or_else(|| precios.first().copied());

    DetalleFacturaInput {
        item_id,
        cantidad: detalle.cantidad,
        precio_unitario,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pedido(value: serde_json::Value) -> Pedido {
        serde_json::from_value(value).expect("pedido should parse")
    }

    #[test]
    fn test_pizza_order_totals() {
        let pedido = pedido(json!({
            "id": 5,
            "estadoPedido": "Autorizado",
            "detalles": [{ "cantidad": 3, "platillo": { "id": 9, "nombreItem": "Pizza", "precio": 10 } }]
        }));

        let request = build_from_pedido(&pedido).expect("valid order");

        assert_eq!(request.detalles.len(), 1);
        assert_eq!(request.detalles[0].item_id, Some(9));
        assert_eq!(request.detalles[0].precio_unitario, Some(10.0));
        assert!((request.monto_subtotal - 30.0).abs() < 1e-9);
        assert!((request.monto_iva - 5.7).abs() < 1e-9);
        assert!((request.monto_total - 35.7).abs() < 1e-9);
        assert_eq!(request.descripcion, "Factura generada manualmente desde app (Pedido #5)");
    }

    #[test]
    fn test_price_sources_in_order() {
        let pedido = pedido(json!({
            "id": 6,
            "usuarioCedula": "0912",
            "detalles": [
                { "itemId": 1, "cantidad": 1, "precioUnitario": 0, "precio": 4, "platillo": { "precio": 0 } },
                { "cantidad": 2, "precioUnitario": 2.5, "platillo": { "item_id": 3 } }
            ]
        }));

        let request = build_from_pedido(&pedido).expect("valid order");

        assert_eq!(request.usuario_cedula.as_deref(), Some("0912"));
        assert_eq!(request.detalles[0].precio_unitario, Some(4.0));
        assert_eq!(request.detalles[1].item_id, Some(3));
        assert!((request.monto_subtotal - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_free_item_keeps_zero_price() {
        let pedido = pedido(json!({
            "id": 11,
            "detalles": [{ "cantidad": 1, "platillo": { "id": 4, "precio": 0 } }]
        }));

        let request = build_from_pedido(&pedido).expect("free items are still invoiceable");

        assert_eq!(request.detalles.len(), 1);
        assert_eq!(request.detalles[0].precio_unitario, Some(0.0));
        assert_eq!(request.monto_total, 0.0);
    }

    #[test]
    fn test_order_without_usable_lines_is_rejected() {
        let pedido = pedido(json!({
            "id": 7,
            "detalles": [
                { "cantidad": 2, "platillo": { "nombreItem": "Sin id", "precio": 3 } },
                { "itemId": 4, "cantidad": 1 }
            ]
        }));

        let result = build_from_pedido(&pedido);
        assert_eq!(result, Err(AppError::Validation(NO_VALID_LINES.to_string())));
    }
}
