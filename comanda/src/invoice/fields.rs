//! Field alias table.
//!
//! The backend spells the same invoice field several ways depending on the
//! endpoint (`monto_subtotal`, `montoSubtotal`, `subtotal`). Each canonical
//! field lists its spellings here, in priority order; lookups take the first
//! key whose value is not null. Delete aliases from this table as endpoints
//! settle on one spelling.

use serde_json::Value;
use shared::{value_as_f64, value_as_string};

pub const ID: &[&str] = &["factura_id", "id", "id_factura"];
pub const NUMERO: &[&str] = &["numero_factura", "numeroFactura", "numero", "number"];
pub const FECHA: &[&str] = &["fecha_factura", "fechaFactura", "fecha", "date"];
pub const ESTADO: &[&str] = &["estado_factura", "estadoFactura", "estado", "status"];
pub const SUBTOTAL: &[&str] = &["monto_subtotal", "montoSubtotal", "subtotal"];
pub const IVA: &[&str] = &["monto_iva", "montoIva", "tax"];
pub const TOTAL: &[&str] = &["monto_total", "montoTotal", "total"];
pub const DETALLES: &[&str] = &["detalles", "detalle_factura", "items"];

pub const CLIENTE_NOMBRE: &[&str] = &["cliente_nombre", "clienteNombre", "cli_nombre"];
pub const CLIENTE_EMAIL: &[&str] = &["cliente_email", "clienteEmail", "cli_email"];
pub const CLIENTE_CEDULA: &[&str] = &["usuario_cedula", "usuarioCedula", "client_id"];
/// Nested user object carrying `nombre`, `email`, `cedula`.
pub const USUARIO: &str = "usuario";

pub const LINE_ITEM_ID: &[&str] = &["item_id", "itemId"];
pub const LINE_CANTIDAD: &[&str] = &["cantidad", "qty"];
pub const LINE_PRECIO: &[&str] = &["precio_unitario", "precioUnitario", "price", "precio"];
pub const LINE_SUBTOTAL: &[&str] = &["subtotal", "subTotal"];

/// First non-null value among `keys`.
pub fn get_val<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

/// First scalar among `keys` rendered as non-blank text.
pub fn get_text(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .filter_map(value_as_string)
        .find(|text| !text.trim().is_empty())
}

/// First value among `keys` that reads as a number.
pub fn get_f64(obj: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(value_as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_non_null_alias_wins() {
        let factura = json!({ "numero_factura": null, "numeroFactura": "F-002", "numero": "ignored" });
        assert_eq!(get_val(&factura, NUMERO), Some(&json!("F-002")));
        assert_eq!(get_text(&factura, NUMERO).as_deref(), Some("F-002"));
    }

    #[test]
    fn test_numbers_from_strings_and_numbers() {
        let factura = json!({ "montoSubtotal": "12.50", "tax": 0 });
        assert_eq!(get_f64(&factura, SUBTOTAL), Some(12.5));
        assert_eq!(get_f64(&factura, IVA), Some(0.0));
        assert_eq!(get_f64(&factura, TOTAL), None);
    }

    #[test]
    fn test_blank_text_and_objects_are_skipped() {
        let line = json!({ "item_id": "", "itemId": 7 });
        assert_eq!(get_text(&line, LINE_ITEM_ID).as_deref(), Some("7"));

        let nested = json!({ "cliente_nombre": { "nombre": "x" } });
        assert_eq!(get_text(&nested, CLIENTE_NOMBRE), None);
    }
}
