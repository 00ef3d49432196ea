//! # Invoice Creation DTOs
//!
//! Body of `POST /facturacion/crear-directa`. Lines keep `Option` fields because
//! the endpoint rejects nulls and the client must be able to see (and drop)
//! incomplete lines before sending.

use serde::{Deserialize, Serialize};

/// One invoice line in the creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetalleFacturaInput {
    pub item_id: Option<i64>,
    pub cantidad: Option<i64>,
    pub precio_unitario: Option<f64>,
}

impl DetalleFacturaInput {
    /// Item id, quantity and unit price are all present.
    pub fn is_complete(&self) -> bool {
        self.item_id.is_some() && self.cantidad.is_some() && self.precio_unitario.is_some()
    }

    /// `cantidad × precioUnitario`, zero for incomplete lines.
    pub fn line_total(&self) -> f64 {
        match (self.cantidad, self.precio_unitario) {
            (Some(cantidad), Some(precio)) => cantidad as f64 * precio,
            _ => 0.0,
        }
    }
}

/// `crear-directa` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrearFacturaDirecta {
    pub usuario_cedula: Option<String>,
    pub detalles: Vec<DetalleFacturaInput>,
    pub monto_subtotal: f64,
    pub monto_iva: f64,
    pub monto_total: f64,
    pub descripcion: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_completeness() {
        let complete = DetalleFacturaInput { item_id: Some(1), cantidad: Some(2), precio_unitario: Some(3.5) };
        let no_price = DetalleFacturaInput { item_id: Some(1), cantidad: Some(2), precio_unitario: None };

        assert!(complete.is_complete());
        assert_eq!(complete.line_total(), 7.0);
        assert!(!no_price.is_complete());
        assert_eq!(no_price.line_total(), 0.0);
    }

    #[test]
    fn test_request_is_camel_case_with_explicit_nulls() {
        let request = CrearFacturaDirecta {
            usuario_cedula: None,
            detalles: vec![DetalleFacturaInput { item_id: Some(9), cantidad: Some(3), precio_unitario: None }],
            monto_subtotal: 0.0,
            monto_iva: 0.0,
            monto_total: 0.0,
            descripcion: "d".into(),
        };

        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(body["usuarioCedula"], json!(null));
        assert_eq!(body["detalles"][0], json!({ "itemId": 9, "cantidad": 3, "precioUnitario": null }));
        assert_eq!(body["montoSubtotal"], json!(0.0));
    }
}
