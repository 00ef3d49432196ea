//! Printable invoice: every value already formatted as display text.
//!
//! The HTML and PDF renderers share this so both show the same numbers.

use serde::Serialize;

use crate::invoice::totals::format_money;
use crate::invoice::view::{FacturaView, NOT_AVAILABLE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentLine {
    pub producto: String,
    pub cantidad: String,
    pub precio: String,
    pub subtotal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacturaDocument {
    pub numero: String,
    pub fecha: String,
    pub estado: String,
    pub cliente_nombre: String,
    pub cliente_cedula: String,
    pub cliente_email: String,
    pub lines: Vec<DocumentLine>,
    pub subtotal: String,
    pub iva: String,
    pub total: String,
    pub generated_at: String,
}

impl FacturaDocument {
    pub fn from_view(view: &FacturaView, generated_at: &str) -> Self {
        let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            numero: view.numero_label().to_string(),
            fecha: view.fecha_label(),
            estado: view.estado_label().to_string(),
            cliente_nombre: or_na(&view.cliente.nombre),
            cliente_cedula: or_na(&view.cliente.cedula),
            cliente_email: or_na(&view.cliente.email),
            lines: view
                .lines
                .iter()
                .map(|line| DocumentLine {
                    producto: line.producto.clone(),
                    cantidad: line.cantidad_label(),
                    precio: format_money(line.precio_unitario),
                    subtotal: format_money(line.subtotal),
                })
                .collect(),
            subtotal: format_money(view.totals.subtotal),
            iva: format_money(view.totals.iva),
            total: format_money(view.totals.total),
            generated_at: generated_at.to_string(),
        }
    }
}
