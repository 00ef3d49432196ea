//! Canonical invoice view.
//!
//! [`FacturaView::from_value`] is the single place where a raw invoice object is
//! read. The list card, the detail modal and every export render from it.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde_json::Value;
use shared::parse_timestamp;

use super::detalles::{display_product_name, normalize_detalles};
use super::fields::{
    get_f64, get_text, get_val, CLIENTE_CEDULA, CLIENTE_EMAIL, CLIENTE_NOMBRE, DETALLES, ESTADO,
    FECHA, ID, LINE_CANTIDAD, LINE_PRECIO, LINE_SUBTOTAL, NUMERO, USUARIO,
};
use super::menu::MenuMap;
use super::totals::Totals;

/// Placeholder for missing text fields.
pub const NOT_AVAILABLE: &str = "N/A";
/// Card label when an invoice names no client.
pub const DEFAULT_CLIENTE: &str = "Cliente";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClienteView {
    pub nombre: Option<String>,
    pub cedula: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineaView {
    pub producto: String,
    pub cantidad: f64,
    pub precio_unitario: f64,
    pub subtotal: f64,
}

impl LineaView {
    fn from_value(line: &Value, menu: &MenuMap) -> Self {
        let cantidad = get_f64(line, LINE_CANTIDAD).unwrap_or(0.0);
        let precio_unitario = get_f64(line, LINE_PRECIO).unwrap_or(0.0);
        let subtotal = get_f64(line, LINE_SUBTOTAL)
            .filter(|s| *s != 0.0)
            .unwrap_or(cantidad * precio_unitario);

        Self {
            producto: display_product_name(line, menu),
            cantidad,
            precio_unitario,
            subtotal,
        }
    }

    /// Whole quantities without decimals, fractional ones with two.
    pub fn cantidad_label(&self) -> String {
        if self.cantidad.fract() == 0.0 {
            format!("{:.0}", self.cantidad)
        } else {
            format!("{:.2}", self.cantidad)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacturaView {
    pub id: Option<String>,
    pub numero: Option<String>,
    pub fecha: Option<DateTime<Utc>>,
    pub fecha_raw: Option<String>,
    pub estado: Option<String>,
    pub cliente: ClienteView,
    pub lines: Vec<LineaView>,
    pub totals: Totals,
}

impl FacturaView {
    pub fn from_value(factura: &Value, menu: &MenuMap) -> Self {
        let usuario = factura.get(USUARIO).filter(|u| u.is_object());
        let from_usuario = |key: &str| usuario.and_then(|u| get_text(u, &[key]));

        let cliente = ClienteView {
            nombre: get_text(factura, CLIENTE_NOMBRE).or_else(|| from_usuario("nombre")),
            cedula: get_text(factura, CLIENTE_CEDULA).or_else(|| from_usuario("cedula")),
            email: get_text(factura, CLIENTE_EMAIL).or_else(|| from_usuario("email")),
        };

        let fecha_value = get_val(factura, FECHA);
        let lines = get_val(factura, DETALLES)
            .map(normalize_detalles)
            .unwrap_or_default()
            .iter()
            .map(|line| LineaView::from_value(line, menu))
            .collect();

        Self {
            id: get_text(factura, ID),
            numero: get_text(factura, NUMERO),
            fecha: fecha_value.and_then(shared::value_as_timestamp),
            fecha_raw: get_text(factura, FECHA),
            estado: get_text(factura, ESTADO),
            cliente,
            lines,
            totals: Totals::from_invoice(factura),
        }
    }

    pub fn numero_label(&self) -> &str {
        self.numero.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn estado_label(&self) -> &str {
        self.estado.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// `dd/MM/yyyy`, the raw text when it is not a date, `N/A` when absent.
    pub fn fecha_label(&self) -> String {
        match (&self.fecha_raw, self.fecha) {
            (Some(raw), _) if NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").is_ok() => {
                format_date_only(raw)
            }
            (_, Some(fecha)) => fecha.with_timezone(&Local).format("%d/%m/%Y").to_string(),
            (Some(raw), None) => raw.clone(),
            (None, None) => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn cliente_label(&self) -> &str {
        self.cliente.nombre.as_deref().unwrap_or(DEFAULT_CLIENTE)
    }

    /// Invoice number safe for a file name, `factura` when unknown.
    pub fn file_numero(&self) -> String {
        let numero = self.numero.as_deref().unwrap_or("factura");
        numero
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect()
    }

    /// Stable key for de-duplication and widget ids.
    pub fn key(&self) -> String {
        self.id
            .clone()
            .or_else(|| self.numero.clone())
            .unwrap_or_default()
    }
}

fn format_date_only(raw: &str) -> String {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Raw timestamp text → `dd/MM/yyyy` (local time), `N/A` when unparseable.
pub fn format_fecha(raw: Option<&str>) -> String {
    match raw.and_then(parse_timestamp) {
        Some(fecha) => fecha.with_timezone(&Local).format("%d/%m/%Y").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}
