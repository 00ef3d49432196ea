//! Invoice totals.
//!
//! The client recomputes tax and total locally instead of trusting the server:
//! `iva` falls back to `subtotal × 19 %` when it is absent or zero, and `total`
//! is always `subtotal + iva`. Every consumer (list card, detail view, HTML and
//! PDF export, CSV export) goes through [`Totals::reconcile`].

use serde_json::Value;

use super::fields::{get_f64, IVA, SUBTOTAL, TOTAL};

/// Fixed IVA rate.
pub const IVA_RATE: f64 = 0.19;

/// Server totals further apart than this are logged as divergent.
const DIVERGENCE_EPSILON: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub subtotal: f64,
    pub iva: f64,
    pub total: f64,
}

impl Totals {
    /// Apply the local tax rules to whatever the server reported.
    pub fn reconcile(subtotal: Option<f64>, iva: Option<f64>, server_total: Option<f64>) -> Self {
        let subtotal = subtotal.unwrap_or(0.0);
        let iva = match iva {
            Some(iva) if iva != 0.0 => iva,
            _ => subtotal * IVA_RATE,
        };
        let total = subtotal + iva;

        if let Some(reported) = server_total {
            if (reported - total).abs() > DIVERGENCE_EPSILON {
                tracing::debug!(reported, computed = total, "Server invoice total overridden");
            }
        }

        Self { subtotal, iva, total }
    }

    /// Totals of a raw invoice object.
    pub fn from_invoice(factura: &Value) -> Self {
        Self::reconcile(
            get_f64(factura, SUBTOTAL),
            get_f64(factura, IVA),
            get_f64(factura, TOTAL),
        )
    }

    /// Totals for a freshly built invoice: tax is always 19 % of the subtotal.
    pub fn from_subtotal(subtotal: f64) -> Self {
        Self::reconcile(Some(subtotal), None, None)
    }
}

/// Money with two decimals.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}
