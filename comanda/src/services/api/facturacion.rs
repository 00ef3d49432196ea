//! # Invoice Endpoints
//!
//! REST endpoints under `<rest base>/facturacion`. Responses are returned as raw
//! JSON; [`crate::invoice`] turns them into something displayable.

use serde_json::Value;
use shared::CrearFacturaDirecta;

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

/// Invoices of the logged-in user.
pub async fn get_mis_facturas(client: &ApiClient) -> Result<Value> {
    client.rest_get("facturacion/mis-facturas").await
}

pub async fn get_factura_by_id(client: &ApiClient, id: i64) -> Result<Value> {
    client.rest_get(&format!("facturacion/{}", id)).await
}

/// Every invoice (seller and admin accounts).
pub async fn get_all_facturas(client: &ApiClient) -> Result<Value> {
    client.rest_get("facturacion").await
}

/// Create an invoice from caller-supplied lines.
///
/// Lines missing `itemId`, `cantidad` or `precioUnitario` are dropped first; if
/// none survive the call fails with [`AppError::Validation`] and nothing is sent.
#[tracing::instrument(skip_all, fields(lines = payload.detalles.len()))]
pub async fn crear_factura_directa(client: &ApiClient, payload: CrearFacturaDirecta) -> Result<Value> {
    let payload = sanitize_detalles(payload)?;

    match serde_json::to_string(&payload) {
        Ok(body) => tracing::debug!(payload = %body, "Sending crear-directa"),
        Err(e) => tracing::debug!(error = %e, "crear-directa payload not printable"),
    }

    let created = client.rest_post("facturacion/crear-directa", &payload).await?;
    tracing::info!(lines = payload.detalles.len(), total = payload.monto_total, "Invoice created");
    Ok(created)
}

/// Keep only complete lines; fail when none are left.
pub fn sanitize_detalles(mut payload: CrearFacturaDirecta) -> Result<CrearFacturaDirecta> {
    let original = payload.detalles.len();
    payload.detalles.retain(|linea| linea.is_complete());
    let sent = payload.detalles.len();

    if sent < original {
        tracing::warn!(original, sent, dropped = original - sent, "Dropped incomplete invoice lines");
    }

    if sent == 0 {
        return Err(AppError::Validation(
            "El pedido no tiene detalles válidos para crear factura".to_string(),
        ));
    }
    Ok(payload)
}
