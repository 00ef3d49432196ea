//! # Invoice Handlers
//!
//! Seller screen actions: detail dialog, exports, and invoice creation from an
//! authorized order.

use crate::app::events::AppEvent;
use crate::app::state::{Alert, AppState, ToastKind};
use crate::invoice::export::{share, ExportKind, ExportedFile};
use crate::invoice::{build_from_pedido, FacturaView};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Open the detail dialog for the invoice with `key`.
///
/// The dialog follows the key, so list reloads never swap the invoice shown.
/// Invoices listed without lines are fetched again by id in the background.
///
/// Internal handler function - use [`crate::app::App::handle_factura_select`] instead.
pub(crate) fn handle_factura_select(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, key: String) {
    let (api_client, factura_id) = {
        let mut state = state.write();
        let Some(view) = state.facturas.position_of(&key).and_then(|i| state.facturas.view_at(i)) else {
            return;
        };
        let factura_id = view
            .id
            .as_deref()
            .and_then(|id| id.parse::<i64>().ok())
            .filter(|_| view.lines.is_empty());

        state.facturas.selected = Some(key);
        (state.api_client.clone(), factura_id)
    };

    if let Some(factura_id) = factura_id {
        tracing::debug!(factura_id, "Invoice without lines, fetching full record");
        let tx = event_tx.clone();
        tokio::spawn(async move {
            let result = api_client.get_factura_by_id(factura_id).await;
            let _ = tx.send(AppEvent::FacturaDetalleLoaded { factura_id, result }).await;
        });
    }
}

/// Internal handler function - use [`crate::app::App::handle_factura_close`] instead.
pub(crate) fn handle_factura_close(state: Arc<RwLock<AppState>>) {
    state.write().facturas.selected = None;
}

/// Write the invoice with `key` as a document and report the file.
///
/// Internal handler function - use [`crate::app::App::handle_export_factura`] instead.
pub(crate) fn handle_export_factura(state: Arc<RwLock<AppState>>, key: &str) {
    let mut state = state.write();
    let Some(view) = state.facturas.position_of(key).and_then(|i| state.facturas.view_at(i)) else {
        tracing::warn!(key, "Invoice to export is no longer listed");
        return;
    };

    match state.exporter.export_factura(&view) {
        Ok(files) => {
            // Prefer the PDF when one was written
            let file = files
                .iter()
                .find(|f| f.kind == ExportKind::Pdf)
                .or_else(|| files.first())
                .cloned();
            if let Some(file) = file {
                let title = if file.kind == ExportKind::Pdf { "PDF Creado" } else { "Documento Creado" };
                let message = exported_message(&file);
                state.show_alert(Alert::success(title, message).with_file(file));
            }
        }
        Err(e) => {
            tracing::error!(error = %e, numero = %view.numero_label(), "Invoice export failed");
            state.show_alert(Alert::error("Error", e.user_message()));
        }
    }
}

/// Write every listed invoice into one CSV file.
///
/// Internal handler function - use [`crate::app::App::handle_export_csv`] instead.
pub(crate) fn handle_export_csv(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let views: Vec<FacturaView> = state
        .facturas
        .facturas
        .iter()
        .map(|raw| FacturaView::from_value(raw, &state.facturas.menu))
        .collect();

    match state.exporter.export_csv(&views) {
        Ok(file) => {
            let message = exported_message(&file);
            state.show_alert(Alert::success("CSV Creado", message).with_file(file));
        }
        Err(e) => {
            tracing::error!(error = %e, "CSV export failed");
            state.show_alert(Alert::error("Error", e.user_message()));
        }
    }
}

/// Hand the file attached to the open alert to the system opener.
pub(crate) fn handle_open_exported(state: Arc<RwLock<AppState>>) {
    let file = state.read().alert.as_ref().and_then(|a| a.file.clone());
    let Some(file) = file else {
        return;
    };

    if let Err(e) = share::open_with_system(&file.path) {
        state.write().show_alert(Alert::error("Error", e.user_message()));
    }
}

/// Let the user pick where to keep a copy of the exported file.
pub(crate) fn handle_save_exported_as(state: Arc<RwLock<AppState>>) {
    let file = state.read().alert.as_ref().and_then(|a| a.file.clone());
    let Some(file) = file else {
        return;
    };

    // Blocks the UI thread while the native dialog is open; the state lock is not held.
    match share::save_copy_as(&file.path) {
        Ok(Some(target)) => {
            let mut state = state.write();
            state.alert = None;
            state.toast(ToastKind::Success, format!("Guardado en {}", target.display()));
        }
        Ok(None) => {}
        Err(e) => state.write().show_alert(Alert::error("Error", e.user_message())),
    }
}

/// Create an invoice from authorized order `pedido_id`.
///
/// Orders without a usable line are rejected here, before any request.
///
/// Internal handler function - use [`crate::app::App::handle_crear_factura`] instead.
pub(crate) fn handle_crear_factura(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, pedido_id: i64) {
    let (api_client, payload) = {
        let mut state = state.write();
        if state.facturas.creating_for.is_some() {
            return;
        }
        let Some(pedido) = state.facturas.autorizados.iter().find(|p| p.id == pedido_id) else {
            return;
        };

        let payload = match build_from_pedido(pedido) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(pedido_id, error = %e, "Invoice creation rejected locally");
                state.show_alert(Alert::error("Error", e.user_message()));
                return;
            }
        };

        state.facturas.creating_for = Some(pedido_id);
        (state.api_client.clone(), payload)
    };

    tracing::info!(
        pedido_id,
        lines = payload.detalles.len(),
        total = payload.monto_total,
        "Creating invoice from authorized order"
    );
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api_client.crear_factura_directa(payload).await;
        let _ = tx.send(AppEvent::FacturaCreated { pedido_id, result }).await;
    });
}

fn exported_message(file: &ExportedFile) -> String {
    format!(
        "Archivo: {}\n\n{} factura(s) exportada(s)",
        file.file_name(),
        file.count
    )
}
