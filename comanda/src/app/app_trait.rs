//! # App Trait
//!
//! What screen renderers may ask of the application. `App` implements it; tests
//! and alternative front ends can implement it too.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::EstadoPedido;

use crate::app::{AppState, Screen};
use crate::session::RegisterForm;

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Auth methods
    fn handle_login_click(&mut self, email: String, password: String);
    fn handle_register_click(&mut self, form: RegisterForm, confirm_password: String);
    fn handle_switch_to_login(&mut self);
    fn handle_switch_to_signup(&mut self);
    fn handle_logout_click(&mut self);

    // Navigation methods
    fn handle_screen_change(&mut self, screen: Screen);
    fn next_screen(&mut self);
    fn previous_screen(&mut self);

    // Profile methods
    fn handle_open_change_password(&mut self);
    fn handle_close_change_password(&mut self);
    fn handle_change_password_submit(&mut self);

    // Admin order methods
    fn refresh_pedidos(&mut self);
    fn handle_estado_click(&mut self, pedido_id: i64, estado: EstadoPedido);

    // Invoice methods
    fn refresh_facturas(&mut self);
    fn handle_factura_select(&mut self, key: String);
    fn handle_factura_close(&mut self);
    fn handle_export_factura(&mut self, key: &str);
    fn handle_export_csv(&mut self);
    fn handle_crear_factura(&mut self, pedido_id: i64);

    // Dialogs
    fn handle_confirm_accept(&mut self);
    fn handle_confirm_cancel(&mut self);
    fn handle_alert_dismiss(&mut self);
    fn handle_open_exported(&mut self);
    fn handle_save_exported_as(&mut self);
}
