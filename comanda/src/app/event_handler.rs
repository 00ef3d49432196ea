//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! Every failure ends here as a blocking [`Alert`] (or, for background
//! conveniences like the menu map, a log line) and leaves the current screen
//! usable.

use serde_json::Value;
use shared::{EstadoPedido, Pedido, PedidoEstado, Platillo, RegisterPayload, User};

use crate::app::state::{Alert, AuthState, Screen, ToastKind};
use crate::app::{tasks, App, AppEvent};
use crate::core::error::AppError;
use crate::invoice::{merge_created, FacturaView, MenuMap};

pub const LOGIN_FAILED: &str = "Credenciales incorrectas";
pub const LOGIN_NETWORK_FAILED: &str = "Ocurrió un problema inesperado de conexión";
pub const PEDIDOS_LOAD_FAILED: &str = "No se pudieron cargar los pedidos. Revisa la consola para más detalles.";
pub const AUTORIZADOS_LOAD_FAILED: &str = "No se pudieron cargar pedidos autorizados";
pub const ESTADO_UPDATE_FAILED: &str = "No se pudo actualizar en el servidor";
pub const PEDIDO_AUTORIZADO_TITLE: &str = "Pedido autorizado";
pub const PEDIDO_AUTORIZADO_MESSAGE: &str =
    "El pedido fue autorizado. El vendedor lo verá en su pantalla para crear la factura.";
pub const FACTURA_CREATED: &str = "Factura creada correctamente";
pub const FACTURA_CREATE_FAILED_TITLE: &str = "Error creando factura";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event, for the duration of one handler.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::RegisterResult(result) => self.handle_register_result(result),
            AppEvent::ChangePasswordResult(result) => self.handle_change_password_result(result),
            AppEvent::PedidosLoaded(result) => self.handle_pedidos_loaded(result),
            AppEvent::PedidoEstadoUpdated { pedido_id, estado, result } => {
                self.handle_pedido_estado_updated(pedido_id, estado, result)
            }
            AppEvent::FacturasLoaded(result) => self.handle_facturas_loaded(result),
            AppEvent::FacturaDetalleLoaded { factura_id, result } => {
                self.handle_factura_detalle_loaded(factura_id, result)
            }
            AppEvent::MenuLoaded(result) => self.handle_menu_loaded(result),
            AppEvent::AutorizadosLoaded(result) => self.handle_autorizados_loaded(result),
            AppEvent::FacturaCreated { pedido_id, result } => self.handle_factura_created(pedido_id, result),
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<User, AppError>) {
        let home = {
            let mut state = self.state.write();
            match result {
                Ok(user) => {
                    let home = Screen::home_for(user.role());
                    tracing::info!(nombre = %user.nombre, rol = %user.role_name(), "Login successful");
                    state.toast(ToastKind::Success, format!("Bienvenido, {}", user.nombre));
                    state.session.set_user(user);
                    state.reset_screens();
                    state.auth = AuthState::login();
                    state.current_screen = home;
                    Some(home)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    let message = if e.is_network() { LOGIN_NETWORK_FAILED } else { LOGIN_FAILED };
                    state.auth.set_submitting(false);
                    state.auth.set_error(Some(message.to_string()));
                    state.show_alert(Alert::error("Error", message));
                    None
                }
            }
        };

        if let Some(home) = home {
            self.enter_screen(home);
        }
    }

    fn handle_register_result(&mut self, result: Result<RegisterPayload, AppError>) {
        let mut state = self.state.write();
        match result {
            Ok(payload) => {
                tracing::info!(email = %payload.email, "Account created");
                state.auth = AuthState::Login {
                    email: payload.email.clone(),
                    password: String::new(),
                    error: None,
                    submitting: false,
                };
                state.show_alert(Alert::success(
                    "Registro exitoso",
                    "Tu cuenta fue creada. Ahora puedes iniciar sesión.",
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Registration failed");
                let message = e.user_message();
                state.auth.set_submitting(false);
                state.auth.set_error(Some(message.clone()));
                state.show_alert(Alert::error("Error", message));
            }
        }
    }

    fn handle_change_password_result(&mut self, result: Result<String, AppError>) {
        let mut state = self.state.write();
        match result {
            Ok(message) => {
                tracing::info!("Password changed");
                state.profile.reset_password_form();
                state.show_alert(Alert::success("Éxito", message));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Password change failed");
                state.profile.submitting = false;
                state.show_alert(Alert::error("Error", e.user_message()));
            }
        }
    }

    fn handle_pedidos_loaded(&mut self, result: Result<Vec<Pedido>, AppError>) {
        let mut state = self.state.write();
        state.admin.loading = false;
        match result {
            Ok(pedidos) => state.admin.board.replace(pedidos),
            Err(_) => {
                state.admin.board.clear();
                state.show_alert(Alert::error("Error", PEDIDOS_LOAD_FAILED));
            }
        }
    }

    /// Outcome of a status mutation. On failure the optimistic change is
    /// discarded by reloading the whole list.
    pub(crate) fn handle_pedido_estado_updated(
        &mut self,
        pedido_id: i64,
        estado: EstadoPedido,
        result: Result<PedidoEstado, AppError>,
    ) {
        let refetch = {
            let mut state = self.state.write();
            state.admin.updating = None;
            match result {
                Ok(updated) => {
                    tracing::info!(pedido_id = updated.id, estado = %updated.estado_pedido, "Order status updated");
                    if estado == EstadoPedido::Autorizado {
                        state.show_alert(Alert::info(PEDIDO_AUTORIZADO_TITLE, PEDIDO_AUTORIZADO_MESSAGE));
                    } else {
                        state.toast(ToastKind::Success, format!("Pedido #{} → {}", pedido_id, estado));
                    }
                    false
                }
                Err(e) => {
                    tracing::error!(pedido_id, estado = %estado, error = %e, "Order status update failed, reloading list");
                    state.show_alert(Alert::error("Error", ESTADO_UPDATE_FAILED));
                    true
                }
            }
        };

        if refetch {
            tasks::pedidos::fetch_pedidos(self.state.clone(), self.event_tx.clone());
        }
    }

    /// Replace the invoice list. The detail dialog closes only when its invoice
    /// is gone; a reload asked for meanwhile starts now.
    fn handle_facturas_loaded(&mut self, result: Result<Vec<Value>, AppError>) {
        let reload = {
            let mut state = self.state.write();
            state.facturas.loading = false;
            match result {
                Ok(facturas) => state.facturas.facturas = facturas,
                Err(e) => {
                    state.facturas.facturas.clear();
                    state.toast(ToastKind::Error, e.user_message());
                }
            }

            let still_listed = state
                .facturas
                .selected
                .as_deref()
                .is_some_and(|key| state.facturas.position_of(key).is_some());
            if !still_listed {
                state.facturas.selected = None;
            }

            std::mem::take(&mut state.facturas.reload_queued)
        };

        if reload {
            tracing::debug!("Running queued invoice reload");
            tasks::facturas::fetch_facturas(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_factura_detalle_loaded(&mut self, factura_id: i64, result: Result<Value, AppError>) {
        let full = match result {
            Ok(full) if full.is_object() => full,
            Ok(_) => {
                tracing::warn!(factura_id, "Invoice by id returned no object");
                return;
            }
            Err(e) => {
                tracing::warn!(factura_id, error = %e, "Could not fetch invoice by id");
                return;
            }
        };

        let mut state = self.state.write();
        let key = factura_id.to_string();
        let menu = state.facturas.menu.clone();
        if let Some(slot) = state
            .facturas
            .facturas
            .iter_mut()
            .find(|raw| FacturaView::from_value(raw, &menu).id.as_deref() == Some(key.as_str()))
        {
            *slot = full;
        }
    }

    fn handle_menu_loaded(&mut self, result: Result<Vec<Platillo>, AppError>) {
        // Names fall back to `#id` without the map, so a failure is not shown.
        if let Ok(platillos) = result {
            self.state.write().facturas.menu = MenuMap::from_platillos(&platillos);
        }
    }

    fn handle_autorizados_loaded(&mut self, result: Result<Vec<Pedido>, AppError>) {
        let mut state = self.state.write();
        state.facturas.loading_autorizados = false;
        match result {
            Ok(pedidos) => state.facturas.autorizados = pedidos,
            Err(_) => {
                state.facturas.autorizados.clear();
                state.show_alert(Alert::error("Error", AUTORIZADOS_LOAD_FAILED));
            }
        }
    }

    /// Show the created invoice right away, drop its order from the authorized
    /// list, then reload to match the server.
    fn handle_factura_created(&mut self, pedido_id: i64, result: Result<Value, AppError>) {
        let refetch = {
            let mut state = self.state.write();
            state.facturas.creating_for = None;
            match result {
                Ok(created) => {
                    tracing::info!(pedido_id, "Invoice created");
                    merge_created(&mut state.facturas.facturas, created);
                    state.facturas.autorizados.retain(|p| p.id != pedido_id);
                    state.show_alert(Alert::success("Éxito", FACTURA_CREATED));
                    true
                }
                Err(e) => {
                    tracing::error!(pedido_id, error = %e, "Invoice creation failed");
                    state.show_alert(Alert::error(FACTURA_CREATE_FAILED_TITLE, e.user_message()));
                    false
                }
            }
        };

        if refetch {
            tasks::facturas::fetch_facturas(self.state.clone(), self.event_tx.clone());
        }
    }
}
