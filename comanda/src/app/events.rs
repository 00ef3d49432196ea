//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use serde_json::Value;
use shared::{EstadoPedido, Pedido, PedidoEstado, Platillo, RegisterPayload, User};

use crate::core::error::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed (token and user already persisted on success)
    LoginResult(Result<User, AppError>),
    /// Registration completed
    RegisterResult(Result<RegisterPayload, AppError>),
    /// Password change completed, with the message to show
    ChangePasswordResult(Result<String, AppError>),
    /// Admin order list received
    PedidosLoaded(Result<Vec<Pedido>, AppError>),
    /// Status mutation for one order completed
    PedidoEstadoUpdated {
        pedido_id: i64,
        estado: EstadoPedido,
        result: Result<PedidoEstado, AppError>,
    },
    /// Invoice list received (already unwrapped to objects)
    FacturasLoaded(Result<Vec<Value>, AppError>),
    /// Full record of one invoice, fetched when the list copy had no lines
    FacturaDetalleLoaded {
        factura_id: i64,
        result: Result<Value, AppError>,
    },
    /// Menu items received, for the id → name map
    MenuLoaded(Result<Vec<Platillo>, AppError>),
    /// Authorized orders received
    AutorizadosLoaded(Result<Vec<Pedido>, AppError>),
    /// Invoice created from an authorized order
    FacturaCreated {
        pedido_id: i64,
        result: Result<Value, AppError>,
    },
}
