//! # Service Traits
//!
//! Traits for dependency injection. The app orchestrator only ever talks to an
//! `Arc<dyn ApiService>`, so tests can drive every screen flow without a network.

use async_trait::async_trait;
use serde_json::Value;
use shared::{
    ChangePasswordPayload, CreateUsuarioInput, CrearFacturaDirecta, EstadoPedido, LoginPayload,
    Pedido, PedidoEstado, Platillo, RegisterPayload,
};

use crate::core::error::Result;

/// Backend operations used by the client.
///
/// Invoice endpoints return raw JSON: their shape varies between backend
/// versions and is normalized by [`crate::invoice`].
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `login` mutation.
    async fn login(&self, email: String, password: String) -> Result<LoginPayload>;

    /// `register` mutation.
    async fn register(&self, input: CreateUsuarioInput) -> Result<RegisterPayload>;

    /// `changePassword` mutation.
    async fn change_password(&self, old_password: String, new_password: String) -> Result<ChangePasswordPayload>;

    /// `pedidos` query.
    async fn list_pedidos(&self) -> Result<Vec<Pedido>>;

    /// `updatePedido` mutation.
    async fn update_pedido_estado(&self, id: i64, estado: EstadoPedido) -> Result<PedidoEstado>;

    /// `platillos` query.
    async fn list_platillos(&self) -> Result<Vec<Platillo>>;

    /// `GET /facturacion/mis-facturas`
    async fn get_mis_facturas(&self) -> Result<Value>;

    /// `GET /facturacion/:id`
    async fn get_factura_by_id(&self, id: i64) -> Result<Value>;

    /// `GET /facturacion`
    async fn get_all_facturas(&self) -> Result<Value>;

    /// `POST /facturacion/crear-directa`
    ///
    /// Incomplete lines are dropped before sending; the call fails locally when
    /// none survive.
    async fn crear_factura_directa(&self, payload: CrearFacturaDirecta) -> Result<Value>;
}
