//! # Order Endpoints

use serde_json::json;
use shared::{EstadoPedido, Pedido, PedidoEstado, PedidosData, UpdatePedidoData, UpdatePedidoInput};

use super::client::ApiClient;
use super::queries::{PEDIDOS_QUERY, UPDATE_PEDIDO_MUTATION};
use crate::core::error::{AppError, Result};

/// Every order visible to the logged-in user.
pub async fn list_pedidos(client: &ApiClient) -> Result<Vec<Pedido>> {
    let data: PedidosData = client
        .graphql::<serde_json::Value, _>("pedidos", PEDIDOS_QUERY, None)
        .await?;

    tracing::info!(count = data.pedidos.len(), "Orders fetched");
    Ok(data.pedidos)
}

/// Request a status change for one order.
#[tracing::instrument(skip(client))]
pub async fn update_pedido_estado(client: &ApiClient, id: i64, estado: EstadoPedido) -> Result<PedidoEstado> {
    let variables = json!({
        "updatePedidoInput": UpdatePedidoInput { id, estado_pedido: estado }
    });
    let data: UpdatePedidoData = client
        .graphql("updatePedido", UPDATE_PEDIDO_MUTATION, Some(variables))
        .await?;

    let updated = data
        .update_pedido
        .ok_or_else(|| AppError::MissingData("No se pudo actualizar en el servidor".to_string()))?;

    tracing::info!(pedido_id = updated.id, estado = %updated.estado_pedido, "Order status updated");
    Ok(updated)
}
