//! # Admin Order Board
//!
//! Local copy of the order list behind the admin screen.
//!
//! Status changes are optimistic: [`OrderBoard::apply_optimistic`] rewrites the
//! local status before the mutation is sent. There is no per-record rollback; if
//! the server rejects the change the whole list is fetched again. Two admins
//! editing the same order are not detected.

use std::cmp::Ordering;

use shared::{EstadoPedido, Pedido};

use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBoard {
    pedidos: Vec<Pedido>,
}

impl OrderBoard {
    pub fn new(pedidos: Vec<Pedido>) -> Self {
        let mut board = Self::default();
        board.replace(pedidos);
        board
    }

    /// Replace the list with a fresh server copy, newest first.
    pub fn replace(&mut self, mut pedidos: Vec<Pedido>) {
        sort_newest_first(&mut pedidos);
        self.pedidos = pedidos;
    }

    pub fn clear(&mut self) {
        self.pedidos.clear();
    }

    pub fn pedidos(&self) -> &[Pedido] {
        &self.pedidos
    }

    pub fn get(&self, id: i64) -> Option<&Pedido> {
        self.pedidos.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pedidos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pedidos.is_empty()
    }

    /// Set the local status of order `id`, returning the previous one.
    ///
    /// Fails without touching the list when the order is unknown or the
    /// transition is not allowed.
    pub fn apply_optimistic(&mut self, id: i64, estado: EstadoPedido) -> Result<EstadoPedido> {
        let pedido = self
            .pedidos
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::Validation(format!("Pedido #{} no encontrado", id)))?;

        let previous = pedido.estado_pedido;
        if !previous.can_transition_to(estado) {
            return Err(AppError::Validation(format!(
                "No se puede pasar de {} a {}",
                previous, estado
            )));
        }

        pedido.estado_pedido = estado;
        tracing::debug!(pedido_id = id, from = %previous, to = %estado, "Optimistic status change");
        Ok(previous)
    }
}

/// Orders with status `Autorizado`, in the given order.
pub fn autorizados(pedidos: Vec<Pedido>) -> Vec<Pedido> {
    pedidos
        .into_iter()
        .filter(|p| p.estado_pedido == EstadoPedido::Autorizado)
        .collect()
}

/// Newest `fechaPedido` first; orders without a readable date go last.
pub fn sort_newest_first(pedidos: &mut [Pedido]) {
    pedidos.sort_by(|a, b| match (a.fecha(), b.fecha()) {
        (Some(fa), Some(fb)) => fb.cmp(&fa),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
