//! # Order DTOs
//!
//! Orders (`pedidos`) are created server-side. The client only lists them and
//! requests status transitions through `updatePedido`.
//!
//! ## Status Workflow
//!
//! ```text
//! Pendiente  → Autorizado | Cancelado
//! Autorizado → Enviado
//! Enviado    → Entregado
//! ```
//!
//! `Cancelado` and `Entregado` are terminal. Authorizing an order has no side
//! effect on invoices; sellers create the invoice by hand.

use crate::utils::{
    deserialize_id, deserialize_null_as_empty, deserialize_opt_f64, deserialize_opt_i64,
    deserialize_opt_string, parse_timestamp,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status as spelled on the wire.
///
/// Values the client does not know deserialize to [`EstadoPedido::Desconocido`],
/// which offers no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EstadoPedido {
    Pendiente,
    Autorizado,
    Enviado,
    Entregado,
    Cancelado,
    #[serde(other)]
    #[default]
    Desconocido,
}

impl EstadoPedido {
    pub const ALL: [EstadoPedido; 5] = [
        EstadoPedido::Pendiente,
        EstadoPedido::Autorizado,
        EstadoPedido::Enviado,
        EstadoPedido::Entregado,
        EstadoPedido::Cancelado,
    ];

    /// States reachable in one step from `self`.
    pub fn next_states(self) -> &'static [EstadoPedido] {
        match self {
            EstadoPedido::Pendiente => &[EstadoPedido::Cancelado, EstadoPedido::Autorizado],
            EstadoPedido::Autorizado => &[EstadoPedido::Enviado],
            EstadoPedido::Enviado => &[EstadoPedido::Entregado],
            EstadoPedido::Entregado | EstadoPedido::Cancelado | EstadoPedido::Desconocido => &[],
        }
    }

    pub fn can_transition_to(self, next: EstadoPedido) -> bool {
        self.next_states().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, EstadoPedido::Entregado | EstadoPedido::Cancelado)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EstadoPedido::Pendiente => "Pendiente",
            EstadoPedido::Autorizado => "Autorizado",
            EstadoPedido::Enviado => "Enviado",
            EstadoPedido::Entregado => "Entregado",
            EstadoPedido::Cancelado => "Cancelado",
            EstadoPedido::Desconocido => "Desconocido",
        }
    }
}

impl fmt::Display for EstadoPedido {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `usuario { nombre email }` embedded in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UsuarioResumen {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Menu item reference inside an order line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlatilloRef {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub id: Option<i64>,
    #[serde(default, rename = "item_id", deserialize_with = "deserialize_opt_i64")]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub nombre_item: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub precio: Option<f64>,
}

/// One order line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DetallePedido {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub item_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub cantidad: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub precio_unitario: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub precio: Option<f64>,
    #[serde(default)]
    pub platillo: Option<PlatilloRef>,
}

impl DetallePedido {
    /// Display name of the dish, `N/A` when the line carries none.
    pub fn nombre(&self) -> &str {
        self.platillo
            .as_ref()
            .and_then(|p| p.nombre_item.as_deref())
            .unwrap_or("N/A")
    }
}

/// Order as returned by the `pedidos` query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub usuario_cedula: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub monto_total: Option<f64>,
    #[serde(default)]
    pub estado_pedido: EstadoPedido,
    #[serde(default)]
    pub fecha_pedido: Option<String>,
    #[serde(default)]
    pub usuario: Option<UsuarioResumen>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub detalles: Vec<DetallePedido>,
}

impl Pedido {
    pub fn fecha(&self) -> Option<DateTime<Utc>> {
        self.fecha_pedido.as_deref().and_then(parse_timestamp)
    }

    /// Customer label: the user's name, else the cédula, else empty.
    pub fn cliente(&self) -> &str {
        self.usuario
            .as_ref()
            .and_then(|u| u.nombre.as_deref())
            .or(self.usuario_cedula.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PedidosData {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub pedidos: Vec<Pedido>,
}

/// `updatePedidoInput` variable.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePedidoInput {
    pub id: i64,
    pub estado_pedido: EstadoPedido,
}

/// `updatePedido { id estadoPedido }`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PedidoEstado {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub estado_pedido: EstadoPedido,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePedidoData {
    pub update_pedido: Option<PedidoEstado>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workflow_transitions() {
        assert!(EstadoPedido::Pendiente.can_transition_to(EstadoPedido::Autorizado));
        assert!(EstadoPedido::Pendiente.can_transition_to(EstadoPedido::Cancelado));
        assert!(EstadoPedido::Autorizado.can_transition_to(EstadoPedido::Enviado));
        assert!(EstadoPedido::Enviado.can_transition_to(EstadoPedido::Entregado));

        assert!(!EstadoPedido::Pendiente.can_transition_to(EstadoPedido::Enviado));
        assert!(!EstadoPedido::Autorizado.can_transition_to(EstadoPedido::Cancelado));
        assert!(!EstadoPedido::Enviado.can_transition_to(EstadoPedido::Pendiente));
    }

    #[test]
    fn test_terminal_states_offer_no_transitions() {
        for estado in EstadoPedido::ALL {
            assert_eq!(estado.is_terminal(), estado.next_states().is_empty());
        }
        assert!(EstadoPedido::Desconocido.next_states().is_empty());
        assert!(!EstadoPedido::Desconocido.is_terminal());
    }

    #[test]
    fn test_unknown_status_deserializes_to_desconocido() {
        let estado: EstadoPedido = serde_json::from_value(json!("EnCocina")).expect("should parse");
        assert_eq!(estado, EstadoPedido::Desconocido);

        let wire = serde_json::to_value(EstadoPedido::Autorizado).expect("serialize");
        assert_eq!(wire, json!("Autorizado"));
    }

    #[test]
    fn test_pedido_parses_graphql_shape() {
        let data: PedidosData = serde_json::from_value(json!({
            "pedidos": [{
                "id": "5",
                "usuarioCedula": "0912345678",
                "montoTotal": 30,
                "estadoPedido": "Autorizado",
                "fechaPedido": "2024-05-01T10:00:00.000Z",
                "usuario": { "nombre": "Ana", "email": "ana@example.com" },
                "detalles": [{ "cantidad": 3, "platillo": { "id": "9", "nombreItem": "Pizza", "precio": "10" } }]
            }]
        }))
        .expect("pedidos should parse");

        let pedido = &data.pedidos[0];
        assert_eq!(pedido.id, 5);
        assert_eq!(pedido.estado_pedido, EstadoPedido::Autorizado);
        assert_eq!(pedido.cliente(), "Ana");
        assert!(pedido.fecha().is_some());

        let linea = &pedido.detalles[0];
        assert_eq!(linea.cantidad, Some(3));
        assert_eq!(linea.nombre(), "Pizza");
        let platillo = linea.platillo.as_ref().expect("platillo present");
        assert_eq!(platillo.id, Some(9));
        assert_eq!(platillo.precio, Some(10.0));
    }

    #[test]
    fn test_null_detalles_and_missing_user() {
        let pedido: Pedido = serde_json::from_value(json!({
            "id": 8,
            "usuarioCedula": 1712,
            "estadoPedido": "Pendiente",
            "detalles": null
        }))
        .expect("should parse");

        assert!(pedido.detalles.is_empty());
        assert_eq!(pedido.cliente(), "1712");
        assert!(pedido.fecha().is_none());
    }

    #[test]
    fn test_update_input_wire_shape() {
        let input = UpdatePedidoInput { id: 5, estado_pedido: EstadoPedido::Enviado };
        let body = serde_json::to_value(&input).expect("serialize");
        assert_eq!(body, json!({ "id": 5, "estadoPedido": "Enviado" }));
    }
}
