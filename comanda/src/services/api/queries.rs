//! GraphQL documents sent by the client.

pub const LOGIN_MUTATION: &str = r#"
  mutation UserLogin($loginInput: LoginInput!) {
    login(loginInput: $loginInput) {
      access_token
      user {
        cedula
        nombre
        email
        direccionPrincipal
        rol { nombre }
      }
    }
  }
"#;

pub const REGISTER_MUTATION: &str = r#"
  mutation RegisterUser($createUsuarioInput: CreateUsuarioInput!) {
    register(createUsuarioInput: $createUsuarioInput) {
      cedula
      email
      nombre
    }
  }
"#;

pub const CHANGE_PASSWORD_MUTATION: &str = r#"
  mutation ChangePassword($changePasswordInput: ChangePasswordInput!) {
    changePassword(changePasswordInput: $changePasswordInput) {
      message
      success
    }
  }
"#;

pub const PEDIDOS_QUERY: &str = r#"
  query {
    pedidos {
      id
      usuarioCedula
      montoTotal
      estadoPedido
      fechaPedido
      usuario { nombre email }
      detalles {
        cantidad
        platillo {
          id
          nombreItem
          precio
        }
      }
    }
  }
"#;

pub const UPDATE_PEDIDO_MUTATION: &str = r#"
  mutation UpdatePedidoEstado($updatePedidoInput: UpdatePedidoInput!) {
    updatePedido(updatePedidoInput: $updatePedidoInput) {
      id
      estadoPedido
    }
  }
"#;

pub const PLATILLOS_QUERY: &str = r#"
  query {
    platillos {
      id
      nombreItem
      precio
    }
  }
"#;
