//! # Authentication DTOs
//!
//! Login, registration and password change travel as GraphQL mutations. The
//! logged-in [`User`] is also what the client caches locally under the `user` key,
//! so it round-trips through serde unchanged.

use crate::utils::deserialize_opt_string;
use serde::{Deserialize, Serialize};

/// Role id assigned to accounts created from the registration form.
pub const DEFAULT_REGISTER_ROLE_ID: i64 = 2;

/// Role as returned by the backend (`rol { nombre }`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Rol {
    pub nombre: String,
}

/// Role family used for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RolKind {
    Administrador,
    Vendedor,
    Cliente,
}

impl RolKind {
    /// Classify a backend role name. Unknown or missing names fall back to `Cliente`.
    pub fn from_nombre(nombre: &str) -> Self {
        match nombre.trim().to_uppercase().as_str() {
            "ADMINISTRADOR" => Self::Administrador,
            "VENDEDOR" => Self::Vendedor,
            _ => Self::Cliente,
        }
    }
}

/// Logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub cedula: Option<String>,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub direccion_principal: Option<String>,
    #[serde(default)]
    pub rol: Option<Rol>,
}

impl User {
    pub fn role(&self) -> RolKind {
        self.rol
            .as_ref()
            .map(|rol| RolKind::from_nombre(&rol.nombre))
            .unwrap_or(RolKind::Cliente)
    }

    pub fn role_name(&self) -> &str {
        self.rol.as_ref().map(|rol| rol.nombre.as_str()).unwrap_or("")
    }

    /// Avatar letter: first character of the name, upper-cased, `U` when empty.
    pub fn initial(&self) -> char {
        self.nombre
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }

    /// Badge letter next to the avatar: `A` for administrators, `C` otherwise.
    pub fn role_initial(&self) -> char {
        if self.role() == RolKind::Administrador {
            'A'
        } else {
            'C'
        }
    }
}

/// `loginInput` variable of the login mutation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// `login { access_token user { ... } }`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoginPayload {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub login: Option<LoginPayload>,
}

/// `createUsuarioInput` variable of the register mutation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUsuarioInput {
    pub cedula: String,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    pub email: String,
    pub password: String,
    pub telefono: String,
    pub direccion_principal: String,
    pub rol_id: i64,
}

/// `register { cedula email nombre }`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RegisterPayload {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub cedula: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterData {
    pub register: Option<RegisterPayload>,
}

/// `changePasswordInput` variable.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordInput {
    pub old_password: String,
    pub new_password: String,
}

/// `changePassword { message success }`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordPayload {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordData {
    pub change_password: Option<ChangePasswordPayload>,
}
