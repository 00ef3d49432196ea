//! # Session
//!
//! The logged-in user, owned by [`crate::app::AppState`] and handed to whoever
//! needs it. The free functions in this module run the account flows against an
//! [`ApiService`] and keep the [`LocalStore`] in sync; the caller applies their
//! result to its `Session`.
//!
//! ## Lifecycle
//!
//! ```text
//! Session::new()      user = None, is_loading = true
//!   └─ restore(store) user from storage when token + user are both present
//!        ├─ login()   replaces the user wholesale
//!        └─ logout()  clears both keys and drops the user
//! ```

use shared::{CreateUsuarioInput, RegisterPayload, RolKind, User, DEFAULT_REGISTER_ROLE_ID};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::storage::{LocalStore, ACCESS_TOKEN_KEY, USER_KEY};

pub const PASSWORD_CHANGED: &str = "Contraseña actualizada exitosamente";
pub const PASSWORD_CHANGE_FAILED: &str = "No se pudo cambiar la contraseña";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    is_loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    /// Session as persisted by a previous run.
    ///
    /// The user is restored only when both the token and a parseable user are
    /// stored. Problems are logged and leave the session logged out.
    pub fn restore(store: &LocalStore) -> Self {
        let token = store.get_item(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty());
        let user = match (token, store.get_item(USER_KEY)) {
            (Some(_), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored user is unreadable, starting logged out");
                    None
                }
            },
            _ => None,
        };

        if let Some(user) = &user {
            tracing::info!(nombre = %user.nombre, rol = %user.role_name(), "Session restored");
        }

        Self {
            user,
            is_loading: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<RolKind> {
        self.user.as_ref().map(User::role)
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.is_loading = false;
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.is_loading = false;
    }
}

/// Registration form as typed by the user.
///
/// `contrasena` and `direccion_principal` exist because older callers used those
/// spellings; the non-empty one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub cedula: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    pub password: String,
    pub contrasena: String,
    pub direccion: String,
    pub direccion_principal: String,
}

impl RegisterForm {
    pub fn effective_password(&self) -> &str {
        first_non_empty(&self.password, &self.contrasena)
    }

    pub fn effective_direccion(&self) -> &str {
        first_non_empty(&self.direccion_principal, &self.direccion)
    }

    pub fn to_input(&self) -> CreateUsuarioInput {
        let apellido = self.apellido.trim();
        CreateUsuarioInput {
            cedula: self.cedula.trim().to_string(),
            nombre: self.nombre.trim().to_string(),
            apellido: (!apellido.is_empty()).then(|| apellido.to_string()),
            email: self.email.trim().to_string(),
            password: self.effective_password().to_string(),
            telefono: self.telefono.trim().to_string(),
            direccion_principal: self.effective_direccion().trim().to_string(),
            rol_id: DEFAULT_REGISTER_ROLE_ID,
        }
    }
}

fn first_non_empty<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

/// Log in and persist the token and user.
pub async fn login(api: &dyn ApiService, store: &LocalStore, email: String, password: String) -> Result<User> {
    let payload = api.login(email.trim().to_string(), password).await?;

    let user_json = serde_json::to_string(&payload.user)
        .map_err(|e| AppError::Storage(e.to_string()))?;
    store.set_item(ACCESS_TOKEN_KEY, payload.access_token)?;
    store.set_item(USER_KEY, user_json)?;

    Ok(payload.user)
}

/// Create an account. Does not log in.
pub async fn register(api: &dyn ApiService, form: &RegisterForm) -> Result<RegisterPayload> {
    api.register(form.to_input()).await
}

/// Change the password, returning the message to show.
pub async fn change_password(api: &dyn ApiService, old_password: String, new_password: String) -> Result<String> {
    let payload = api.change_password(old_password, new_password).await?;

    if payload.success {
        let message = if payload.message.trim().is_empty() {
            PASSWORD_CHANGED.to_string()
        } else {
            payload.message
        };
        Ok(message)
    } else {
        tracing::warn!(message = %payload.message, "Password change rejected");
        let message = if payload.message.trim().is_empty() {
            PASSWORD_CHANGE_FAILED.to_string()
        } else {
            payload.message
        };
        Err(AppError::Validation(message))
    }
}

/// Clear persisted credentials and drop the user.
///
/// The in-memory session is cleared even when the store cannot be written.
pub fn logout(session: &mut Session, store: &LocalStore) -> Result<()> {
    session.clear();
    let result = store.clear();
    if let Err(e) = &result {
        tracing::error!(error = %e, "Failed to clear stored credentials");
    } else {
        tracing::info!("Logged out");
    }
    result
}
