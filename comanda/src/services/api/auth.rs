//! # Authentication Endpoints
//!
//! Login, registration and password change mutations.

use serde_json::json;
use shared::{
    ChangePasswordData, ChangePasswordInput, ChangePasswordPayload, CreateUsuarioInput, LoginData,
    LoginInput, LoginPayload, RegisterData, RegisterPayload,
};

use super::client::ApiClient;
use super::queries::{CHANGE_PASSWORD_MUTATION, LOGIN_MUTATION, REGISTER_MUTATION};
use crate::core::error::{AppError, Result};

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<LoginPayload> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let variables = json!({ "loginInput": LoginInput { email, password } });
    let data: LoginData = client.graphql("login", LOGIN_MUTATION, Some(variables)).await?;

    let payload = data
        .login
        .ok_or_else(|| AppError::MissingData("El servidor no devolvió la sesión".to_string()))?;

    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        rol = %payload.user.role_name(),
        "Login successful"
    );
    Ok(payload)
}

/// Create a new account.
#[tracing::instrument(skip(client, input), fields(email = %input.email))]
pub async fn register(client: &ApiClient, input: CreateUsuarioInput) -> Result<RegisterPayload> {
    tracing::info!("Registering user");

    let variables = json!({ "createUsuarioInput": input });
    let data: RegisterData = client.graphql("register", REGISTER_MUTATION, Some(variables)).await?;

    let payload = data
        .register
        .ok_or_else(|| AppError::MissingData("El servidor no confirmó el registro".to_string()))?;

    tracing::info!(nombre = %payload.nombre, "Registration successful");
    Ok(payload)
}

/// Change the logged-in user's password.
#[tracing::instrument(skip_all)]
pub async fn change_password(
    client: &ApiClient,
    old_password: String,
    new_password: String,
) -> Result<ChangePasswordPayload> {
    let variables = json!({
        "changePasswordInput": ChangePasswordInput { old_password, new_password }
    });
    let data: ChangePasswordData = client
        .graphql("changePassword", CHANGE_PASSWORD_MUTATION, Some(variables))
        .await?;

    let payload = data
        .change_password
        .ok_or_else(|| AppError::MissingData("No se pudo cambiar la contraseña".to_string()))?;

    tracing::info!(success = payload.success, "Password change answered");
    Ok(payload)
}
