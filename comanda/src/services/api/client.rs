//! # API Client
//!
//! HTTP client shared by the GraphQL and REST endpoints. The bearer token is read
//! from the local store right before each request is sent, so a login or logout
//! takes effect on the very next call.

use std::time::Instant;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{GraphQlRequest, GraphQlResponse};

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::storage::{LocalStore, ACCESS_TOKEN_KEY};

/// HTTP client for the food-ordering backend.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    graphql_url: String,
    rest_base: String,
    store: LocalStore,
}

impl ApiClient {
    /// Create a client for `config`, reading tokens from `store`.
    pub fn new(config: &ClientConfig, store: LocalStore) -> Self {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            graphql_url: config.graphql_url.clone(),
            rest_base: config.rest_base(),
            store,
        }
    }

    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    pub fn rest_base(&self) -> &str {
        &self.rest_base
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}/{}", self.rest_base, path.trim_start_matches('/'))
    }

    /// Attach `Authorization: Bearer <token>` when a token is stored.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.get_item(ACCESS_TOKEN_KEY) {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        }
    }

    /// Run one GraphQL operation and return its `data`.
    ///
    /// A non-empty `errors` array fails the call even when `data` is present.
    pub(crate) async fn graphql<V, T>(&self, operation: &'static str, query: &str, variables: Option<V>) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let start = Instant::now();
        let request = self
            .client
            .post(&self.graphql_url)
            .json(&GraphQlRequest { query, variables });

        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::error!(operation, error = %e, "GraphQL network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = read_body(response, operation).await?;
        let duration_ms = start.elapsed().as_millis();

        if !status.is_success() {
            // GraphQL servers often answer 400 with a regular `errors` envelope.
            let message = serde_json::from_str::<GraphQlResponse<Value>>(&body)
                .ok()
                .and_then(|env| env.first_error().map(str::to_string));
            tracing::warn!(operation, status = status.as_u16(), body = %body, duration_ms, "GraphQL request failed");
            return Err(match message {
                Some(message) => AppError::GraphQl(message),
                None => AppError::Http { status: status.as_u16(), body },
            });
        }

        let envelope = serde_json::from_str::<GraphQlResponse<T>>(&body).map_err(|e| {
            tracing::error!(operation, error = %e, body = %body, "GraphQL response parse error");
            AppError::MissingData(format!("Respuesta inválida del servidor ({})", operation))
        })?;

        if envelope.has_errors() {
            let message = envelope.first_error().unwrap_or_default().to_string();
            tracing::warn!(operation, error = %message, duration_ms, "GraphQL errors in response");
            return Err(AppError::GraphQl(message));
        }

        tracing::debug!(operation, duration_ms, "GraphQL request completed");
        envelope
            .data
            .ok_or_else(|| AppError::MissingData(format!("Respuesta sin datos ({})", operation)))
    }

    /// `GET <rest base>/<path>` returning the decoded JSON body.
    pub(crate) async fn rest_get(&self, path: &str) -> Result<Value> {
        let url = self.rest_url(path);
        let request = self.client.get(&url);
        self.send_rest(request, &url).await
    }

    /// `POST <rest base>/<path>` with a JSON body.
    pub(crate) async fn rest_post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        let url = self.rest_url(path);
        let request = self.client.post(&url).json(body);
        self.send_rest(request, &url).await
    }

    async fn send_rest(&self, request: RequestBuilder, url: &str) -> Result<Value> {
        let start = Instant::now();
        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::error!(url, error = %e, "REST network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = read_body(response, url).await?;
        let duration_ms = start.elapsed().as_millis();

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), body = %body, duration_ms, "REST request failed");
            return Err(AppError::Http { status: status.as_u16(), body });
        }

        tracing::debug!(url, status = status.as_u16(), duration_ms, "REST request completed");

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(url, error = %e, "REST response parse error");
            AppError::MissingData(format!("Respuesta inválida del servidor: {}", e))
        })
    }
}

async fn read_body(response: Response, context: &str) -> Result<String> {
    response.text().await.map_err(|e| {
        tracing::error!(context, error = %e, "Failed to read response body");
        AppError::Network(e.to_string())
    })
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<shared::LoginPayload> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn register(&self, input: shared::CreateUsuarioInput) -> Result<shared::RegisterPayload> {
        crate::services::api::auth::register(self, input).await
    }

    async fn change_password(&self, old_password: String, new_password: String) -> Result<shared::ChangePasswordPayload> {
        crate::services::api::auth::change_password(self, old_password, new_password).await
    }

    async fn list_pedidos(&self) -> Result<Vec<shared::Pedido>> {
        crate::services::api::pedidos::list_pedidos(self).await
    }

    async fn update_pedido_estado(&self, id: i64, estado: shared::EstadoPedido) -> Result<shared::PedidoEstado> {
        crate::services::api::pedidos::update_pedido_estado(self, id, estado).await
    }

    async fn list_platillos(&self) -> Result<Vec<shared::Platillo>> {
        crate::services::api::platillos::list_platillos(self).await
    }

    async fn get_mis_facturas(&self) -> Result<Value> {
        crate::services::api::facturacion::get_mis_facturas(self).await
    }

    async fn get_factura_by_id(&self, id: i64) -> Result<Value> {
        crate::services::api::facturacion::get_factura_by_id(self, id).await
    }

    async fn get_all_facturas(&self) -> Result<Value> {
        crate::services::api::facturacion::get_all_facturas(self).await
    }

    async fn crear_factura_directa(&self, payload: shared::CrearFacturaDirecta) -> Result<Value> {
        crate::services::api::facturacion::crear_factura_directa(self, payload).await
    }
}
