//! HTTP client against an in-process mock backend.
//!
//! The mock serves `POST /graphql` and the `/api/facturacion` routes on an
//! ephemeral port and records every request it sees, so tests can check both
//! what the client returns and what it actually sent.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use comanda::config::ClientConfig;
use comanda::core::{ApiService, AppError};
use comanda::invoice::unwrap_factura_list;
use comanda::services::api::ApiClient;
use comanda::session;
use comanda::storage::{LocalStore, ACCESS_TOKEN_KEY, USER_KEY};
use shared::{CrearFacturaDirecta, DetalleFacturaInput, EstadoPedido, RolKind};

#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    authorization: Option<String>,
    body: Value,
}

struct MockBackend {
    requests: Mutex<Vec<Recorded>>,
    graphql: Mutex<(StatusCode, Value)>,
    mis_facturas: Mutex<Value>,
    all_facturas: Mutex<(StatusCode, Value)>,
}

impl MockBackend {
    fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            graphql: Mutex::new((StatusCode::OK, json!({ "data": {} }))),
            mis_facturas: Mutex::new(json!([])),
            all_facturas: Mutex::new((StatusCode::OK, json!([]))),
        }
    }

    fn record(&self, path: &str, headers: &HeaderMap, body: Value) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().push(Recorded {
            path: path.to_string(),
            authorization,
            body,
        });
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }
}

async fn graphql(
    State(mock): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    mock.record("/graphql", &headers, body);
    let (status, response) = mock.graphql.lock().clone();
    (status, Json(response))
}

async fn mis_facturas(State(mock): State<Arc<MockBackend>>, headers: HeaderMap) -> Json<Value> {
    mock.record("/api/facturacion/mis-facturas", &headers, Value::Null);
    Json(mock.mis_facturas.lock().clone())
}

async fn all_facturas(State(mock): State<Arc<MockBackend>>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    mock.record("/api/facturacion", &headers, Value::Null);
    let (status, response) = mock.all_facturas.lock().clone();
    (status, Json(response))
}

async fn factura_by_id(
    State(mock): State<Arc<MockBackend>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Json<Value> {
    mock.record(&format!("/api/facturacion/{}", id), &headers, Value::Null);
    Json(json!({ "id": id, "numero_factura": "F-0007", "detalles": [] }))
}

async fn crear_directa(
    State(mock): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    mock.record("/api/facturacion/crear-directa", &headers, body.clone());
    (
        StatusCode::CREATED,
        Json(json!({ "id": 99, "numero_factura": "F-0099", "monto_total": body["montoTotal"] })),
    )
}

/// Start the mock backend and return it with a client pointed at it.
async fn spawn_backend(store: LocalStore) -> (Arc<MockBackend>, ApiClient) {
    let mock = Arc::new(MockBackend::new());
    let router = Router::new()
        .route("/graphql", post(graphql))
        .route("/api/facturacion", get(all_facturas))
        .route("/api/facturacion/mis-facturas", get(mis_facturas))
        .route("/api/facturacion/crear-directa", post(crear_directa))
        .route("/api/facturacion/{id}", get(factura_by_id))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock backend");
    });

    let config = ClientConfig {
        graphql_url: format!("http://{}/graphql", addr),
        ..ClientConfig::default()
    };
    (mock, ApiClient::new(&config, store))
}

fn pedido_json(id: i64, estado: &str) -> Value {
    json!({
        "id": id.to_string(),
        "usuarioCedula": "0912",
        "montoTotal": 12.5,
        "estadoPedido": estado,
        "fechaPedido": "2024-05-01T12:00:00.000Z",
        "usuario": { "nombre": "Ana", "email": "ana@correo.com" },
        "detalles": [
            { "cantidad": 2, "precioUnitario": 6.25, "platillo": { "id": 3, "nombreItem": "Arepa" } }
        ]
    })
}

fn crear_payload(detalles: Vec<DetalleFacturaInput>) -> CrearFacturaDirecta {
    CrearFacturaDirecta {
        usuario_cedula: Some("0912".to_string()),
        detalles,
        monto_subtotal: 10.0,
        monto_iva: 1.9,
        monto_total: 11.9,
        descripcion: "Factura generada desde pedido #5".to_string(),
    }
}

#[tokio::test]
async fn test_requests_carry_bearer_only_when_token_stored() {
    let store = LocalStore::in_memory();
    let (mock, client) = spawn_backend(store.clone()).await;
    *mock.graphql.lock() = (StatusCode::OK, json!({ "data": { "pedidos": [] } }));

    client.list_pedidos().await.expect("pedidos without token");
    store.set_item(ACCESS_TOKEN_KEY, "tok-123").expect("store token");
    client.list_pedidos().await.expect("pedidos with token");

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].authorization, None);
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_login_persists_token_and_user() {
    let store = LocalStore::in_memory();
    let (mock, client) = spawn_backend(store.clone()).await;
    *mock.graphql.lock() = (
        StatusCode::OK,
        json!({
            "data": {
                "login": {
                    "access_token": "jwt-abc",
                    "user": {
                        "cedula": 912,
                        "nombre": "Marta",
                        "email": "marta@correo.com",
                        "rol": { "nombre": "VENDEDOR" }
                    }
                }
            }
        }),
    );

    let user = session::login(&client, &store, "marta@correo.com".into(), "secreto".into())
        .await
        .expect("login");

    assert_eq!(user.nombre, "Marta");
    assert_eq!(user.role(), RolKind::Vendedor);
    assert_eq!(user.cedula.as_deref(), Some("912"));
    assert_eq!(store.get_item(ACCESS_TOKEN_KEY).as_deref(), Some("jwt-abc"));
    assert!(store.get_item(USER_KEY).is_some_and(|raw| raw.contains("Marta")));

    let sent = &mock.requests()[0].body;
    assert_eq!(sent["variables"]["loginInput"]["email"], json!("marta@correo.com"));
    assert!(sent["query"].as_str().is_some_and(|q| q.contains("login")));
}

#[tokio::test]
async fn test_graphql_errors_fail_even_with_data() {
    let (mock, client) = spawn_backend(LocalStore::in_memory()).await;
    *mock.graphql.lock() = (
        StatusCode::OK,
        json!({
            "data": { "pedidos": [pedido_json(1, "Pendiente")] },
            "errors": [{ "message": "Forbidden resource" }]
        }),
    );

    let result = client.list_pedidos().await;

    match result {
        Err(AppError::GraphQl(message)) => assert_eq!(message, "Forbidden resource"),
        other => panic!("expected GraphQL error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bad_request_with_errors_envelope_is_graphql_error() {
    let (mock, client) = spawn_backend(LocalStore::in_memory()).await;
    *mock.graphql.lock() = (
        StatusCode::BAD_REQUEST,
        json!({ "errors": [{ "message": "Unauthorized" }] }),
    );

    let result = client.login("a@b.co".into(), "x".into()).await;

    assert!(matches!(result, Err(AppError::GraphQl(ref m)) if m == "Unauthorized"));
}

#[tokio::test]
async fn test_pedidos_decode_and_status_update() {
    let (mock, client) = spawn_backend(LocalStore::in_memory()).await;
    *mock.graphql.lock() = (
        StatusCode::OK,
        json!({ "data": { "pedidos": [pedido_json(4, "Pendiente"), pedido_json(5, "Autorizado")] } }),
    );

    let pedidos = client.list_pedidos().await.expect("pedidos");
    assert_eq!(pedidos.len(), 2);
    assert_eq!(pedidos[0].id, 4);
    assert_eq!(pedidos[1].estado_pedido, EstadoPedido::Autorizado);
    assert_eq!(pedidos[0].detalles[0].nombre(), "Arepa");

    *mock.graphql.lock() = (
        StatusCode::OK,
        json!({ "data": { "updatePedido": { "id": 4, "estadoPedido": "Autorizado" } } }),
    );
    let updated = client
        .update_pedido_estado(4, EstadoPedido::Autorizado)
        .await
        .expect("update");

    assert_eq!(updated.estado_pedido, EstadoPedido::Autorizado);
    let sent = &mock.requests()[1].body;
    assert_eq!(sent["variables"]["updatePedidoInput"]["id"], json!(4));
    assert_eq!(sent["variables"]["updatePedidoInput"]["estadoPedido"], json!("Autorizado"));
}

#[tokio::test]
async fn test_crear_directa_drops_incomplete_lines() {
    let (mock, client) = spawn_backend(LocalStore::in_memory()).await;

    let created = client
        .crear_factura_directa(crear_payload(vec![
            DetalleFacturaInput { item_id: Some(3), cantidad: Some(2), precio_unitario: Some(5.0) },
            DetalleFacturaInput { item_id: None, cantidad: Some(1), precio_unitario: Some(5.0) },
        ]))
        .await
        .expect("created");

    assert_eq!(created["id"], json!(99));
    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/facturacion/crear-directa");
    let detalles = requests[0].body["detalles"].as_array().expect("detalles array");
    assert_eq!(detalles.len(), 1);
    assert_eq!(detalles[0]["itemId"], json!(3));
    assert_eq!(requests[0].body["usuarioCedula"], json!("0912"));
}

#[tokio::test]
async fn test_crear_directa_without_valid_lines_sends_nothing() {
    let (mock, client) = spawn_backend(LocalStore::in_memory()).await;

    let result = client
        .crear_factura_directa(crear_payload(vec![DetalleFacturaInput {
            item_id: Some(3),
            cantidad: None,
            precio_unitario: Some(5.0),
        }]))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_mis_facturas_shapes_unwrap_to_objects() {
    let (mock, client) = spawn_backend(LocalStore::in_memory()).await;

    for (response, expected) in [
        (json!([{ "id": 1 }, { "id": 2 }]), 2),
        (json!({ "facturas": [{ "id": 1 }] }), 1),
        (json!({ "data": { "facturas": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] } }), 3),
        (json!({ "data": [{ "id": 1 }, "basura", 4] }), 1),
        (json!({ "id": 8, "numero_factura": "F-8" }), 1),
    ] {
        *mock.mis_facturas.lock() = response;
        let raw = client.get_mis_facturas().await.expect("mis facturas");
        assert_eq!(unwrap_factura_list(raw).len(), expected);
    }
}

#[tokio::test]
async fn test_rest_errors_and_detail_route() {
    let (mock, client) = spawn_backend(LocalStore::in_memory()).await;
    *mock.all_facturas.lock() = (StatusCode::FORBIDDEN, json!({ "message": "Forbidden" }));

    let result = client.get_all_facturas().await;
    assert!(matches!(result, Err(AppError::Http { status: 403, .. })));

    let detail = client.get_factura_by_id(7).await.expect("detail");
    assert_eq!(detail["numero_factura"], json!("F-0007"));
    assert_eq!(mock.requests().last().map(|r| r.path.clone()).as_deref(), Some("/api/facturacion/7"));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let config = ClientConfig {
        graphql_url: format!("http://{}/graphql", addr),
        ..ClientConfig::default()
    };
    let client = ApiClient::new(&config, LocalStore::in_memory());

    let err = client.list_pedidos().await.expect_err("no backend");
    assert!(err.is_network());
}
