//! # Application State Management
//!
//! Core application orchestrator for the Comanda desktop client.
//!
//! This module owns the application state, routes UI actions to handlers, runs
//! network calls as async tasks, and folds their results back into state on the
//! UI thread.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        App (this module)                     │
//! ├──────────────────────────────────────────────────────────────┤
//! │  state: Arc<RwLock<AppState>>                                │
//! │    ├── current_screen   Login | AdminOrders | Facturas | ... │
//! │    ├── session          logged-in user (restored at start)   │
//! │    ├── auth / profile   form state                           │
//! │    ├── admin            OrderBoard + loading/updating flags  │
//! │    ├── facturas         raw invoices, menu map, authorized   │
//! │    └── alert / confirm  blocking dialogs                     │
//! │                                                              │
//! │  event_rx ◄──── AppEvent ◄──── tokio tasks (ApiService)      │
//! └──────────────────────────────────────────────────────────────┘
//!        ▲ handle_*_click()                     │ on_tick()
//!        │                                      ▼
//! ┌──────────────┐                     ┌─────────────────┐
//! │ ui::screens  │ ◄── state snapshot ─│  event_handler  │
//! └──────────────┘                     └─────────────────┘
//! ```
//!
//! ## Event Flow
//!
//! 1. A screen calls an [`AppLike`] method (e.g. `handle_estado_click`).
//! 2. The handler validates, updates state under a short write lock and, when
//!    the action needs the backend, spawns a task with a clone of the
//!    [`ApiService`] handle.
//! 3. The task sends an [`AppEvent`] with the result.
//! 4. [`App::on_tick`] drains the channel every frame and applies each event.
//!
//! Nothing is retried. A failed request becomes an [`Alert`]; the one
//! exception is a failed order status change, which reloads the order list to
//! discard the optimistic local rewrite.
//!
//! ## Thread Safety
//!
//! State lives behind `Arc<parking_lot::RwLock<_>>`. Handlers never hold the
//! lock across an `.await`; tasks only touch state through events (and their
//! own loading flags).
//!
//! [`ApiService`]: crate::core::service::ApiService

mod app_trait;
mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use app_trait::AppLike;
pub use event_handler::{
    AUTORIZADOS_LOAD_FAILED, ESTADO_UPDATE_FAILED, FACTURA_CREATED, FACTURA_CREATE_FAILED_TITLE,
    LOGIN_FAILED, LOGIN_NETWORK_FAILED, PEDIDOS_LOAD_FAILED, PEDIDO_AUTORIZADO_MESSAGE,
    PEDIDO_AUTORIZADO_TITLE,
};
pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::EstadoPedido;

use crate::config::ClientConfig;
use crate::core::service::ApiService;
use crate::invoice::Exporter;
use crate::services::api::ApiClient;
use crate::session::RegisterForm;
use crate::storage::LocalStore;

/// Main application container.
///
/// Holds the shared state and the event channel used by async tasks. The
/// egui update loop calls [`App::on_tick`] once per frame, then renders from a
/// snapshot of [`App::state`].
pub struct App {
    /// Application state, shared with async tasks.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender for async task results (internal use).
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application from configuration.
    ///
    /// Opens the local store (an unreadable store is logged and replaced by an
    /// empty in-memory one), builds the HTTP client and the exporter, and
    /// restores the previous session. Must run inside a tokio runtime when a
    /// session is restored, since the first screen starts loading right away.
    pub fn new(config: &ClientConfig) -> Self {
        let store = match LocalStore::open(&config.data_dir) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = %e, dir = %config.data_dir.display(), "Local store unavailable, using an empty in-memory store");
                LocalStore::in_memory()
            }
        };

        let api_client: Arc<dyn ApiService> = Arc::new(ApiClient::new(config, store.clone()));
        let exporter = Exporter::new(config.documents_dir.clone(), config.fonts_dir.clone());

        Self::with_services(api_client, store, exporter)
    }

    /// Create the application around existing services.
    pub fn with_services(api_client: Arc<dyn ApiService>, store: LocalStore, exporter: Exporter) -> Self {
        let state = AppState::new(api_client, store, exporter);
        let screen = state.current_screen;
        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        };

        tracing::info!(screen = screen.title(), "App state initialized");
        app.enter_screen(screen);
        app
    }

    /// Called every frame to process async events.
    ///
    /// Non-blocking: drains whatever is queued and returns.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0usize;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            events_processed += 1;
        }

        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: processed events");
        }
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Start the loads a screen needs when it is shown.
    fn enter_screen(&self, screen: Screen) {
        match screen {
            Screen::AdminOrders => {
                tasks::pedidos::fetch_pedidos(self.state.clone(), self.event_tx.clone());
            }
            Screen::Facturas => {
                tasks::facturas::fetch_facturas(self.state.clone(), self.event_tx.clone());
                tasks::facturas::fetch_menu(self.state.clone(), self.event_tx.clone());
                tasks::pedidos::fetch_autorizados(self.state.clone(), self.event_tx.clone());
            }
            Screen::Login | Screen::Profile => {}
        }
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle login button click
    pub fn handle_login_click(&mut self, email: String, password: String) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone(), email, password);
    }

    /// Handle register button click
    pub fn handle_register_click(&mut self, form: RegisterForm, confirm_password: String) {
        handlers::auth::handle_register_click(self.state.clone(), self.event_tx.clone(), form, confirm_password);
    }

    /// Switch to login form
    pub fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    /// Switch to registration form
    pub fn handle_switch_to_signup(&mut self) {
        handlers::auth::handle_switch_to_signup(self.state.clone());
    }

    /// Ask for confirmation, then log out
    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(self.state.clone());
    }

    /// Handle screen change (role guarded), loading the target screen's data
    pub fn handle_screen_change(&mut self, screen: Screen) {
        let shown = handlers::navigation::handle_screen_change(self.state.clone(), screen);
        self.enter_screen(shown);
    }

    /// Navigate to next tab of the current role
    pub fn next_screen(&mut self) {
        if let Some(shown) = handlers::navigation::cycle_screen(self.state.clone(), true) {
            self.enter_screen(shown);
        }
    }

    /// Navigate to previous tab of the current role
    pub fn previous_screen(&mut self) {
        if let Some(shown) = handlers::navigation::cycle_screen(self.state.clone(), false) {
            self.enter_screen(shown);
        }
    }

    pub fn handle_open_change_password(&mut self) {
        handlers::profile::handle_open_change_password(self.state.clone());
    }

    pub fn handle_close_change_password(&mut self) {
        handlers::profile::handle_close_change_password(self.state.clone());
    }

    pub fn handle_change_password_submit(&mut self) {
        handlers::profile::handle_change_password_submit(self.state.clone(), self.event_tx.clone());
    }

    /// Reload the admin order list
    pub fn refresh_pedidos(&mut self) {
        tasks::pedidos::fetch_pedidos(self.state.clone(), self.event_tx.clone());
    }

    /// Handle a status action button on an order
    pub fn handle_estado_click(&mut self, pedido_id: i64, estado: EstadoPedido) {
        handlers::pedidos::handle_estado_click(self.state.clone(), pedido_id, estado);
    }

    /// Reload invoices and authorized orders
    pub fn refresh_facturas(&mut self) {
        self.enter_screen(Screen::Facturas);
    }

    pub fn handle_factura_select(&mut self, key: String) {
        handlers::facturas::handle_factura_select(self.state.clone(), self.event_tx.clone(), key);
    }

    pub fn handle_factura_close(&mut self) {
        handlers::facturas::handle_factura_close(self.state.clone());
    }

    pub fn handle_export_factura(&mut self, key: &str) {
        handlers::facturas::handle_export_factura(self.state.clone(), key);
    }

    pub fn handle_export_csv(&mut self) {
        handlers::facturas::handle_export_csv(self.state.clone());
    }

    pub fn handle_crear_factura(&mut self, pedido_id: i64) {
        handlers::facturas::handle_crear_factura(self.state.clone(), self.event_tx.clone(), pedido_id);
    }

    pub fn handle_confirm_accept(&mut self) {
        handlers::dialogs::handle_confirm_accept(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_confirm_cancel(&mut self) {
        handlers::dialogs::handle_confirm_cancel(self.state.clone());
    }

    pub fn handle_alert_dismiss(&mut self) {
        handlers::dialogs::handle_alert_dismiss(self.state.clone());
    }

    pub fn handle_open_exported(&mut self) {
        handlers::facturas::handle_open_exported(self.state.clone());
    }

    pub fn handle_save_exported_as(&mut self) {
        handlers::facturas::handle_save_exported_as(self.state.clone());
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_login_click(&mut self, email: String, password: String) {
        App::handle_login_click(self, email, password);
    }

    fn handle_register_click(&mut self, form: RegisterForm, confirm_password: String) {
        App::handle_register_click(self, form, confirm_password);
    }

    fn handle_switch_to_login(&mut self) {
        App::handle_switch_to_login(self);
    }

    fn handle_switch_to_signup(&mut self) {
        App::handle_switch_to_signup(self);
    }

    fn handle_logout_click(&mut self) {
        App::handle_logout_click(self);
    }

    fn handle_screen_change(&mut self, screen: Screen) {
        App::handle_screen_change(self, screen);
    }

    fn next_screen(&mut self) {
        App::next_screen(self);
    }

    fn previous_screen(&mut self) {
        App::previous_screen(self);
    }

    fn handle_open_change_password(&mut self) {
        App::handle_open_change_password(self);
    }

    fn handle_close_change_password(&mut self) {
        App::handle_close_change_password(self);
    }

    fn handle_change_password_submit(&mut self) {
        App::handle_change_password_submit(self);
    }

    fn refresh_pedidos(&mut self) {
        App::refresh_pedidos(self);
    }

    fn handle_estado_click(&mut self, pedido_id: i64, estado: EstadoPedido) {
        App::handle_estado_click(self, pedido_id, estado);
    }

    fn refresh_facturas(&mut self) {
        App::refresh_facturas(self);
    }

    fn handle_factura_select(&mut self, key: String) {
        App::handle_factura_select(self, key);
    }

    fn handle_factura_close(&mut self) {
        App::handle_factura_close(self);
    }

    fn handle_export_factura(&mut self, key: &str) {
        App::handle_export_factura(self, key);
    }

    fn handle_export_csv(&mut self) {
        App::handle_export_csv(self);
    }

    fn handle_crear_factura(&mut self, pedido_id: i64) {
        App::handle_crear_factura(self, pedido_id);
    }

    fn handle_confirm_accept(&mut self) {
        App::handle_confirm_accept(self);
    }

    fn handle_confirm_cancel(&mut self) {
        App::handle_confirm_cancel(self);
    }

    fn handle_alert_dismiss(&mut self) {
        App::handle_alert_dismiss(self);
    }

    fn handle_open_exported(&mut self) {
        App::handle_open_exported(self);
    }

    fn handle_save_exported_as(&mut self) {
        App::handle_save_exported_as(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{AppError, Result};
    use crate::invoice::from_pedido::NO_VALID_LINES;
    use crate::storage::{ACCESS_TOKEN_KEY, USER_KEY};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use shared::{
        ChangePasswordPayload, CreateUsuarioInput, CrearFacturaDirecta, LoginPayload, Pedido,
        PedidoEstado, Platillo, RegisterPayload, Rol, RolKind, User,
    };
    use std::time::Duration;

    /// Canned backend. Every call is recorded by name.
    struct MockApi {
        login: Result<LoginPayload>,
        pedidos: Mutex<Result<Vec<Pedido>>>,
        update: Result<()>,
        all_facturas: Result<Value>,
        mis_facturas: Result<Value>,
        crear: Result<Value>,
        change_password: Result<ChangePasswordPayload>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl MockApi {
        fn new() -> Self {
            Self {
                login: Err(AppError::GraphQl("Unauthorized".into())),
                pedidos: Mutex::new(Ok(Vec::new())),
                update: Ok(()),
                all_facturas: Ok(json!([])),
                mis_facturas: Ok(json!([])),
                crear: Ok(json!({})),
                change_password: Ok(ChangePasswordPayload { message: String::new(), success: true }),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().push(call);
        }

        fn called(&self, call: &str) -> usize {
            self.calls.lock().iter().filter(|c| **c == call).count()
        }
    }

    #[async_trait]
    impl ApiService for MockApi {
        async fn login(&self, _email: String, _password: String) -> Result<LoginPayload> {
            self.record("login");
            self.login.clone()
        }

        async fn register(&self, input: CreateUsuarioInput) -> Result<RegisterPayload> {
            self.record("register");
            Ok(RegisterPayload { cedula: Some(input.cedula), email: input.email, nombre: input.nombre })
        }

        async fn change_password(&self, _old: String, _new: String) -> Result<ChangePasswordPayload> {
            self.record("change_password");
            self.change_password.clone()
        }

        async fn list_pedidos(&self) -> Result<Vec<Pedido>> {
            self.record("list_pedidos");
            self.pedidos.lock().clone()
        }

        async fn update_pedido_estado(&self, id: i64, estado: EstadoPedido) -> Result<PedidoEstado> {
            self.record("update_pedido_estado");
            self.update.clone().map(|_| PedidoEstado { id, estado_pedido: estado })
        }

        async fn list_platillos(&self) -> Result<Vec<Platillo>> {
            self.record("list_platillos");
            Ok(Vec::new())
        }

        async fn get_mis_facturas(&self) -> Result<Value> {
            self.record("get_mis_facturas");
            self.mis_facturas.clone()
        }

        async fn get_factura_by_id(&self, id: i64) -> Result<Value> {
            self.record("get_factura_by_id");
            Ok(json!({ "id": id }))
        }

        async fn get_all_facturas(&self) -> Result<Value> {
            self.record("get_all_facturas");
            self.all_facturas.clone()
        }

        async fn crear_factura_directa(&self, _payload: CrearFacturaDirecta) -> Result<Value> {
            self.record("crear_factura_directa");
            self.crear.clone()
        }
    }

    fn user(rol: &str) -> User {
        User {
            cedula: Some("0912345678".into()),
            nombre: "Ana".into(),
            email: "ana@example.com".into(),
            direccion_principal: None,
            rol: Some(Rol { nombre: rol.into() }),
        }
    }

    fn pedido(id: i64, estado: &str) -> Pedido {
        serde_json::from_value(json!({
            "id": id,
            "usuarioCedula": "0912345678",
            "estadoPedido": estado,
            "detalles": [{ "cantidad": 3, "platillo": { "id": 9, "nombreItem": "Pizza", "precio": 10 } }]
        }))
        .expect("pedido should parse")
    }

    fn exporter() -> Exporter {
        Exporter::new(std::env::temp_dir().join("comanda-app-tests"), None)
    }

    fn app_with(api: Arc<MockApi>) -> App {
        App::with_services(api, LocalStore::in_memory(), exporter())
    }

    fn logged_in_app(api: Arc<MockApi>, rol: &str) -> App {
        let store = LocalStore::in_memory();
        store.set_item(ACCESS_TOKEN_KEY, "tok").expect("set token");
        store
            .set_item(USER_KEY, serde_json::to_string(&user(rol)).expect("serialize"))
            .expect("set user");
        App::with_services(api, store, exporter())
    }

    /// Wait for the next task result and apply it.
    async fn pump(app: &mut App) {
        let event = tokio::time::timeout(Duration::from_secs(2), app.event_rx.recv())
            .await
            .expect("event should arrive in time")
            .expect("channel open");
        app.handle_event(event);
    }

    // ========== Screen Tests ==========

    #[test]
    fn test_screen_all_returns_correct_order() {
        let screens = Screen::all();
        assert_eq!(screens.len(), 4);
        assert_eq!(screens[0], Screen::Login);
        assert_eq!(screens[3], Screen::Profile);
    }

    #[test]
    fn test_tabs_by_role() {
        assert_eq!(
            Screen::tabs_for(RolKind::Administrador),
            &[Screen::AdminOrders, Screen::Facturas, Screen::Profile]
        );
        assert_eq!(Screen::tabs_for(RolKind::Vendedor), &[Screen::Facturas, Screen::Profile]);
        assert_eq!(Screen::home_for(RolKind::Cliente), Screen::Profile);

        assert!(Screen::Login.allowed_for(None));
        assert!(!Screen::Profile.allowed_for(None));
        assert!(!Screen::AdminOrders.allowed_for(Some(RolKind::Vendedor)));
    }

    // ========== Session Tests ==========

    #[tokio::test]
    async fn test_initial_state_without_session_is_login() {
        let app = app_with(Arc::new(MockApi::new()));
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.session.is_authenticated());
        assert!(!state.session.is_loading());
        assert!(matches!(state.auth, AuthState::Login { .. }));
    }

    #[tokio::test]
    async fn test_restored_admin_session_opens_orders_and_loads_them() {
        let api = Arc::new(MockApi::new());
        *api.pedidos.lock() = Ok(vec![pedido(1, "Pendiente")]);
        let mut app = logged_in_app(api.clone(), "ADMINISTRADOR");

        assert_eq!(app.state.read().current_screen, Screen::AdminOrders);
        pump(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.admin.board.len(), 1);
        assert!(!state.admin.loading);
        assert_eq!(api.called("list_pedidos"), 1);
    }

    #[tokio::test]
    async fn test_navigation_is_role_guarded() {
        let mut app = logged_in_app(Arc::new(MockApi::new()), "CLIENTE");

        app.handle_screen_change(Screen::AdminOrders);
        assert_eq!(app.state.read().current_screen, Screen::Profile);

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Profile);
    }

    // ========== Auth Tests ==========

    #[tokio::test]
    async fn test_login_with_empty_fields_never_calls_backend() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(api.clone());

        app.handle_login_click(String::new(), "x".into());

        match &app.state.read().auth {
            AuthState::Login { error, submitting, .. } => {
                assert_eq!(error.as_deref(), Some("Por favor ingresa correo y contraseña"));
                assert!(!submitting);
            }
            _ => panic!("Expected Login state in test"),
        }
        assert_eq!(api.called("login"), 0);
    }

    #[tokio::test]
    async fn test_login_success_persists_and_opens_role_home() {
        let mut api = MockApi::new();
        api.login = Ok(LoginPayload { access_token: "jwt".into(), user: user("VENDEDOR") });
        let api = Arc::new(api);
        let mut app = app_with(api.clone());

        app.handle_login_click("ana@example.com".into(), "secreto".into());
        pump(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Facturas);
        assert_eq!(state.session.role(), Some(RolKind::Vendedor));
        assert_eq!(state.store.get_item(ACCESS_TOKEN_KEY).as_deref(), Some("jwt"));
        assert!(state.store.get_item(USER_KEY).is_some());
        assert!(!state.auth.is_submitting());
    }

    #[tokio::test]
    async fn test_login_failure_messages() {
        let mut app = app_with(Arc::new(MockApi::new()));

        app.handle_event(AppEvent::LoginResult(Err(AppError::GraphQl("Unauthorized".into()))));
        assert_eq!(
            app.state.read().alert.as_ref().map(|a| a.message.as_str()),
            Some(LOGIN_FAILED)
        );

        app.handle_event(AppEvent::LoginResult(Err(AppError::Network("refused".into()))));
        let state = app.state.read();
        assert_eq!(state.alert.as_ref().map(|a| a.message.as_str()), Some(LOGIN_NETWORK_FAILED));
        assert_eq!(state.current_screen, Screen::Login);
    }

    #[tokio::test]
    async fn test_logout_requires_confirmation_and_clears_store() {
        let mut app = logged_in_app(Arc::new(MockApi::new()), "CLIENTE");

        app.handle_logout_click();
        assert_eq!(app.state.read().confirm, Some(PendingConfirm::Logout));
        assert!(app.state.read().session.is_authenticated());

        app.handle_confirm_accept();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.session.is_authenticated());
        assert!(state.store.get_item(ACCESS_TOKEN_KEY).is_none());
        assert!(state.store.get_item(USER_KEY).is_none());
    }

    // ========== Profile Tests ==========

    #[tokio::test]
    async fn test_change_password_validates_before_sending() {
        let api = Arc::new(MockApi::new());
        let mut app = logged_in_app(api.clone(), "CLIENTE");

        app.handle_open_change_password();
        {
            let mut state = app.state.write();
            state.profile.old_password = "viejo1".into();
            state.profile.new_password = "nuevo1".into();
            state.profile.confirm_password = "otro".into();
        }
        app.handle_change_password_submit();
        assert!(app.state.read().profile.error.is_some());
        assert_eq!(api.called("change_password"), 0);

        app.state.write().profile.confirm_password = "nuevo1".into();
        app.handle_change_password_submit();
        pump(&mut app).await;

        let state = app.state.read();
        assert!(!state.profile.show_change_password);
        let alert = state.alert.as_ref().expect("alert shown");
        assert_eq!(alert.kind, AlertKind::Success);
        assert_eq!(alert.message, crate::session::PASSWORD_CHANGED);
    }

    // ========== Order Workflow Tests ==========

    #[tokio::test]
    async fn test_status_change_waits_for_confirmation() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(api.clone());
        app.state.write().admin.board.replace(vec![pedido(5, "Pendiente")]);

        app.handle_estado_click(5, EstadoPedido::Autorizado);
        let state = app.state.read();
        assert_eq!(
            state.confirm,
            Some(PendingConfirm::ChangeEstado { pedido_id: 5, estado: EstadoPedido::Autorizado })
        );
        assert_eq!(state.admin.board.get(5).map(|p| p.estado_pedido), Some(EstadoPedido::Pendiente));
        drop(state);

        app.handle_confirm_cancel();
        assert!(app.state.read().confirm.is_none());
        assert_eq!(api.called("update_pedido_estado"), 0);
    }

    #[tokio::test]
    async fn test_disallowed_transition_is_ignored() {
        let mut app = app_with(Arc::new(MockApi::new()));
        app.state.write().admin.board.replace(vec![pedido(5, "Enviado")]);

        app.handle_estado_click(5, EstadoPedido::Cancelado);

        assert!(app.state.read().confirm.is_none());
    }

    #[tokio::test]
    async fn test_authorizing_updates_locally_and_informs_admin() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(api.clone());
        app.state.write().admin.board.replace(vec![pedido(5, "Pendiente")]);

        app.handle_estado_click(5, EstadoPedido::Autorizado);
        app.handle_confirm_accept();

        // Optimistic rewrite before the server answers
        assert_eq!(
            app.state.read().admin.board.get(5).map(|p| p.estado_pedido),
            Some(EstadoPedido::Autorizado)
        );
        assert_eq!(app.state.read().admin.updating, Some(5));

        pump(&mut app).await;

        let state = app.state.read();
        assert!(state.admin.updating.is_none());
        let alert = state.alert.as_ref().expect("alert shown");
        assert_eq!(alert.title, PEDIDO_AUTORIZADO_TITLE);
        assert_eq!(api.called("list_pedidos"), 0);
    }

    #[tokio::test]
    async fn test_failed_status_change_reloads_list() {
        let mut api = MockApi::new();
        api.update = Err(AppError::Network("timeout".into()));
        *api.pedidos.lock() = Ok(vec![pedido(5, "Pendiente")]);
        let api = Arc::new(api);
        let mut app = app_with(api.clone());
        app.state.write().admin.board.replace(vec![pedido(5, "Pendiente")]);

        app.handle_estado_click(5, EstadoPedido::Cancelado);
        app.handle_confirm_accept();
        assert_eq!(
            app.state.read().admin.board.get(5).map(|p| p.estado_pedido),
            Some(EstadoPedido::Cancelado)
        );

        pump(&mut app).await; // mutation failed
        assert_eq!(
            app.state.read().alert.as_ref().map(|a| a.message.as_str()),
            Some(ESTADO_UPDATE_FAILED)
        );

        pump(&mut app).await; // full reload
        assert_eq!(
            app.state.read().admin.board.get(5).map(|p| p.estado_pedido),
            Some(EstadoPedido::Pendiente)
        );
        assert_eq!(api.called("list_pedidos"), 1);
    }

    #[tokio::test]
    async fn test_failed_order_load_empties_list() {
        let mut app = app_with(Arc::new(MockApi::new()));
        app.state.write().admin.board.replace(vec![pedido(1, "Pendiente")]);

        app.handle_event(AppEvent::PedidosLoaded(Err(AppError::Network("down".into()))));

        let state = app.state.read();
        assert!(state.admin.board.is_empty());
        assert_eq!(state.alert.as_ref().map(|a| a.message.as_str()), Some(PEDIDOS_LOAD_FAILED));
    }

    // ========== Invoice Tests ==========

    #[tokio::test]
    async fn test_invoice_list_falls_back_to_mis_facturas() {
        let mut api = MockApi::new();
        api.all_facturas = Err(AppError::Http { status: 403, body: "Forbidden".into() });
        api.mis_facturas = Ok(json!({ "data": { "facturas": [{ "id": 1 }, { "id": 2 }] } }));
        let api = Arc::new(api);
        let mut app = logged_in_app(api.clone(), "VENDEDOR");

        // Invoices, menu and authorized orders are loaded on entry
        for _ in 0..3 {
            pump(&mut app).await;
        }

        let state = app.state.read();
        assert_eq!(state.facturas.facturas.len(), 2);
        assert!(!state.facturas.loading);
        assert_eq!(api.called("get_mis_facturas"), 1);
    }

    #[tokio::test]
    async fn test_crear_factura_without_valid_lines_is_rejected_locally() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(api.clone());
        let sin_precio: Pedido = serde_json::from_value(json!({
            "id": 7,
            "estadoPedido": "Autorizado",
            "detalles": [{ "itemId": 1, "cantidad": 2, "precioUnitario": null }]
        }))
        .expect("pedido should parse");
        app.state.write().facturas.autorizados = vec![sin_precio];

        app.handle_crear_factura(7);

        let state = app.state.read();
        assert_eq!(state.alert.as_ref().map(|a| a.message.as_str()), Some(NO_VALID_LINES));
        assert!(state.facturas.creating_for.is_none());
        assert_eq!(api.called("crear_factura_directa"), 0);
    }

    #[tokio::test]
    async fn test_crear_factura_shows_invoice_and_drops_order() {
        let mut api = MockApi::new();
        api.crear = Ok(json!({ "id": 99, "numeroFactura": "F-99" }));
        api.all_facturas = Ok(json!([{ "id": 99, "numeroFactura": "F-99" }]));
        let api = Arc::new(api);
        let mut app = app_with(api.clone());
        {
            let mut state = app.state.write();
            state.facturas.autorizados = vec![pedido(5, "Autorizado"), pedido(6, "Autorizado")];
            state.facturas.facturas = vec![json!({ "id": 1 })];
        }

        app.handle_crear_factura(5);
        assert_eq!(app.state.read().facturas.creating_for, Some(5));

        pump(&mut app).await;
        {
            let state = app.state.read();
            assert_eq!(state.facturas.facturas[0]["id"], 99);
            assert_eq!(state.facturas.facturas.len(), 2);
            let ids: Vec<i64> = state.facturas.autorizados.iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![6]);
            assert_eq!(state.alert.as_ref().map(|a| a.message.as_str()), Some(FACTURA_CREATED));
            assert!(state.facturas.creating_for.is_none());
        }

        pump(&mut app).await; // refetch replaces the list
        assert_eq!(app.state.read().facturas.facturas.len(), 1);
        assert_eq!(api.called("get_all_facturas"), 1);
    }

    #[tokio::test]
    async fn test_crear_factura_server_error_keeps_order() {
        let mut api = MockApi::new();
        api.crear = Err(AppError::Http {
            status: 400,
            body: r#"{"message":"Usuario no existe"}"#.into(),
        });
        let mut app = app_with(Arc::new(api));
        app.state.write().facturas.autorizados = vec![pedido(5, "Autorizado")];

        app.handle_crear_factura(5);
        pump(&mut app).await;

        let state = app.state.read();
        let alert = state.alert.as_ref().expect("alert shown");
        assert_eq!(alert.title, FACTURA_CREATE_FAILED_TITLE);
        assert_eq!(alert.message, "Usuario no existe");
        assert_eq!(state.facturas.autorizados.len(), 1);
    }

    #[tokio::test]
    async fn test_csv_export_reports_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = App::with_services(
            Arc::new(MockApi::new()),
            LocalStore::in_memory(),
            Exporter::new(dir.path(), None),
        );

        app.handle_export_csv();
        assert_eq!(app.state.read().alert.as_ref().map(|a| a.kind), Some(AlertKind::Error));

        app.state.write().facturas.facturas = vec![json!({ "numero": "F-1" }), json!({ "numero": "F-2" })];
        app.handle_export_csv();

        let state = app.state.read();
        let alert = state.alert.as_ref().expect("alert shown");
        assert_eq!(alert.title, "CSV Creado");
        assert!(alert.message.ends_with("2 factura(s) exportada(s)"));
        let file = alert.file.as_ref().expect("file attached");
        assert!(file.path.exists());
    }

    #[tokio::test]
    async fn test_open_invoice_follows_its_key_across_reloads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = App::with_services(
            Arc::new(MockApi::new()),
            LocalStore::in_memory(),
            Exporter::new(dir.path(), None),
        );
        app.state.write().facturas.facturas = vec![json!({ "numeroFactura": "F-1" }), json!({ "numeroFactura": "F-2" })];

        app.handle_factura_select("F-1".into());
        app.handle_event(AppEvent::FacturasLoaded(Ok(vec![
            json!({ "numeroFactura": "F-2" }),
            json!({ "numeroFactura": "F-1" }),
        ])));

        {
            let state = app.state.read();
            assert_eq!(state.facturas.selected.as_deref(), Some("F-1"));
            assert_eq!(state.facturas.selected_view().map(|v| v.key()), Some("F-1".to_string()));
        }

        app.handle_export_factura("F-1");
        {
            let state = app.state.read();
            let file = state.alert.as_ref().and_then(|a| a.file.as_ref()).expect("file attached");
            assert!(file.file_name().starts_with("Factura_F-1_"));
        }

        // Closed once the invoice leaves the list
        app.handle_event(AppEvent::FacturasLoaded(Ok(vec![json!({ "numeroFactura": "F-2" })])));
        assert!(app.state.read().facturas.selected.is_none());
    }

    #[tokio::test]
    async fn test_invoice_reload_during_load_is_queued() {
        let mut api = MockApi::new();
        api.all_facturas = Ok(json!([{ "id": 1 }]));
        let api = Arc::new(api);
        let mut app = app_with(api.clone());

        tasks::facturas::fetch_facturas(app.state.clone(), app.event_tx.clone());
        tasks::facturas::fetch_facturas(app.state.clone(), app.event_tx.clone());
        assert!(app.state.read().facturas.reload_queued);

        pump(&mut app).await; // first load lands, queued one starts
        assert!(app.state.read().facturas.loading);
        assert!(!app.state.read().facturas.reload_queued);

        pump(&mut app).await;
        let state = app.state.read();
        assert!(!state.facturas.loading);
        assert_eq!(state.facturas.facturas.len(), 1);
        assert_eq!(api.called("get_all_facturas"), 2);
    }
}
