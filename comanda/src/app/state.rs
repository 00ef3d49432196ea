//! # Application State Types
//!
//! All state-related types for the application: screens, the login/register
//! form, the per-screen state of profile, invoices and admin orders, and the
//! blocking dialogs.

use std::sync::Arc;

use serde_json::Value;
use shared::{EstadoPedido, Pedido, RolKind};

use crate::core::service::ApiService;
use crate::invoice::export::{ExportedFile, Exporter};
use crate::invoice::{FacturaView, MenuMap};
use crate::orders::OrderBoard;
use crate::session::{RegisterForm, Session};
use crate::storage::LocalStore;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Login and registration
    Login,
    /// Order status workflow (administrators)
    AdminOrders,
    /// Invoice list, detail and creation (sellers and administrators)
    Facturas,
    /// Account details, password change and logout
    Profile,
}

impl Screen {
    /// Get all screens in tab order
    pub fn all() -> &'static [Screen] {
        &[Screen::Login, Screen::AdminOrders, Screen::Facturas, Screen::Profile]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Iniciar sesión",
            Screen::AdminOrders => "Pedidos",
            Screen::Facturas => "Mis Facturas",
            Screen::Profile => "Perfil",
        }
    }

    /// Tabs shown to a logged-in user of `role`, in order.
    pub fn tabs_for(role: RolKind) -> &'static [Screen] {
        match role {
            RolKind::Administrador => &[Screen::AdminOrders, Screen::Facturas, Screen::Profile],
            RolKind::Vendedor => &[Screen::Facturas, Screen::Profile],
            RolKind::Cliente => &[Screen::Profile],
        }
    }

    /// First screen after login.
    pub fn home_for(role: RolKind) -> Screen {
        Self::tabs_for(role).first().copied().unwrap_or(Screen::Profile)
    }

    /// Whether a user with `role` (or nobody, when `None`) may open this screen.
    pub fn allowed_for(&self, role: Option<RolKind>) -> bool {
        match role {
            None => *self == Screen::Login,
            Some(role) => Self::tabs_for(role).contains(self),
        }
    }
}

/// Login / register form
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Login {
        email: String,
        password: String,
        error: Option<String>,
        submitting: bool,
    },
    Signup {
        form: RegisterForm,
        confirm_password: String,
        error: Option<String>,
        submitting: bool,
    },
}

impl AuthState {
    pub fn login() -> Self {
        AuthState::Login {
            email: String::new(),
            password: String::new(),
            error: None,
            submitting: false,
        }
    }

    pub fn signup() -> Self {
        AuthState::Signup {
            form: RegisterForm::default(),
            confirm_password: String::new(),
            error: None,
            submitting: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self {
            AuthState::Login { submitting, .. } | AuthState::Signup { submitting, .. } => *submitting,
        }
    }

    pub(crate) fn set_error(&mut self, message: Option<String>) {
        match self {
            AuthState::Login { error, .. } | AuthState::Signup { error, .. } => *error = message,
        }
    }

    pub(crate) fn set_submitting(&mut self, value: bool) {
        match self {
            AuthState::Login { submitting, .. } | AuthState::Signup { submitting, .. } => {
                *submitting = value
            }
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::login()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Error,
}

/// Blocking message dialog. Only one is shown at a time; a new one replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
    /// Exported file offered for opening or saving
    pub file: Option<ExportedFile>,
}

impl Alert {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, AlertKind::Info)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, AlertKind::Success)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, AlertKind::Error)
    }

    pub fn with_file(mut self, file: ExportedFile) -> Self {
        self.file = Some(file);
        self
    }

    fn new(title: impl Into<String>, message: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            file: None,
        }
    }
}

/// Action waiting for a yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirm {
    ChangeEstado { pedido_id: i64, estado: EstadoPedido },
    Logout,
}

impl PendingConfirm {
    pub fn title(&self) -> &'static str {
        match self {
            PendingConfirm::ChangeEstado { .. } => "Confirmar",
            PendingConfirm::Logout => "Cerrar sesión",
        }
    }

    pub fn message(&self) -> String {
        match self {
            PendingConfirm::ChangeEstado { estado, .. } => format!("¿Cambiar estado a \"{}\"?", estado),
            PendingConfirm::Logout => "¿Estás seguro que deseas cerrar sesión?".to_string(),
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            PendingConfirm::ChangeEstado { .. } => "Sí, cambiar",
            PendingConfirm::Logout => "Cerrar sesión",
        }
    }
}

/// Toast severity for [`crate::ui::widgets::notifications::NotificationManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Profile screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub show_change_password: bool,
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl ProfileState {
    pub(crate) fn reset_password_form(&mut self) {
        *self = Self::default();
    }
}

/// Seller invoices screen
#[derive(Debug, Clone, Default)]
pub struct FacturasState {
    /// Raw invoices as the server sent them
    pub facturas: Vec<Value>,
    pub loading: bool,
    /// Another list load was asked for while one was running
    pub reload_queued: bool,
    /// Item id → name, for lines that only carry an id
    pub menu: MenuMap,
    /// Key of the invoice shown in the detail dialog
    pub selected: Option<String>,
    pub autorizados: Vec<Pedido>,
    pub loading_autorizados: bool,
    /// Order whose invoice is being created
    pub creating_for: Option<i64>,
}

impl FacturasState {
    pub fn view_at(&self, index: usize) -> Option<FacturaView> {
        self.facturas.get(index).map(|raw| FacturaView::from_value(raw, &self.menu))
    }

    /// Current position of the invoice with `key`.
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.facturas
            .iter()
            .position(|raw| FacturaView::from_value(raw, &self.menu).key() == key)
    }

    /// The invoice shown in the detail dialog, while it is still listed.
    pub fn selected_view(&self) -> Option<FacturaView> {
        let key = self.selected.as_deref()?;
        self.position_of(key).and_then(|index| self.view_at(index))
    }
}

/// Admin orders screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminOrdersState {
    pub board: OrderBoard,
    pub loading: bool,
    /// Order whose status mutation is in flight
    pub updating: Option<i64>,
}

/// Complete application state
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub auth: AuthState,
    pub session: Session,
    pub profile: ProfileState,
    pub facturas: FacturasState,
    pub admin: AdminOrdersState,
    pub alert: Option<Alert>,
    pub confirm: Option<PendingConfirm>,
    /// Non-blocking notifications, drained by the UI each frame
    pub pending_toasts: Vec<(ToastKind, String)>,
    pub api_client: Arc<dyn ApiService>,
    pub store: LocalStore,
    pub exporter: Exporter,
}

impl AppState {
    pub fn new(api_client: Arc<dyn ApiService>, store: LocalStore, exporter: Exporter) -> Self {
        let session = Session::restore(&store);
        let current_screen = session.role().map(Screen::home_for).unwrap_or(Screen::Login);

        Self {
            current_screen,
            auth: AuthState::login(),
            session,
            profile: ProfileState::default(),
            facturas: FacturasState::default(),
            admin: AdminOrdersState::default(),
            alert: None,
            confirm: None,
            pending_toasts: Vec::new(),
            api_client,
            store,
            exporter,
        }
    }

    pub fn role(&self) -> Option<RolKind> {
        self.session.role()
    }

    pub fn show_alert(&mut self, alert: Alert) {
        tracing::debug!(title = %alert.title, kind = ?alert.kind, "Alert shown");
        self.alert = Some(alert);
    }

    pub fn toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.pending_toasts.push((kind, message.into()));
    }

    /// Forget all per-user screen data.
    pub(crate) fn reset_screens(&mut self) {
        self.profile = ProfileState::default();
        self.facturas = FacturasState::default();
        self.admin = AdminOrdersState::default();
        self.confirm = None;
    }
}
