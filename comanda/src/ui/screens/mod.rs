//! # Screen Modules
//!
//! Each screen module renders one [`crate::app::Screen`].
//!
//! - **[`login`]**: login and registration forms
//! - **[`admin_orders`]**: order status workflow (administrators)
//! - **[`facturas`]**: invoice list, detail, exports and creation from
//!   authorized orders
//! - **[`profile`]**: account details, password change and logout
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
//!     // Read from the snapshot, write text edits back through app.state(),
//!     // call app.handle_* for actions.
//! }
//! ```
//!
//! Screens receive a cloned state snapshot, so no lock is held while drawing.
//! Actions go through [`crate::app::AppLike`], whose handlers take the write
//! lock briefly.

pub mod admin_orders;
pub mod facturas;
pub mod login;
pub mod profile;
