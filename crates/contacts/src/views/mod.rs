//! HTML views for the contact book
//!
//! Every page is the root shell ([`layout::page`]) wrapped around an outlet
//! for the detail pane.

pub mod contact;
pub mod error;
pub mod layout;
pub mod sidebar;

pub use contact::{contact_detail, contact_edit, index};
pub use error::error_page;
pub use layout::{Shell, page};

/// Stylesheet served at `/app.css`
pub const APP_CSS: &str = include_str!("../../static/app.css");

/// Shell behaviour served at `/shell.js`
pub const SHELL_JS: &str = include_str!("../../static/shell.js");
