//! # Contacts
//!
//! A server-rendered contact book: a sidebar of contacts with live search,
//! a detail pane per contact, and a "New" button that creates a blank
//! contact and opens its edit form.
//!
//! - [`server`]: actix routes, app state and the error boundary
//! - [`views`]: maud templates for the shell and its outlets
//! - [`storage`]: the [`storage::ContactStore`] data layer
//! - [`navigation`]: search history and loading-state rules shared with the
//!   browser script

pub mod config;
pub mod contact;
pub mod navigation;
pub mod server;
pub mod storage;
pub mod views;

pub use config::ServerConfig;
pub use contact::{Contact, ContactUpdate};
pub use storage::{ContactStore, StoreError};
