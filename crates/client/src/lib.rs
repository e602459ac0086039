//! Typed client for the scenario showcase API plus the client-side
//! presentation logic the web UI runs over fetched data: catalog search and
//! category filtering, best-effort view tracking, and form drafts that
//! survive failed submissions.

pub mod api;
pub mod catalog;
pub mod config;
pub mod draft;
pub mod error;

pub use api::ShowcaseClient;
pub use config::{ClientConfig, Language};
pub use error::ClientError;
