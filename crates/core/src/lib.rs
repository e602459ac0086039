//! Domain types, error taxonomy and pure validation rules shared by the
//! database, API and client crates.

pub mod category;
pub mod comment;
pub mod error;
pub mod scenario;
pub mod types;
pub mod upload;
pub mod validation;
