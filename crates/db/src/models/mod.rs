//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row and, where rows are created through the API, the create
//! DTO the repository accepts. Wire names are camelCase.

pub mod analytics;
pub mod comment;
pub mod scenario;
pub mod scenario_view;
