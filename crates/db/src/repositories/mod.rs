//! Repository structs: one per table, stateless, taking `&PgPool`.

pub mod comment_repo;
pub mod scenario_repo;
pub mod scenario_view_repo;

pub use comment_repo::CommentRepo;
pub use scenario_repo::ScenarioRepo;
pub use scenario_view_repo::ScenarioViewRepo;
