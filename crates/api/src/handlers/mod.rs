pub mod analytics;
pub mod comment;
pub mod scenario;
pub mod upload;
pub mod view;
