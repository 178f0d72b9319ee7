pub mod api;
pub mod config;
pub mod metrics_server;
pub mod observability;
pub mod sources;

pub use api::{router, ApiError, AppState};
