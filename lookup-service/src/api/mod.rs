//! HTTP routes for the three lookups.

mod error;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use customer_data::Tables;

pub use error::ApiError;

/// Router state: the source tables, loaded once at startup.
pub type AppState = Arc<Tables>;

pub fn router(tables: AppState) -> Router {
    Router::new()
        .route("/customers/:customer_id", get(handlers::get_customer_info))
        .route("/energy_usage/:customer_id", get(handlers::get_energy_usage))
        .route("/support_tickets/:customer_id", get(handlers::get_support_tickets))
        .with_state(tables)
}
