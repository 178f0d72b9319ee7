use axum::{
    extract::{Path, State},
    Json,
};
use customer_data::{
    domain::{Customer, EnergyUsage, SupportTicket},
    queries, LookupError,
};

use super::{error::ApiError, AppState};

pub async fn get_customer_info(
    State(tables): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    observe("customer", queries::customer_info(&tables, &customer_id)).map(Json)
}

pub async fn get_energy_usage(
    State(tables): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<EnergyUsage>>, ApiError> {
    observe("energy_usage", queries::energy_usage(&tables, &customer_id)).map(Json)
}

pub async fn get_support_tickets(
    State(tables): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<SupportTicket>>, ApiError> {
    observe("support_tickets", queries::support_tickets(&tables, &customer_id)).map(Json)
}

fn observe<T>(kind: &'static str, result: Result<T, LookupError>) -> Result<T, ApiError> {
    metrics::counter!("lookup_requests_total", "kind" => kind).increment(1);

    result.map_err(|e| {
        match &e {
            LookupError::NotFound { customer_id } => {
                metrics::counter!("lookup_not_found_total").increment(1);
                tracing::debug!(%customer_id, "customer not found");
            }
            LookupError::MalformedRow(row) => {
                metrics::counter!("lookup_malformed_rows_total", "kind" => kind).increment(1);
                tracing::error!(kind, error = %row, "lookup hit a malformed source row");
            }
        }
        ApiError::from(e)
    })
}
