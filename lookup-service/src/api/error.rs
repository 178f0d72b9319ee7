use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use customer_data::LookupError;
use serde_json::json;

/// A failed lookup, rendered as a JSON `{"detail": ...}` body.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] LookupError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
            LookupError::MalformedRow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to clients; row-level details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self.0 {
            LookupError::NotFound { .. } => "Customer not found",
            LookupError::MalformedRow(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.user_message() }));
        (self.status_code(), body).into_response()
    }
}
