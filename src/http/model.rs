use crate::error::CostGuardError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

// Probe models

#[derive(serde::Serialize)]
pub struct RootResponse {
    app: &'static str,
    status: &'static str,
}

impl RootResponse {
    pub const fn ok() -> Self {
        Self {
            app: super::APPLICATION_NAME,
            status: "ok",
        }
    }
}

#[derive(serde::Serialize)]
pub struct HealthCheckResponse {
    status: &'static str,
}

impl HealthCheckResponse {
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}

// Error models

#[derive(serde::Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug)]
pub struct ErrorResponse {
    status: StatusCode,
    detail: String,
}

impl ErrorResponse {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: "Not Found".to_string(),
        }
    }
}

impl From<CostGuardError> for ErrorResponse {
    fn from(error: CostGuardError) -> Self {
        let detail = if error.is_upstream() {
            format!("AWS Error: {}", error)
        } else {
            format!("Server Error: {}", error)
        };

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}
