use crate::http::model::{HealthCheckResponse, RootResponse};
use axum::response::IntoResponse;
use axum::Json;

pub struct HealthCheckController;

impl HealthCheckController {
    #[tracing::instrument(level = "debug")]
    pub async fn get_root_endpoint_handler() -> impl IntoResponse {
        tracing::debug!("Getting service identity");

        Json(RootResponse::ok())
    }

    #[tracing::instrument(level = "debug")]
    pub async fn get_status_endpoint_handler() -> impl IntoResponse {
        tracing::debug!("Getting service status");

        Json(HealthCheckResponse::ok())
    }
}
