use crate::http::model::ErrorResponse;
use axum::body::Body;
use axum::extract::Request;
use axum::response::IntoResponse;

pub struct FallbackController;

impl FallbackController {
    #[tracing::instrument(skip(req))]
    pub async fn fallback_endpoint_handler(req: Request<Body>) -> impl IntoResponse {
        tracing::warn!(
            "Unexpected route targeted: {} {}",
            req.method(),
            req.uri().path()
        );

        ErrorResponse::not_found()
    }
}
