use crate::context::ApplicationState;
use crate::http::cost_controller::CostController;
use crate::http::fallback_controller::FallbackController;
use crate::http::health_check_controller::HealthCheckController;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct HttpServer {
    addr: SocketAddr,
    application_state: ApplicationState,
    cors_layer: CorsLayer,
}

impl HttpServer {
    pub fn new(
        addr: SocketAddr,
        application_state: ApplicationState,
        cors_origins: &[String],
    ) -> Result<Self> {
        tracing::debug!("Initializing the HTTP server");

        Ok(Self {
            addr,
            application_state,
            cors_layer: Self::cors_layer(cors_origins)?,
        })
    }

    /// Credentials are allowed, so methods and headers are mirrored instead of using a wildcard.
    pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }

    pub fn router(application_state: ApplicationState, cors_layer: CorsLayer) -> Router {
        let trace_layer = TraceLayer::new_for_http();

        Router::new()
            .route("/", get(HealthCheckController::get_root_endpoint_handler))
            .route(
                "/health",
                get(HealthCheckController::get_status_endpoint_handler),
            )
            .route(
                "/costs/last7",
                get(CostController::get_last_seven_days_endpoint_handler),
            )
            .fallback(FallbackController::fallback_endpoint_handler)
            .layer(trace_layer)
            .layer(cors_layer)
            .with_state(application_state)
    }

    pub async fn serve(self) -> Result<()> {
        let router = Self::router(self.application_state, self.cors_layer);
        let listener = TcpListener::bind(self.addr).await?;

        tracing::info!("Starting HTTP Server on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP Server stopped");

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!("Failed to listen for SIGTERM: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
