mod config;
mod context;
mod cost_explorer_client;
mod daily_cost;
mod date_range;
mod error;
mod http;

use crate::config::Config;
use crate::context::ApplicationState;
use crate::cost_explorer_client::CostExplorerCostClient;
use crate::date_range::SystemClock;
use crate::http::http_server::HttpServer;
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_tracing();

    let region = config.region()?;
    tracing::info!("Using Cost Explorer in region {}", region.name());

    let application_state = ApplicationState::new(
        Arc::new(CostExplorerCostClient::new(region)),
        Arc::new(SystemClock),
    );
    let http_server = HttpServer::new(
        config.listen_addr(),
        application_state,
        &config.cors_origins,
    )?;

    http_server.serve().await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
