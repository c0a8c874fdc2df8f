use anyhow::{Context, Result};
use clap::Parser;
use rusoto_core::Region;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "aws-cost-guard", version, about = "Daily AWS cost reporting service")]
pub struct Config {
    /// AWS region of the Cost Explorer client
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Address the HTTP server binds to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Browser origins allowed by CORS
    #[arg(
        long = "cors-origin",
        env = "CORS_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:5173", "http://127.0.0.1:5173"]
    )]
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn region(&self) -> Result<Region> {
        Region::from_str(&self.region)
            .with_context(|| format!("Invalid AWS region: {}", self.region))
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
