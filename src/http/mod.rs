pub mod cost_controller;
pub mod fallback_controller;
pub mod health_check_controller;
pub mod http_server;
pub mod model;

pub const APPLICATION_NAME: &str = "aws-cost-guard";
