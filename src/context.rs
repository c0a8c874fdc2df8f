use crate::cost_explorer_client::DailyCosts;
use crate::date_range::Clock;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    cost_client: Arc<dyn DailyCosts>,
    clock: Arc<dyn Clock>,
}

impl ApplicationState {
    pub fn new(cost_client: Arc<dyn DailyCosts>, clock: Arc<dyn Clock>) -> Self {
        Self { cost_client, clock }
    }

    pub fn cost_client(&self) -> &dyn DailyCosts {
        self.cost_client.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
