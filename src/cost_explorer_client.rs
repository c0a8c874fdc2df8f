use crate::daily_cost::{DailyCost, DEFAULT_AMOUNT};
use crate::date_range::DateRange;
use crate::error::CostGuardError;
use async_trait::async_trait;

use bigdecimal::BigDecimal;
use rusoto_ce::{CostExplorer, CostExplorerClient, GetCostAndUsageRequest, ResultByTime};
use rusoto_core::Region;

use std::str::FromStr;

const DAILY_GRANULARITY: &str = "DAILY";
const UNBLENDED_COST: &str = "UnblendedCost";

pub struct CostExplorerCostClient {
    client: CostExplorerClient,
}

#[async_trait]
pub trait DailyCosts: Send + Sync {
    async fn daily_costs(&self, date_range: &DateRange) -> Result<Vec<DailyCost>, CostGuardError>;
}

#[async_trait]
impl DailyCosts for CostExplorerCostClient {
    async fn daily_costs(&self, date_range: &DateRange) -> Result<Vec<DailyCost>, CostGuardError> {
        let response = self
            .client
            .get_cost_and_usage(GetCostAndUsageRequest {
                time_period: date_range.to_date_interval()?,
                granularity: DAILY_GRANULARITY.to_string(),
                metrics: vec![UNBLENDED_COST.to_string()],
                ..Default::default()
            })
            .await?;
        self.extract_daily_costs(response.results_by_time)
    }
}

impl CostExplorerCostClient {
    /// Builds a client whose credentials come from the default provider chain.
    pub fn new(region: Region) -> Self {
        Self::new_with_client(CostExplorerClient::new(region))
    }

    pub fn new_with_client(client: CostExplorerClient) -> Self {
        CostExplorerCostClient { client }
    }

    /// Amounts are returned verbatim, but one that is not a decimal fails the whole report.
    fn extract_daily_costs(
        &self,
        results_by_time: Option<Vec<ResultByTime>>,
    ) -> Result<Vec<DailyCost>, CostGuardError> {
        let results_by_time = results_by_time.unwrap_or_default();
        let mut daily_costs = Vec::with_capacity(results_by_time.len());
        for result in results_by_time {
            let time_period = result.time_period.ok_or(CostGuardError::NoneValue)?;
            let date = DateRange::parse_date(&time_period.start)?;

            let amount = result
                .total
                .and_then(|mut total| total.remove(UNBLENDED_COST))
                .and_then(|metric| metric.amount)
                .unwrap_or_else(|| DEFAULT_AMOUNT.to_string());
            if BigDecimal::from_str(&amount).is_err() {
                return Err(CostGuardError::InvalidAmount(amount));
            }

            daily_costs.push(DailyCost { date, amount });
        }
        Ok(daily_costs)
    }
}
