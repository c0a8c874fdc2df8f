use crate::date_range::DateRange;
use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_AMOUNT: &str = "0";

#[derive(Debug, PartialEq, Serialize)]
pub struct DailyCost {
    pub date: NaiveDate,
    pub amount: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CostReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub results_by_date: Vec<DailyCost>,
}

impl CostReport {
    pub fn new(date_range: DateRange, mut results_by_date: Vec<DailyCost>) -> Self {
        results_by_date.sort_by_key(|daily_cost| daily_cost.date);
        Self {
            start_date: date_range.start,
            end_date: date_range.end,
            results_by_date,
        }
    }
}
