use crate::error::CostGuardError;
use chrono::{DateTime, Days, NaiveDate, Utc};
use rusoto_ce::DateInterval;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TRAILING_DAYS: u64 = 7;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The last seven fully elapsed UTC days, both ends inclusive.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TryFrom<DateTime<Utc>> for DateRange {
    type Error = CostGuardError;

    fn try_from(date_time: DateTime<Utc>) -> Result<Self, Self::Error> {
        let end = date_time
            .date_naive()
            .checked_sub_days(Days::new(1))
            .ok_or(CostGuardError::DateOutOfRange)?;
        let start = end
            .checked_sub_days(Days::new(TRAILING_DAYS - 1))
            .ok_or(CostGuardError::DateOutOfRange)?;

        Ok(DateRange { start, end })
    }
}

impl DateRange {
    /// Cost Explorer treats `End` as exclusive, so the interval closes the day after `end`.
    pub fn to_date_interval(&self) -> Result<DateInterval, CostGuardError> {
        let exclusive_end = self
            .end
            .checked_add_days(Days::new(1))
            .ok_or(CostGuardError::DateOutOfRange)?;

        Ok(DateInterval {
            start: self.start.format(DATE_FORMAT).to_string(),
            end: exclusive_end.format(DATE_FORMAT).to_string(),
        })
    }

    pub fn parse_date(value: &str) -> Result<NaiveDate, CostGuardError> {
        Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
    }
}
