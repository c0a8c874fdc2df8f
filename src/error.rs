use std::error::Error;

use rusoto_ce::GetCostAndUsageError;
use rusoto_core::RusotoError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum CostGuardError {
    NoneValue,
    DateOutOfRange,
    InvalidDate(chrono::ParseError),
    InvalidAmount(String),
    GetCostAndUsageError(RusotoError<GetCostAndUsageError>),
}

impl CostGuardError {
    /// Whether the failure came from the Cost Explorer client or its transport.
    pub fn is_upstream(&self) -> bool {
        matches!(self, CostGuardError::GetCostAndUsageError(_))
    }
}

impl Display for CostGuardError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            CostGuardError::NoneValue => write!(f, "Value is None"),
            CostGuardError::DateOutOfRange => write!(f, "Date is out of range"),
            CostGuardError::InvalidDate(ref error) => write!(f, "Failed to parse date: {}", error),
            CostGuardError::InvalidAmount(ref amount) => {
                write!(f, "Failed to parse amount as decimal: {:?}", amount)
            }
            CostGuardError::GetCostAndUsageError(ref error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl Error for CostGuardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            CostGuardError::InvalidDate(ref error) => Some(error),
            CostGuardError::GetCostAndUsageError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<chrono::ParseError> for CostGuardError {
    fn from(e: chrono::ParseError) -> CostGuardError {
        CostGuardError::InvalidDate(e)
    }
}

impl From<RusotoError<GetCostAndUsageError>> for CostGuardError {
    fn from(e: RusotoError<GetCostAndUsageError>) -> CostGuardError {
        CostGuardError::GetCostAndUsageError(e)
    }
}
