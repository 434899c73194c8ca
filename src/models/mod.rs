//! Core data models for the budget ledger
//!
//! This module contains the data structures that represent the budgeting
//! domain: planned categories, recorded transactions, and reporting periods.

pub mod category;
pub mod ids;
pub mod period;
pub mod transaction;

pub use category::{Category, CategoryValidationError};
pub use ids::TransactionId;
pub use period::{Period, PeriodParseError};
pub use transaction::{NewTransaction, Transaction};

use chrono::NaiveDate;

/// Date format accepted on the command line and written to storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date literal
pub fn parse_date(input: &str) -> Result<NaiveDate, crate::error::LedgerError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| crate::error::LedgerError::InvalidDate(input.to_string()))
}
