//! Custom error types for the budget ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Period;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Budget configuration missing or malformed
    #[error("Configuration error: {0}")]
    ConfigRead(String),

    /// A date literal that is not YYYY-MM-DD
    #[error("your date input couldn't be handled as date: {0}")]
    InvalidDate(String),

    /// Category not among the planned categories
    #[error(
        "your category input ({category}) does not match with any existing expense categories. Available categories: {}",
        available.join(", ")
    )]
    UnknownCategory {
        category: String,
        available: Vec<String>,
    },

    /// Nothing recorded for the period being reported
    #[error("you don't have any registered expenses for {period}")]
    EmptyPeriod { period: Period },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create an "unknown category" error listing the valid names
    pub fn unknown_category(category: impl Into<String>, available: Vec<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
            available,
        }
    }

    /// Check if this is an "unknown category" error
    pub fn is_unknown_category(&self) -> bool {
        matches!(self, Self::UnknownCategory { .. })
    }

    /// Check if this is an "empty period" error
    pub fn is_empty_period(&self) -> bool {
        matches!(self, Self::EmptyPeriod { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigRead(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
