//! Planned category model
//!
//! A category is a named spending bucket with a fixed monthly planned amount.
//! Categories are created together with the budget and never edited afterward.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A planned spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, the join key transactions refer to
    pub name: String,

    /// Planned monthly amount
    pub planned_amount: i64,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, planned_amount: i64) -> Self {
        Self {
            name: name.into(),
            planned_amount,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
