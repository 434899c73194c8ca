//! Transaction model
//!
//! A single recorded expense. Transactions are append-only: once stored they
//! are never edited or removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::period::Period;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Name of the planned category this expense belongs to
    pub category: String,

    /// Amount spent
    pub amount: i64,

    /// Free-form note
    #[serde(default)]
    pub comment: String,
}

impl Transaction {
    /// Build a stored transaction from its id and the entered fields
    pub fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        Self {
            id,
            date: new.date,
            category: new.category,
            amount: new.amount,
            comment: new.comment,
        }
    }

    /// Check whether this transaction falls in the given period
    pub fn is_in(&self, period: Period) -> bool {
        period.contains(self.date)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {} {}", self.id, self.date, self.category, self.amount)
    }
}

/// A transaction that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub category: String,
    pub amount: i64,
    pub comment: String,
}

impl NewTransaction {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: i64) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            comment: String::new(),
        }
    }

    /// Attach a comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
