//! Store-level transaction predicate
//!
//! The date and amount bounds are applied where the transactions are read,
//! so a store backed by something smarter than a JSON file can push them down.

use chrono::NaiveDate;

use crate::models::{Period, Transaction};

/// Options for selecting transactions from a store
///
/// All bounds are inclusive. An unset bound does not restrict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Earliest date
    pub from: Option<NaiveDate>,
    /// Latest date
    pub to: Option<NaiveDate>,
    /// Smallest amount
    pub min_amount: Option<i64>,
    /// Largest amount
    pub max_amount: Option<i64>,
}

impl TransactionQuery {
    /// Create a query matching every transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a date range
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Restrict to one calendar month
    pub fn period(self, period: Period) -> Self {
        self.date_range(period.start_date(), period.end_date())
    }

    /// Restrict to an amount range
    pub fn amount_range(mut self, min: i64, max: i64) -> Self {
        self.min_amount = Some(min);
        self.max_amount = Some(max);
        self
    }

    /// Check a single transaction against every bound
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.from.map_or(true, |from| txn.date >= from)
            && self.to.map_or(true, |to| txn.date <= to)
            && self.min_amount.map_or(true, |min| txn.amount >= min)
            && self.max_amount.map_or(true, |max| txn.amount <= max)
    }
}
