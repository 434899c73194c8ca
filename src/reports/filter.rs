//! Transaction filter
//!
//! Selects transactions by date range, amount range, and category set, and
//! sums what it selected.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::error::LedgerResult;
use crate::models::Transaction;
use crate::storage::{LedgerStore, TransactionQuery};

use super::checked_sum;

/// Default lower amount bound
pub const DEFAULT_MIN_AMOUNT: i64 = 0;

/// Default upper amount bound
pub const DEFAULT_MAX_AMOUNT: i64 = 100_000;

/// What to select. All bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Empty means every category
    pub categories: BTreeSet<String>,
    pub min_amount: i64,
    pub max_amount: i64,
}

impl FilterCriteria {
    /// Criteria covering the month of `today` up to `today`, default amounts,
    /// every category
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            from: today.with_day(1).unwrap_or(today),
            to: today,
            categories: BTreeSet::new(),
            min_amount: DEFAULT_MIN_AMOUNT,
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }

    /// Restrict to the given categories
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// The part of the criteria a store applies while reading
    pub fn query(&self) -> TransactionQuery {
        TransactionQuery::new()
            .date_range(self.from, self.to)
            .amount_range(self.min_amount, self.max_amount)
    }

    /// The category pass
    pub fn accepts_category(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.contains(category)
    }
}

/// Selected transactions and their sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub criteria: FilterCriteria,
    /// Ordered by date, then id
    pub matches: Vec<Transaction>,
    pub sum: i64,
}

impl FilterReport {
    /// Read from the store with the date/amount bounds pushed down, then
    /// apply the category pass
    pub fn generate<S: LedgerStore + ?Sized>(
        store: &S,
        criteria: FilterCriteria,
    ) -> LedgerResult<Self> {
        let candidates = store.list_transactions(&criteria.query())?;
        tracing::debug!(candidates = candidates.len(), ?criteria, "filtering transactions");
        filter_transactions(candidates, criteria)
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Select and order transactions
///
/// Inverted ranges (`from > to`, `min > max`) select nothing. Category names
/// are compared exactly and never validated. Fails only when the sum does not
/// fit in an `i64`.
pub fn filter_transactions(
    transactions: impl IntoIterator<Item = Transaction>,
    criteria: FilterCriteria,
) -> LedgerResult<FilterReport> {
    let query = criteria.query();

    let mut matches: Vec<Transaction> = transactions
        .into_iter()
        .filter(|t| query.matches(t))
        .filter(|t| criteria.accepts_category(&t.category))
        .collect();
    matches.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let sum = checked_sum(matches.iter().map(|t| t.amount))?;

    Ok(FilterReport {
        criteria,
        matches,
        sum,
    })
}
