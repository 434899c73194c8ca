//! Monthly status report
//!
//! Reconciles the planned amount of every category against what was actually
//! spent in one calendar month.

use std::collections::HashMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Period, Transaction};
use crate::storage::{LedgerStore, TransactionQuery};

use super::{checked_diff, checked_sum};

/// Label of the totals row
pub const TOTAL_LABEL: &str = "TOTAL";

/// Planned versus actual for one category (or for everything)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub category: String,
    pub planned: i64,
    pub actual: i64,
    /// planned - actual
    pub balance: i64,
}

impl StatusRow {
    /// Fails when the balance does not fit in an `i64`
    pub fn new(category: impl Into<String>, planned: i64, actual: i64) -> LedgerResult<Self> {
        Ok(Self {
            category: category.into(),
            planned,
            actual,
            balance: checked_diff(planned, actual)?,
        })
    }
}

/// Status of one period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub period: Period,
    /// One row per category, ordered by category name
    pub rows: Vec<StatusRow>,
    pub totals: StatusRow,
    /// Spending in the period booked against names that are not planned
    /// categories. It is part of the totals row but of no category row.
    pub unaccounted: i64,
}

impl StatusReport {
    /// Generate the report for `period` from a store
    pub fn generate<S: LedgerStore + ?Sized>(store: &S, period: Period) -> LedgerResult<Self> {
        let categories = store.list_categories()?;
        let transactions = store.list_transactions(&TransactionQuery::new().period(period))?;

        tracing::debug!(
            %period,
            categories = categories.len(),
            transactions = transactions.len(),
            "computing status"
        );
        compute_status(&categories, &transactions, period)
    }
}

/// Compute per-category and total planned/actual/balance for `period`
///
/// `transactions` may span any dates; only those inside `period` count. Fails
/// with [`LedgerError::EmptyPeriod`] when none do.
pub fn compute_status(
    categories: &[Category],
    transactions: &[Transaction],
    period: Period,
) -> LedgerResult<StatusReport> {
    let in_period: Vec<&Transaction> = transactions.iter().filter(|t| t.is_in(period)).collect();

    if in_period.is_empty() {
        return Err(LedgerError::EmptyPeriod { period });
    }

    let mut actual_by_category: HashMap<&str, i64> = HashMap::new();
    for txn in &in_period {
        let actual = actual_by_category.entry(txn.category.as_str()).or_insert(0);
        *actual = checked_sum([*actual, txn.amount])?;
    }

    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let rows: Vec<StatusRow> = sorted
        .into_iter()
        .map(|c| {
            let actual = actual_by_category
                .get(c.name.as_str())
                .copied()
                .unwrap_or(0);
            StatusRow::new(c.name.clone(), c.planned_amount, actual)
        })
        .collect::<LedgerResult<_>>()?;

    // Totals are summed independently of the rows: the actual total also
    // covers transactions whose category is not planned.
    let total_planned = checked_sum(categories.iter().map(|c| c.planned_amount))?;
    let total_actual = checked_sum(in_period.iter().map(|t| t.amount))?;
    let unaccounted = checked_diff(total_actual, checked_sum(rows.iter().map(|r| r.actual))?)?;

    Ok(StatusReport {
        period,
        rows,
        totals: StatusRow::new(TOTAL_LABEL, total_planned, total_actual)?,
        unaccounted,
    })
}
