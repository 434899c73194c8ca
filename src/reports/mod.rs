//! Reports module for the budget ledger
//!
//! - `status`: planned versus actual per category for one month
//! - `filter`: transactions selected by date, amount, and category

pub mod filter;
pub mod status;

pub use filter::{filter_transactions, FilterCriteria, FilterReport};
pub use status::{compute_status, StatusReport, StatusRow, TOTAL_LABEL};

use crate::error::{LedgerError, LedgerResult};

fn amount_overflow() -> LedgerError {
    LedgerError::Validation("amounts add up beyond the 64-bit range".into())
}

/// Sum amounts, failing instead of wrapping
pub(crate) fn checked_sum(amounts: impl IntoIterator<Item = i64>) -> LedgerResult<i64> {
    amounts
        .into_iter()
        .try_fold(0i64, |acc, amount| acc.checked_add(amount).ok_or_else(amount_overflow))
}

/// `a - b`, failing instead of wrapping
pub(crate) fn checked_diff(a: i64, b: i64) -> LedgerResult<i64> {
    a.checked_sub(b).ok_or_else(amount_overflow)
}
