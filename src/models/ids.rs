//! Strongly-typed ID wrapper for transactions
//!
//! Transaction ids are assigned by the store from a monotonic counter, so a
//! newtype over `u64` keeps them from mixing with amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// The id handed out to the first transaction of a fresh ledger
    pub const FIRST: TransactionId = TransactionId(1);

    /// Wrap a raw id
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying integer
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
