//! Ledger events

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Transaction};

/// A change made to the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// `create` wrote a budget. When `replaced` is set, a previous budget and
    /// all of its transactions were thrown away first.
    BudgetCreated {
        income: i64,
        categories: Vec<Category>,
        replaced: bool,
    },
    /// `add` appended an expense
    TransactionAdded { transaction: Transaction },
}

impl fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetCreated {
                income,
                categories,
                replaced,
            } => write!(
                f,
                "budget {} with {} categories, income {}",
                if *replaced { "replaced" } else { "created" },
                categories.len(),
                income
            ),
            Self::TransactionAdded { transaction: t } => write!(
                f,
                "transaction {} added: {} {} {}",
                t.id, t.date, t.category, t.amount
            ),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub at: DateTime<Utc>,
    pub event: LedgerEvent,
}

impl AuditRecord {
    /// Stamp an event with the current time
    pub fn now(event: LedgerEvent) -> Self {
        Self {
            at: Utc::now(),
            event,
        }
    }
}
