//! In-memory ledger
//!
//! Holds categories and transactions in process memory. Used by unit tests and
//! by anything that wants to run the reports over a snapshot without touching
//! disk.

use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, NewTransaction, Transaction, TransactionId};

use super::{LedgerStore, TransactionQuery};

#[derive(Default)]
pub struct MemoryLedger {
    categories: Vec<Category>,
    transactions: RwLock<Vec<Transaction>>,
}

impl MemoryLedger {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            transactions: RwLock::new(Vec::new()),
        }
    }

    /// Seed transactions, assigning ids in order
    pub fn with_transactions(self, seed: impl IntoIterator<Item = NewTransaction>) -> Self {
        for new in seed {
            self.insert_transaction(new)
                .expect("seeding an unshared ledger cannot fail");
        }
        self
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.read().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LedgerStore for MemoryLedger {
    fn list_categories(&self) -> LedgerResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn list_transactions(&self, query: &TransactionQuery) -> LedgerResult<Vec<Transaction>> {
        let transactions = self.transactions.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(transactions
            .iter()
            .filter(|t| query.matches(t))
            .cloned()
            .collect())
    }

    fn insert_transaction(&self, new: NewTransaction) -> LedgerResult<Transaction> {
        let mut transactions = self.transactions.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = transactions
            .last()
            .map(|t| t.id.next())
            .unwrap_or(TransactionId::FIRST);
        let txn = Transaction::from_new(id, new);
        transactions.push(txn.clone());
        Ok(txn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_seeded_ids_follow_insertion_order() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let ledger = MemoryLedger::new(vec![Category::new("car", 1)]).with_transactions([
            NewTransaction::new(date, "car", 1),
            NewTransaction::new(date, "car", 2),
        ]);

        let all = ledger.list_transactions(&TransactionQuery::new()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, TransactionId::FIRST);
        assert_eq!(all[1].id.get(), 2);
        assert_eq!(ledger.list_categories().unwrap().len(), 1);
    }
}
