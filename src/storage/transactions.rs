//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Transactions
//! are kept in insertion order, which is also id order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{NewTransaction, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::query::TransactionQuery;

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    /// Id for the next inserted transaction
    #[serde(default)]
    next_id: TransactionId,
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<TransactionData>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(TransactionData::default()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), LedgerError> {
        let mut file_data: TransactionData = read_json(&self.path)?;

        // Never hand out an id that is already taken, even if next_id was lost
        if let Some(max) = file_data.transactions.iter().map(|t| t.id).max() {
            if file_data.next_id <= max {
                file_data.next_id = max.next();
            }
        }
        file_data.transactions.sort_by_key(|t| t.id);

        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data;

        tracing::debug!(
            path = %self.path.display(),
            transactions = data.transactions.len(),
            "loaded transactions"
        );
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// Drop every transaction and restart ids
    pub fn clear(&self) -> Result<(), LedgerError> {
        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = TransactionData::default();
        Ok(())
    }

    /// Assign the next id and append
    pub fn insert(&self, new: NewTransaction) -> Result<Transaction, LedgerError> {
        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = data.next_id;
        data.next_id = id.next();

        let txn = Transaction::from_new(id, new);
        data.transactions.push(txn.clone());
        Ok(txn)
    }

    /// Get transactions matching the query, in id order
    pub fn find(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, LedgerError> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .transactions
            .iter()
            .filter(|t| query.matches(t))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        (temp_dir, repo)
    }

    fn expense(day: u32, amount: i64) -> NewTransaction {
        NewTransaction::new(NaiveDate::from_ymd_opt(2024, 6, day).unwrap(), "car", amount)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.find(&TransactionQuery::new()).unwrap().len(), 0);
    }

    #[test]
    fn test_insert_assigns_monotonic_ids() {
        let (_temp_dir, repo) = create_test_repo();

        let first = repo.insert(expense(5, 100)).unwrap();
        let second = repo.insert(expense(1, 200)).unwrap();

        assert_eq!(first.id, TransactionId::FIRST);
        assert_eq!(second.id, first.id.next());
        let stored = repo.find(&TransactionQuery::new()).unwrap();
        assert_eq!(stored[1].id, second.id);
        assert_eq!(stored[1].amount, 200);
    }

    #[test]
    fn test_save_and_reload_keeps_counter() {
        let (temp_dir, repo) = create_test_repo();
        repo.insert(expense(5, 100)).unwrap();
        repo.insert(expense(6, 200)).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.find(&TransactionQuery::new()).unwrap().len(), 2);

        let third = repo2.insert(expense(7, 300)).unwrap();
        assert_eq!(third.id.get(), 3);
    }

    #[test]
    fn test_load_repairs_stale_counter() {
        let (temp_dir, _repo) = create_test_repo();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(
            &path,
            r#"{"transactions":[{"id":9,"date":"2024-06-01","category":"car","amount":1}]}"#,
        )
        .unwrap();

        let repo = TransactionRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.insert(expense(2, 1)).unwrap().id.get(), 10);
    }

    #[test]
    fn test_find_with_query() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(expense(10, 500)).unwrap();
        repo.insert(expense(15, 1500)).unwrap();
        repo.insert(expense(20, 2500)).unwrap();

        let query = TransactionQuery::new().amount_range(1000, 2000);
        let found = repo.find(&query).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amount, 1500);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(expense(10, 500)).unwrap();
        repo.clear().unwrap();

        assert_eq!(repo.find(&TransactionQuery::new()).unwrap().len(), 0);
        assert_eq!(repo.insert(expense(10, 1)).unwrap().id, TransactionId::FIRST);
    }
}
