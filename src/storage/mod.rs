//! Storage layer for the budget ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Reports and services only see the [`LedgerStore`] trait, so they
//! run the same against the on-disk [`Storage`] and the in-memory
//! [`MemoryLedger`].

pub mod categories;
pub mod file_io;
pub mod init;
pub mod memory;
pub mod query;
pub mod transactions;

pub use categories::CategoryRepository;
pub use init::initialize_ledger;
pub use memory::MemoryLedger;
pub use query::TransactionQuery;
pub use transactions::TransactionRepository;

use crate::audit::AuditLog;
use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, NewTransaction, Transaction};

/// The capabilities the ledger core needs from a store
pub trait LedgerStore {
    /// Every planned category
    fn list_categories(&self) -> LedgerResult<Vec<Category>>;

    /// Transactions matching `query`, in id order
    fn list_transactions(&self, query: &TransactionQuery) -> LedgerResult<Vec<Transaction>>;

    /// Persist a new transaction and return it with its assigned id
    fn insert_transaction(&self, new: NewTransaction) -> LedgerResult<Transaction>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    audit: AuditLog,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.budget_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            audit: AuditLog::new(paths.audit_log()),
            paths,
        })
    }

    /// Open an existing ledger and load it
    pub fn open(paths: LedgerPaths) -> Result<Self, LedgerError> {
        if !paths.is_initialized() {
            return Err(LedgerError::Storage(format!(
                "no budget found in {}; run 'budget create' first",
                paths.data_dir().display()
            )));
        }

        let mut storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.categories.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.categories.save()?;
        self.transactions.save()?;
        Ok(())
    }

    /// Check if a budget has been created
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Get the audit log
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}

impl LedgerStore for Storage {
    fn list_categories(&self) -> LedgerResult<Vec<Category>> {
        self.categories.get_all()
    }

    fn list_transactions(&self, query: &TransactionQuery) -> LedgerResult<Vec<Transaction>> {
        self.transactions.find(query)
    }

    fn insert_transaction(&self, new: NewTransaction) -> LedgerResult<Transaction> {
        let txn = self.transactions.insert(new)?;
        self.transactions.save()?;
        tracing::info!(id = %txn.id, category = %txn.category, amount = txn.amount, "stored transaction");
        Ok(txn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_open_requires_budget() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let err = Storage::open(paths).err().unwrap();
        assert!(err.to_string().contains("budget create"));
    }

    #[test]
    fn test_insert_is_persisted_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        storage
            .insert_transaction(NewTransaction::new(date, "car", 10000))
            .unwrap();

        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        let all = reopened.list_transactions(&TransactionQuery::new()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].amount, 10000);
    }
}
