//! Transaction service
//!
//! Records expenses. Input is validated completely before anything is
//! written: a bad date or an unknown category leaves the store untouched.

use crate::audit::{AuditLog, LedgerEvent};
use crate::error::LedgerResult;
use crate::models::{parse_date, NewTransaction, Transaction};
use crate::storage::LedgerStore;

use super::category::CategoryService;

/// Input for recording an expense, as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTransactionInput {
    /// Date literal, `YYYY-MM-DD`
    pub date: String,
    pub category: String,
    pub amount: i64,
    pub comment: String,
}

/// Service for recording transactions
pub struct TransactionService<'a, S: LedgerStore + ?Sized> {
    store: &'a S,
    audit: Option<&'a AuditLog>,
}

impl<'a, S: LedgerStore + ?Sized> TransactionService<'a, S> {
    /// Create a new transaction service
    pub fn new(store: &'a S) -> Self {
        Self { store, audit: None }
    }

    /// Append a `TransactionAdded` event for every recorded transaction
    pub fn with_audit(mut self, audit: &'a AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Validate and record one expense
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let date = parse_date(&input.date)?;
        CategoryService::new(self.store).require(&input.category)?;

        let new = NewTransaction::new(date, input.category, input.amount).with_comment(input.comment);
        let txn = self.store.insert_transaction(new)?;

        if let Some(audit) = self.audit {
            audit.append(LedgerEvent::TransactionAdded {
                transaction: txn.clone(),
            })?;
        }

        Ok(txn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::models::Category;
    use crate::storage::MemoryLedger;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store() -> MemoryLedger {
        MemoryLedger::new(vec![Category::new("car", 20000)])
    }

    fn input(date: &str, category: &str) -> CreateTransactionInput {
        CreateTransactionInput {
            date: date.to_string(),
            category: category.to_string(),
            amount: 10000,
            comment: "fuel".to_string(),
        }
    }

    #[test]
    fn test_create_transaction() {
        let store = store();
        let txn = TransactionService::new(&store)
            .create(input("2024-06-05", "car"))
            .unwrap();

        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        assert_eq!(txn.amount, 10000);
        assert_eq!(txn.comment, "fuel");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_invalid_date_leaves_store_unchanged() {
        let store = store();
        let err = TransactionService::new(&store)
            .create(input("not-a-date", "car"))
            .unwrap_err();

        assert!(matches!(err, LedgerError::InvalidDate(ref d) if d == "not-a-date"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_category_leaves_store_unchanged() {
        let store = store();
        let err = TransactionService::new(&store)
            .create(input("2024-06-05", "boat"))
            .unwrap_err();

        assert!(err.is_unknown_category());
        assert!(err.to_string().contains("car"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_is_audited() {
        let temp_dir = TempDir::new().unwrap();
        let audit = AuditLog::new(temp_dir.path().join("audit.log"));
        let store = store();

        let txn = TransactionService::new(&store)
            .with_audit(&audit)
            .create(input("2024-06-05", "car"))
            .unwrap();

        let records = audit.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event, LedgerEvent::TransactionAdded { transaction: txn });
    }

    #[test]
    fn test_rejected_input_is_not_audited() {
        let temp_dir = TempDir::new().unwrap();
        let audit = AuditLog::new(temp_dir.path().join("audit.log"));
        let store = store();

        TransactionService::new(&store)
            .with_audit(&audit)
            .create(input("2024-06-05", "boat"))
            .unwrap_err();

        assert!(audit.records().unwrap().is_empty());
    }
}
