//! Ledger initialization
//!
//! `create` replaces whatever ledger lives at the configured paths with a fresh
//! one: the planned categories from the configuration and no transactions.

use crate::audit::LedgerEvent;
use crate::config::budget_config::BudgetConfig;
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

use super::file_io::remove_if_exists;
use super::Storage;

/// Initialize (or reinitialize) the ledger from a budget configuration
///
/// Destructive: existing categories and transactions are removed.
pub fn initialize_ledger(paths: &LedgerPaths, config: &BudgetConfig) -> Result<Storage, LedgerError> {
    config.validate()?;

    let replacing = paths.is_initialized();
    paths.ensure_directories()?;
    remove_if_exists(paths.transactions_file())?;
    remove_if_exists(paths.budget_file())?;

    let storage = Storage::new(paths.clone())?;
    storage
        .categories
        .replace(config.income, config.categories())?;
    storage.transactions.clear()?;
    storage.save_all()?;

    storage.audit().append(LedgerEvent::BudgetCreated {
        income: config.income,
        categories: config.categories(),
        replaced: replacing,
    })?;

    tracing::info!(
        path = %paths.data_dir().display(),
        replaced = replacing,
        categories = config.categories_planned.len(),
        "ledger created"
    );
    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTransaction;
    use crate::storage::{LedgerStore, TransactionQuery};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn config() -> BudgetConfig {
        BudgetConfig::parse(
            "
income: 350000
categories-planned:
  - name: food
    amount: 60000
  - name: car
    amount: 20000
",
        )
        .unwrap()
    }

    #[test]
    fn test_initialize_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        let storage = initialize_ledger(&paths, &config()).unwrap();

        assert!(paths.is_initialized());
        assert!(paths.transactions_file().exists());
        assert_eq!(storage.categories.income().unwrap(), 350000);
        assert_eq!(storage.list_categories().unwrap().len(), 2);
    }

    #[test]
    fn test_reinitialize_discards_transactions() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = initialize_ledger(&paths, &config()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        storage
            .insert_transaction(NewTransaction::new(date, "car", 10000))
            .unwrap();

        initialize_ledger(&paths, &config()).unwrap();

        let reopened = Storage::open(paths).unwrap();
        assert!(reopened
            .list_transactions(&TransactionQuery::new())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_creation_is_audited() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_ledger(&paths, &config()).unwrap();
        let storage = initialize_ledger(&paths, &config()).unwrap();

        let replaced: Vec<bool> = storage
            .audit()
            .records()
            .unwrap()
            .into_iter()
            .map(|r| match r.event {
                LedgerEvent::BudgetCreated { replaced, .. } => replaced,
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert_eq!(replaced, vec![false, true]);
    }
}
