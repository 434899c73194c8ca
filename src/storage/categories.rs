//! Category repository for JSON storage
//!
//! Manages loading and saving the income and planned categories in budget.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::Category;

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    income: i64,
    categories: Vec<Category>,
}

/// Repository for the planned budget
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<BudgetData>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetData::default()),
        }
    }

    /// Load the budget from disk
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data;

        tracing::debug!(
            path = %self.path.display(),
            categories = data.categories.len(),
            "loaded budget"
        );
        Ok(())
    }

    /// Save the budget to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Replace the whole budget
    pub fn replace(&self, income: i64, categories: Vec<Category>) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = BudgetData { income, categories };
        Ok(())
    }

    /// Get the monthly income
    pub fn income(&self) -> Result<i64, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.income)
    }

    /// Get all categories, sorted by name
    pub fn get_all(&self) -> Result<Vec<Category>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list = data.categories.clone();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("budget.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
        assert_eq!(repo.income().unwrap(), 0);
    }

    #[test]
    fn test_get_all_sorted_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.replace(
            1000,
            vec![Category::new("food", 1), Category::new("car", 2)],
        )
        .unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["car", "food"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.replace(350000, vec![Category::new("car", 20000)])
            .unwrap();
        repo.save().unwrap();

        let repo2 = CategoryRepository::new(temp_dir.path().join("budget.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.income().unwrap(), 350000);
        assert_eq!(repo2.get_all().unwrap(), vec![Category::new("car", 20000)]);
    }
}
