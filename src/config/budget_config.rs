//! Budget configuration document
//!
//! The YAML file read by `create`: monthly income plus the planned amount for
//! every spending category.
//!
//! ```yaml
//! income: 350000
//! categories-planned:
//!   - name: car
//!     amount: 20000
//!   - name: food
//!     amount: 60000
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::Category;

/// One planned category entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCategory {
    pub name: String,
    pub amount: i64,
}

/// The budget configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BudgetConfig {
    /// Monthly income
    pub income: i64,

    /// Planned categories in the order they were written
    #[serde(default)]
    pub categories_planned: Vec<PlannedCategory>,
}

impl BudgetConfig {
    /// Load and validate the configuration at `path`
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::ConfigRead(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&contents)
    }

    /// Parse and validate a YAML document
    pub fn parse(contents: &str) -> Result<Self, LedgerError> {
        let config: BudgetConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Category names must be non-empty and unique
    pub fn validate(&self) -> Result<(), LedgerError> {
        let mut seen = HashSet::new();

        for planned in &self.categories_planned {
            Category::new(planned.name.as_str(), planned.amount)
                .validate()
                .map_err(|e| LedgerError::ConfigRead(e.to_string()))?;
            if !seen.insert(planned.name.as_str()) {
                return Err(LedgerError::ConfigRead(format!(
                    "category '{}' is planned more than once",
                    planned.name
                )));
            }
        }

        Ok(())
    }

    /// Convert the planned entries into ledger categories
    pub fn categories(&self) -> Vec<Category> {
        self.categories_planned
            .iter()
            .map(|p| Category::new(p.name.clone(), p.amount))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "
income: 350000
categories-planned:
  - name: car
    amount: 20000
  - name: food
    amount: 60000
";

    #[test]
    fn test_parse_config() {
        let config = BudgetConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.income, 350000);
        assert_eq!(config.categories_planned.len(), 2);
        assert_eq!(config.categories_planned[0].name, "car");
        assert_eq!(config.categories_planned[1].amount, 60000);
    }

    #[test]
    fn test_categories_conversion() {
        let config = BudgetConfig::parse(SAMPLE).unwrap();
        let categories = config.categories();
        assert_eq!(categories[0].name, "car");
        assert_eq!(categories[0].planned_amount, 20000);
    }

    #[test]
    fn test_malformed_config() {
        let err = BudgetConfig::parse("income: [not a number").unwrap_err();
        assert!(matches!(err, LedgerError::ConfigRead(_)));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let yaml = "
income: 1
categories-planned:
  - name: car
    amount: 1
  - name: car
    amount: 2
";
        let err = BudgetConfig::parse(yaml).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let yaml = "
income: 1
categories-planned:
  - name: '  '
    amount: 1
";
        assert!(BudgetConfig::parse(yaml).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = BudgetConfig::load(&temp_dir.path().join("config.yaml")).unwrap_err();
        assert!(matches!(err, LedgerError::ConfigRead(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = BudgetConfig::load(&path).unwrap();
        assert_eq!(config.categories().len(), 2);
    }
}
