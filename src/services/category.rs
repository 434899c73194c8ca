//! Category service
//!
//! Read-only access to the planned categories: listing, exact-name lookup,
//! and the check `add` runs before recording an expense.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;
use crate::storage::LedgerStore;

/// Service for planned categories
pub struct CategoryService<'a, S: LedgerStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: LedgerStore + ?Sized> CategoryService<'a, S> {
    /// Create a new category service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All categories, sorted by name
    pub fn list(&self) -> LedgerResult<Vec<Category>> {
        let mut categories = self.store.list_categories()?;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Find a category or fail with the list of valid names
    pub fn require(&self, name: &str) -> LedgerResult<Category> {
        let categories = self.list()?;
        match categories.iter().find(|c| c.name == name) {
            Some(category) => Ok(category.clone()),
            None => Err(LedgerError::unknown_category(
                name,
                categories.into_iter().map(|c| c.name).collect(),
            )),
        }
    }
}
