//! `categories`: list the planned categories

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Handle `budget categories`
pub fn handle_categories_command(storage: &Storage) -> LedgerResult<()> {
    let categories = CategoryService::new(storage).list()?;
    let income = storage.categories.income()?;
    print!("{}", format_category_list(&categories, income));
    Ok(())
}
