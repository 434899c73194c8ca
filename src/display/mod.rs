//! Display formatting for terminal output
//!
//! Renders categories and reports as tables.

pub mod category;
pub mod report;

pub use category::format_category_list;
pub use report::{format_filter_table, format_status_table};
