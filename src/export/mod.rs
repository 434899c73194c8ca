//! Export module for the budget ledger
//!
//! - CSV: filter matches in a spreadsheet-compatible layout

pub mod csv;

pub use self::csv::{export_filter_csv, FILTER_CSV_HEADERS};
