//! Configuration module for the budget ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - The YAML budget document read by `create`

pub mod budget_config;
pub mod paths;

pub use budget_config::{BudgetConfig, PlannedCategory};
pub use paths::LedgerPaths;
