//! budget-ledger - a personal monthly budgeting ledger for the terminal
//!
//! Stores planned spending categories and a monthly income, records expenses
//! against those categories, and reports planned versus actual spending.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Budget configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, transactions, periods)
//! - `storage`: JSON file storage layer and the `LedgerStore` seam
//! - `services`: Validation before anything is written
//! - `reports`: Monthly status and transaction filtering
//! - `display`: Table rendering
//! - `export`: CSV export
//! - `audit`: Audit logging system
//! - `logging`: Diagnostic tracing setup
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_ledger::config::paths::LedgerPaths;
//! use budget_ledger::models::Period;
//! use budget_ledger::reports::StatusReport;
//! use budget_ledger::storage::Storage;
//!
//! let storage = Storage::open(LedgerPaths::new()?)?;
//! let report = StatusReport::generate(&storage, Period::current())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
