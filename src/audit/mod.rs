//! Audit trail for the budget ledger
//!
//! Every command that changes the ledger appends one [`LedgerEvent`] to
//! `audit.log` in the base directory, one JSON record per line.

mod event;
mod log;

pub use event::{AuditRecord, LedgerEvent};
pub use log::AuditLog;
