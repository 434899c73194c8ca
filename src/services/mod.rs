//! Service layer for the budget ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation before anything is written.

pub mod category;
pub mod transaction;

pub use category::CategoryService;
pub use transaction::{CreateTransactionInput, TransactionService};
