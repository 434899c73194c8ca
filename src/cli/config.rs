//! `config`: show the resolved paths

use crate::config::paths::LedgerPaths;

/// Handle `budget config`
pub fn handle_config_command(paths: &LedgerPaths) {
    println!("Budget Ledger Configuration");
    println!("===========================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Config file:       {}", paths.config_file().display());
    println!("Budget file:       {}", paths.budget_file().display());
    println!("Transactions file: {}", paths.transactions_file().display());
    println!("Audit log:         {}", paths.audit_log().display());
    println!();
    println!("Initialized: {}", if paths.is_initialized() { "yes" } else { "no" });
}
