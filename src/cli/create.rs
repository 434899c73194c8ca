//! `create`: (re)initialize the ledger from a budget configuration

use std::path::PathBuf;

use clap::Args;

use crate::config::budget_config::BudgetConfig;
use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::storage::initialize_ledger;

/// Arguments for `budget create`
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Budget configuration file (YAML); defaults to config.yaml in the base directory
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Handle `budget create`
pub fn handle_create_command(paths: &LedgerPaths, args: CreateArgs) -> LedgerResult<()> {
    let config_path = args.config.unwrap_or_else(|| paths.config_file());
    let config = BudgetConfig::load(&config_path)?;

    let replacing = paths.is_initialized();
    initialize_ledger(paths, &config)?;

    if replacing {
        println!("Replaced the existing budget at: {}", paths.data_dir().display());
    } else {
        println!("Created budget at: {}", paths.data_dir().display());
    }
    println!("  Income: {}", config.income);
    println!("  Categories: {}", config.categories_planned.len());
    println!();
    println!("Run 'budget add --category NAME --amount N' to record an expense.");

    Ok(())
}
