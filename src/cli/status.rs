//! `status`: planned versus actual spending for one month

use clap::Args;

use crate::display::format_status_table;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Period;
use crate::reports::StatusReport;
use crate::storage::Storage;

/// Arguments for `budget status`
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Month to report (YYYY-MM); defaults to the current month
    #[arg(short, long)]
    pub period: Option<String>,
}

/// Handle `budget status`
pub fn handle_status_command(storage: &Storage, args: StatusArgs) -> LedgerResult<()> {
    let period = match args.period {
        Some(p) => Period::parse(&p).map_err(|e| LedgerError::Validation(e.to_string()))?,
        None => Period::current(),
    };

    let report = StatusReport::generate(storage, period)?;
    print!("{}", format_status_table(&report));
    Ok(())
}
