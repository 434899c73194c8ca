//! `filter`: select transactions by date, category, and amount

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::display::format_filter_table;
use crate::error::LedgerResult;
use crate::export::export_filter_csv;
use crate::models::parse_date;
use crate::reports::filter::{DEFAULT_MAX_AMOUNT, DEFAULT_MIN_AMOUNT};
use crate::reports::{FilterCriteria, FilterReport};
use crate::storage::Storage;

/// Arguments for `budget filter`
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// First date to include (YYYY-MM-DD); defaults to the first of this month
    #[arg(long)]
    pub from: Option<String>,

    /// Last date to include (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub to: Option<String>,

    /// Only include this category (repeatable); all categories when omitted
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Smallest amount to include
    #[arg(long, default_value_t = DEFAULT_MIN_AMOUNT, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest amount to include
    #[arg(long, default_value_t = DEFAULT_MAX_AMOUNT, allow_negative_numbers = true)]
    pub max: i64,

    /// Write the matches to this CSV file instead of printing a table
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl FilterArgs {
    /// Turn the arguments into criteria, filling the defaults relative to `today`
    fn criteria(&self, today: chrono::NaiveDate) -> LedgerResult<FilterCriteria> {
        let mut criteria =
            FilterCriteria::month_to_date(today).with_categories(self.categories.iter().cloned());

        if let Some(from) = &self.from {
            criteria.from = parse_date(from)?;
        }
        if let Some(to) = &self.to {
            criteria.to = parse_date(to)?;
        }
        criteria.min_amount = self.min;
        criteria.max_amount = self.max;

        Ok(criteria)
    }
}

/// Handle `budget filter`
pub fn handle_filter_command(storage: &Storage, args: FilterArgs) -> LedgerResult<()> {
    let criteria = args.criteria(super::today())?;
    let report = FilterReport::generate(storage, criteria)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            export_filter_csv(&report, BufWriter::new(file))?;
            println!(
                "Exported {} transaction(s) (sum {}) to {}",
                report.matches.len(),
                report.sum,
                path.display()
            );
        }
        None => print!("{}", format_filter_table(&report)),
    }

    Ok(())
}
