//! Report formatting for terminal output
//!
//! Renders the status and filter reports as tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{FilterReport, StatusReport, StatusRow, TOTAL_LABEL};

#[derive(Tabled)]
struct StatusLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Planned Monthly Expense")]
    planned: i64,
    #[tabled(rename = "Actual Expense this Month")]
    actual: i64,
    #[tabled(rename = "Balance")]
    balance: i64,
}

impl From<&StatusRow> for StatusLine {
    fn from(row: &StatusRow) -> Self {
        Self {
            category: row.category.clone(),
            planned: row.planned,
            actual: row.actual,
            balance: row.balance,
        }
    }
}

#[derive(Tabled)]
struct FilterLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: i64,
    #[tabled(rename = "Comment")]
    comment: String,
}

/// Format the status report: one row per category, then the totals row
pub fn format_status_table(report: &StatusReport) -> String {
    let lines = report
        .rows
        .iter()
        .chain(std::iter::once(&report.totals))
        .map(StatusLine::from);

    let mut table = Table::new(lines);
    table.with(Style::modern());

    let mut output = format!("Budget status for {}\n", report.period);
    output.push_str(&table.to_string());
    output.push('\n');

    let unaccounted = report.unaccounted;
    if unaccounted != 0 {
        output.push_str(&format!(
            "Note: {} of this month's spending is booked to categories outside the plan.\n",
            unaccounted
        ));
    }

    output
}

/// Format the filter matches with a totals footer
pub fn format_filter_table(report: &FilterReport) -> String {
    if report.is_empty() {
        return format!(
            "No transactions between {} and {}.\n",
            report.criteria.from, report.criteria.to
        );
    }

    let lines = report
        .matches
        .iter()
        .map(|t| FilterLine {
            id: t.id.to_string(),
            date: t.date.to_string(),
            category: t.category.clone(),
            amount: t.amount,
            comment: t.comment.clone(),
        })
        .chain(std::iter::once(FilterLine {
            id: String::new(),
            date: String::new(),
            category: TOTAL_LABEL.to_string(),
            amount: report.sum,
            comment: format!("{} transaction(s)", report.matches.len()),
        }));

    let mut table = Table::new(lines);
    table.with(Style::modern());

    let mut output = table.to_string();
    output.push('\n');
    output
}
