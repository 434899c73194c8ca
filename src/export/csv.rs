//! CSV export of filter results

use std::io::Write;

use crate::error::LedgerResult;
use crate::reports::FilterReport;

/// Column headers of the filter export
pub const FILTER_CSV_HEADERS: [&str; 5] = ["id", "date", "category", "amount", "comment"];

/// Write the matches of a filter report as CSV, one row per transaction
pub fn export_filter_csv<W: Write>(report: &FilterReport, writer: W) -> LedgerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(FILTER_CSV_HEADERS)?;

    for txn in &report.matches {
        csv_writer.write_record([
            txn.id.to_string(),
            txn.date.to_string(),
            txn.category.clone(),
            txn.amount.to_string(),
            txn.comment.clone(),
        ])?;
    }

    csv_writer.flush()?;
    tracing::debug!(rows = report.matches.len(), "exported filter matches");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, Transaction, TransactionId};
    use crate::reports::{filter_transactions, FilterCriteria};
    use chrono::NaiveDate;

    fn txn(id: u64, day: u32, amount: i64, comment: &str) -> Transaction {
        Transaction::from_new(
            TransactionId::from_raw(id),
            NewTransaction::new(NaiveDate::from_ymd_opt(2024, 6, day).unwrap(), "car", amount)
                .with_comment(comment),
        )
    }

    #[test]
    fn test_export_filter_csv() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let report = filter_transactions(
            vec![txn(2, 9, 250, "parking"), txn(1, 5, 1500, "fuel, diesel")],
            FilterCriteria::month_to_date(today),
        )
        .unwrap();

        let mut buffer = Vec::new();
        export_filter_csv(&report, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "id,date,category,amount,comment");
        assert_eq!(lines[1], "1,2024-06-05,car,1500,\"fuel, diesel\"");
        assert_eq!(lines[2], "2,2024-06-09,car,250,parking");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_empty_report_writes_headers() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let report =
            filter_transactions(Vec::new(), FilterCriteria::month_to_date(today)).unwrap();

        let mut buffer = Vec::new();
        export_filter_csv(&report, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "id,date,category,amount,comment\n");
    }
}
