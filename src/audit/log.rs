//! Append-only JSONL audit log

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::LedgerResult;

use super::event::{AuditRecord, LedgerEvent};

/// The audit log file of one ledger
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Stamp `event` and append it as one line
    pub fn append(&self, event: LedgerEvent) -> LedgerResult<()> {
        let record = AuditRecord::now(event);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::debug!(event = %record.event, "audit");
        Ok(())
    }

    /// Every record so far, oldest first
    #[cfg(test)]
    pub(crate) fn records(&self) -> LedgerResult<Vec<AuditRecord>> {
        use std::fs::File;
        use std::io::BufReader;

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        serde_json::Deserializer::from_reader(reader)
            .into_iter::<AuditRecord>()
            .map(|record| record.map_err(Into::into))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    fn budget(income: i64, replaced: bool) -> LedgerEvent {
        LedgerEvent::BudgetCreated {
            income,
            categories: vec![Category::new("car", 20000)],
            replaced,
        }
    }

    #[test]
    fn test_missing_log_has_no_records() {
        let temp_dir = TempDir::new().unwrap();
        let log = AuditLog::new(temp_dir.path().join("audit.log"));
        assert!(log.records().unwrap().is_empty());
    }

    #[test]
    fn test_appends_one_line_per_event() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        let log = AuditLog::new(path.clone());

        log.append(budget(1, false)).unwrap();
        log.append(budget(2, true)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 2);

        let events: Vec<_> = AuditLog::new(path)
            .records()
            .unwrap()
            .into_iter()
            .map(|r| r.event)
            .collect();
        assert_eq!(events, vec![budget(1, false), budget(2, true)]);
    }
}
