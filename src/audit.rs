//! Append-only audit log.
//!
//! One line per lifecycle event: `[<UTC timestamp>] <message>`. The file is
//! opened per append; the run is single-threaded so no locking is needed.
//! No rotation, no structured format.

use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Audit log file name inside the output directory.
pub const AUDIT_FILE: &str = "audit_log.txt";

/// Handle to the audit log file.
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(outdir: &Path) -> Self {
        Self {
            path: outdir.join(AUDIT_FILE),
        }
    }

    /// Append one timestamped line.
    pub fn log(&self, msg: &str) -> Result<()> {
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[{ts}] {msg}")?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_appends_timestamped_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let audit = AuditLog::new(dir.path());

        audit.log("first event").expect("log");
        audit.log("second event").expect("log");

        let contents = std::fs::read_to_string(audit.path()).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("first event"));
        assert!(lines[1].contains("] second event"));
    }

    #[test]
    fn test_log_creates_file_on_first_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let audit = AuditLog::new(dir.path());
        assert!(!audit.path().exists());
        audit.log("created").expect("log");
        assert!(audit.path().exists());
    }
}
