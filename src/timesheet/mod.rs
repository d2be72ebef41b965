//! Timesheet report parsing for the Payroll Estimation Engine.
//!
//! This module extracts per-employee daily hours and period totals from
//! the school's line-oriented hours report, so declared annual hours can
//! be cross-checked against recorded ones.
//!
//! # Example
//!
//! ```
//! use paie_engine::timesheet::parse_timesheets;
//!
//! let report = "Jean Dupont\n01-09-2025 total jour : 03:30\n";
//! let records = parse_timesheets(report);
//! assert_eq!(records["Jean Dupont"].daily_entries.len(), 1);
//! ```

mod parser;

pub use parser::parse_timesheets;

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

/// Reads the timesheet text resource.
///
/// The resource is read fully into memory; the parser never holds the file
/// open. An absent or unreadable resource is a fatal configuration error
/// (unlike malformed lines inside the report, which are skipped).
pub fn read_timesheet<P: AsRef<Path>>(path: P) -> EngineResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|_| EngineError::TimesheetNotFound {
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sample_resource() {
        let text = read_timesheet("./data/releve_heures.txt").unwrap();
        assert!(text.contains("total jour"));
    }

    #[test]
    fn test_missing_resource_is_fatal() {
        let result = read_timesheet("/nonexistent/releve.txt");
        match result {
            Err(EngineError::TimesheetNotFound { path }) => {
                assert!(path.contains("releve.txt"));
            }
            _ => panic!("Expected TimesheetNotFound error"),
        }
    }
}
