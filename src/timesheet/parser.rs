//! Single-pass parser for the hours report.
//!
//! The report groups lines into blocks, one per employee: a header line
//! with the employee's display name, then daily-entry lines
//! (`DD-MM-YYYY ... total jour : HH:MM`) and optionally an explicit
//! `Total Période` line. Malformed lines are skipped with a warning so one
//! bad line never loses the rest of the report.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{DailyEntry, TimesheetRecord};

/// A daily-entry line: a `DD-MM-YYYY` date and an `HH:MM` day total.
static DAY_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2}-\d{2}-\d{4}).*total jour\s*:\s*(\d{1,2}):(\d{2})")
        .expect("day entry pattern is valid")
});

/// The first numeric token on a `Total Période` line, comma or dot decimal.
static PERIOD_TOTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)").expect("period total pattern is valid"));

/// An employee block being accumulated during the pass.
struct OpenBlock {
    name: String,
    entries: Vec<DailyEntry>,
    explicit_total: Option<Decimal>,
}

impl OpenBlock {
    fn finalize(self) -> TimesheetRecord {
        let annual_total = self
            .explicit_total
            .unwrap_or_else(|| self.entries.iter().map(|e| e.hours).sum());
        TimesheetRecord {
            employee_name: self.name,
            daily_entries: self.entries,
            annual_total,
        }
    }
}

/// Parses the hours report into per-employee records.
///
/// Grammar, applied line by line in a single pass:
/// - blank lines are skipped;
/// - a daily-entry line appends `(date, hours + minutes/60)` to the open
///   employee block;
/// - a line starting with `Total Période` sets the block's annual total,
///   overriding the sum of its daily entries;
/// - any other non-blank line not starting with `Total` opens a new block,
///   finalizing the previous one (explicit total wins, otherwise the sum
///   of daily entries);
/// - end of input finalizes the last block the same way.
///
/// Daily entries before any employee header, unparseable dates or `HH:MM`
/// tokens (minutes over 59), and `Total Période` lines without a numeric
/// amount are skipped with a warning. Duplicate employee names keep the
/// last block only.
pub fn parse_timesheets(raw_text: &str) -> HashMap<String, TimesheetRecord> {
    let mut records: HashMap<String, TimesheetRecord> = HashMap::new();
    let mut open: Option<OpenBlock> = None;

    for line in raw_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(captures) = DAY_ENTRY_RE.captures(trimmed) {
            let Some(block) = open.as_mut() else {
                warn!(line = %trimmed, "daily entry before any employee header, skipping");
                continue;
            };
            match parse_day_entry(&captures) {
                Some(entry) => block.entries.push(entry),
                None => warn!(line = %trimmed, "unparseable daily entry, skipping"),
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("Total Période") {
            let Some(block) = open.as_mut() else {
                warn!(line = %trimmed, "period total before any employee header, skipping");
                continue;
            };
            match parse_period_total(rest) {
                Some(total) => block.explicit_total = Some(total),
                None => warn!(line = %trimmed, "period total without numeric amount, skipping"),
            }
            continue;
        }

        if trimmed.starts_with("Total") {
            continue;
        }

        // New employee header
        if let Some(previous) = open.take() {
            let record = previous.finalize();
            records.insert(record.employee_name.clone(), record);
        }
        open = Some(OpenBlock {
            name: trimmed.to_string(),
            entries: Vec::new(),
            explicit_total: None,
        });
    }

    if let Some(last) = open.take() {
        let record = last.finalize();
        records.insert(record.employee_name.clone(), record);
    }

    records
}

/// Converts a matched daily-entry line into an entry, if its tokens parse.
fn parse_day_entry(captures: &regex::Captures<'_>) -> Option<DailyEntry> {
    let date = NaiveDate::parse_from_str(&captures[1], "%d-%m-%Y").ok()?;
    let hours: u32 = captures[2].parse().ok()?;
    let minutes: u32 = captures[3].parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    let decimal_hours = Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(60);
    Some(DailyEntry {
        date,
        hours: decimal_hours,
    })
}

/// Extracts the first numeric token after the `Total Période` prefix,
/// normalizing a comma decimal separator.
fn parse_period_total(rest: &str) -> Option<Decimal> {
    let token = PERIOD_TOTAL_RE.captures(rest)?;
    token[1].replace(',', ".").parse().ok()
}
