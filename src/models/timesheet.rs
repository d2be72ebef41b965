//! Timesheet models.
//!
//! This module defines the per-employee records extracted from the school's
//! hours report by the timesheet parser.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day's recorded hours for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The date the hours were worked.
    pub date: NaiveDate,
    /// Hours worked that day, as decimal hours (minutes / 60).
    pub hours: Decimal,
}

/// One employee's extracted timesheet data.
///
/// `daily_entries` keeps document order; the parser never re-sorts. The
/// annual total comes from an explicit "Total Période" line when the report
/// carries one, otherwise it is the sum of the daily entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetRecord {
    /// The employee's display name as it appears in the report.
    pub employee_name: String,
    /// Per-day hours, in document order.
    pub daily_entries: Vec<DailyEntry>,
    /// Total hours for the period, in decimal hours.
    pub annual_total: Decimal,
}
