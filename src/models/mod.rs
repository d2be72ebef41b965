//! Core data models for the Payroll Estimation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod payroll_result;
mod smoothed_hours;
mod timesheet;

pub use payroll_result::{AuditStep, AuditTrace, PayrollResult};
pub use smoothed_hours::SmoothedHours;
pub use timesheet::{DailyEntry, TimesheetRecord};
