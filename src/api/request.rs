//! Request types for the Payroll Estimation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/timesheets/parse` endpoints. The calculation operations form a
//! tagged union on the `operation` field, so dispatch is an exhaustive
//! enum match rather than string comparison.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/calculate` endpoint.
///
/// The `operation` field selects the calculation; each variant carries its
/// own typed input record.
///
/// # Example
///
/// ```
/// use paie_engine::api::CalculationRequest;
///
/// let json = r#"{ "operation": "smoothed_hours", "annual_hours_worked": "400" }"#;
/// let request: CalculationRequest = serde_json::from_str(json).unwrap();
/// assert!(matches!(request, CalculationRequest::SmoothedHours(_)));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum CalculationRequest {
    /// Smooth raw annual hours into the monthly/weekly/FTE basis.
    SmoothedHours(SmoothedHoursRequest),
    /// Full payroll estimation from annual hours and a hire date.
    Payroll(PayrollRequest),
}

/// Input record for the smoothed-hours operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothedHoursRequest {
    /// Raw effective annual teaching hours.
    pub annual_hours_worked: Decimal,
}

/// Input record for the payroll operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Raw effective annual teaching hours.
    pub annual_hours_worked: Decimal,
    /// The date the teacher joined the school.
    pub hire_date: NaiveDate,
    /// The date seniority is measured at; defaults to today when omitted.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// The pay-grid classification code (e.g., "professeur").
    pub classification_code: String,
}

/// Request body for the `/timesheets/parse` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetParseRequest {
    /// The raw report text to parse.
    pub text: String,
}
