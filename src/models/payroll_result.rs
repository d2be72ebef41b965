//! Payroll result models for the Payroll Estimation Engine.
//!
//! This module contains the [`PayrollResult`] type and the audit structures
//! that capture every rule applied while producing it. The audit trace is
//! what a payslip renderer or PDF export reads to explain the amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SmoothedHours;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the agreement article for this rule.
    pub article_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a payroll computation.
///
/// Records every rule applied, in order, for transparency towards the
/// employee reading the resulting payslip estimate.
///
/// # Example
///
/// ```
/// use paie_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 42,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll estimation.
///
/// Fully derived from the inputs; there is no independent mutation. A new
/// record is computed wholesale whenever any input changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The smoothed hours basis the salary was computed from.
    pub smoothed_hours: SmoothedHours,
    /// Whole years of seniority at the reference date.
    pub seniority_years: u32,
    /// Seniority bonus in euros per month.
    pub seniority_bonus: Decimal,
    /// Differential (equalization) bonus in euros per month.
    pub differential_bonus: Decimal,
    /// Base salary in euros per month.
    pub base_salary: Decimal,
    /// Gross monthly salary: base salary plus both bonuses.
    pub gross_salary_total: Decimal,
    /// Real (non-smoothed) monthly hours recovered from the FTE figure.
    pub real_monthly_hours: Decimal,
    /// Effective gross hourly rate over real monthly hours.
    pub real_hourly_rate: Decimal,
    /// The audit trace of every rule applied.
    pub audit_trace: AuditTrace,
}
