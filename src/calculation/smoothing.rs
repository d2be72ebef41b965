//! Annual hour smoothing and FTE conversion.
//!
//! This module converts a teacher's raw effective annual teaching hours
//! into a smoothed pay basis that evens out the academic calendar's
//! term/vacation variance, and expresses that basis against a standard
//! full-time week.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, SmoothedHours};

/// Returns the paid-leave uplift multiplier (10%, article 5.4.2).
pub fn paid_leave_multiplier() -> Decimal {
    Decimal::new(110, 2)
}

/// Returns the general reference full-time week of 35 hours.
pub fn reference_weekly_hours() -> Decimal {
    Decimal::from(35)
}

/// Returns the contractual full-time teaching week of 24 hours.
pub fn contract_weekly_hours() -> Decimal {
    Decimal::from(24)
}

/// The result of the smoothing calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SmoothingResult {
    /// The smoothed hours record.
    pub hours: SmoothedHours,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Converts raw annual teaching hours into the smoothed pay basis.
///
/// The chain is:
/// - annual hours with leave = annual hours × 1.10
/// - monthly hours = annual hours with leave / 12
/// - weekly hours = monthly hours / (52/12)
/// - monthly FTE hours = weekly hours × (35 × 52/12) / 24
///
/// The function is total over non-negative input; a zero input yields an
/// all-zero record (the caller decides whether to show it). Negative hours
/// are rejected.
///
/// # Examples
///
/// ```
/// use paie_engine::calculation::compute_smoothed_hours;
/// use rust_decimal::Decimal;
///
/// let result = compute_smoothed_hours(Decimal::from(400), 1).unwrap();
/// assert_eq!(result.hours.annual_hours_with_leave, Decimal::new(4400, 1));
/// ```
pub fn compute_smoothed_hours(
    annual_hours_worked: Decimal,
    step_number: u32,
) -> EngineResult<SmoothingResult> {
    if annual_hours_worked < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "annual_hours_worked".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    let months = Decimal::from(12);
    let weeks = Decimal::from(52);

    let annual_hours_with_leave = annual_hours_worked * paid_leave_multiplier();
    let monthly_hours = annual_hours_with_leave / months;
    // monthly / (52/12), computed as monthly × 12 / 52
    let weekly_hours = monthly_hours * months / weeks;
    let monthly_fte_hours =
        weekly_hours * reference_weekly_hours() * weeks / months / contract_weekly_hours();

    let hours = SmoothedHours {
        annual_hours_with_leave,
        monthly_hours,
        weekly_hours,
        monthly_fte_hours,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "hour_smoothing".to_string(),
        rule_name: "Annual Hour Smoothing".to_string(),
        article_ref: "5.4.2".to_string(),
        input: serde_json::json!({
            "annual_hours_worked": annual_hours_worked.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_hours_with_leave": hours.annual_hours_with_leave.normalize().to_string(),
            "monthly_hours": hours.monthly_hours.normalize().to_string(),
            "weekly_hours": hours.weekly_hours.normalize().to_string(),
            "monthly_fte_hours": hours.monthly_fte_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} h x 1.10 leave uplift = {} h, spread over 12 months",
            annual_hours_worked.normalize(),
            annual_hours_with_leave.normalize()
        ),
    };

    Ok(SmoothingResult { hours, audit_step })
}

/// Recovers an approximate real annual hours figure from a payslip FTE value.
///
/// Applies the calibrated conversion factor (7.4805 in the current
/// configuration). This is a documented approximation, not the algebraic
/// inverse of [`compute_smoothed_hours`]: the factor is calibrated
/// independently of the forward pipeline's real/FTE monthly factor and the
/// two must never be conflated.
pub fn inverse_fte_to_annual_real_hours(monthly_fte_hours: Decimal, factor: Decimal) -> Decimal {
    monthly_fte_hours * factor
}
