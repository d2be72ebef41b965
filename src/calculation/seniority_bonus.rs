//! Seniority bonus calculation.
//!
//! The bonus accrues 2 index points per full year of service, valued at
//! the live point value and pro-rated against the 24-hour full-time
//! teaching week. Year 0 contributes nothing, which is how the agreement's
//! "starts in year N+1" wording falls out of the formula.

use rust_decimal::Decimal;

use super::smoothing::contract_weekly_hours;
use crate::models::AuditStep;

/// Points accrued per full year of seniority.
fn points_per_year() -> Decimal {
    Decimal::from(2)
}

/// The result of the seniority bonus calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SeniorityBonusResult {
    /// The monthly bonus amount in euros.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the monthly seniority bonus.
///
/// Formula: `weekly_hours × point_value × (seniority_years × 2) / 24`.
///
/// # Arguments
///
/// * `weekly_hours` - Smoothed weekly hours
/// * `point_value` - The live point value at the reference date
/// * `seniority_years` - Whole years of seniority
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use paie_engine::calculation::compute_seniority_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = compute_seniority_bonus(
///     Decimal::from(24),
///     Decimal::from_str("7.15").unwrap(),
///     0,
///     1,
/// );
/// assert_eq!(result.amount, Decimal::ZERO);
/// ```
pub fn compute_seniority_bonus(
    weekly_hours: Decimal,
    point_value: Decimal,
    seniority_years: u32,
    step_number: u32,
) -> SeniorityBonusResult {
    let points = Decimal::from(seniority_years) * points_per_year();
    let amount = weekly_hours * point_value * points / contract_weekly_hours();

    let audit_step = AuditStep {
        step_number,
        rule_id: "seniority_bonus".to_string(),
        rule_name: "Seniority Bonus".to_string(),
        article_ref: "1.7.7".to_string(),
        input: serde_json::json!({
            "weekly_hours": weekly_hours.normalize().to_string(),
            "point_value": point_value.normalize().to_string(),
            "seniority_years": seniority_years
        }),
        output: serde_json::json!({
            "points": points.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} years x 2 points = {} points; {} h x {} € x {} / 24 = {} €",
            seniority_years,
            points.normalize(),
            weekly_hours.normalize(),
            point_value.normalize(),
            points.normalize(),
            amount.normalize()
        ),
    };

    SeniorityBonusResult { amount, audit_step }
}
