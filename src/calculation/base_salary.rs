//! Base salary calculation.
//!
//! The base salary values the smoothed weekly hours at the classification
//! coefficient and the live point value, pro-rated against the 24-hour
//! full-time teaching week.

use rust_decimal::Decimal;

use super::smoothing::contract_weekly_hours;
use crate::models::AuditStep;

/// The result of the base salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct BaseSalaryResult {
    /// The monthly base salary in euros.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the monthly base salary.
///
/// Formula: `weekly_hours × point_value × coefficient / 24`.
///
/// # Arguments
///
/// * `weekly_hours` - Smoothed weekly hours
/// * `point_value` - The live point value at the reference date
/// * `coefficient` - The pay-grid coefficient of the classification
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use paie_engine::calculation::compute_base_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Full-time at coefficient 305: 7.15 € x 305 = 2180.75 €
/// let result = compute_base_salary(
///     Decimal::from(24),
///     Decimal::from_str("7.15").unwrap(),
///     305,
///     1,
/// );
/// assert_eq!(result.amount, Decimal::from_str("2180.75").unwrap());
/// ```
pub fn compute_base_salary(
    weekly_hours: Decimal,
    point_value: Decimal,
    coefficient: u32,
    step_number: u32,
) -> BaseSalaryResult {
    let amount =
        weekly_hours * point_value * Decimal::from(coefficient) / contract_weekly_hours();

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_salary".to_string(),
        rule_name: "Base Salary".to_string(),
        article_ref: "1.7.2".to_string(),
        input: serde_json::json!({
            "weekly_hours": weekly_hours.normalize().to_string(),
            "point_value": point_value.normalize().to_string(),
            "coefficient": coefficient
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} h x {} € x coefficient {} / 24 = {} €",
            weekly_hours.normalize(),
            point_value.normalize(),
            coefficient,
            amount.normalize()
        ),
    };

    BaseSalaryResult { amount, audit_step }
}
