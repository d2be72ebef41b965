//! Payroll orchestration.
//!
//! This module chains the individual rules into a complete payroll
//! estimation: seniority, base salary, both bonuses, the gross total and
//! the effective hourly rate, with an audit step recorded per rule.

use std::time::Instant;

use chrono::NaiveDate;

use crate::config::{ConversionFactors, PayParameters};
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, PayrollResult, SmoothedHours};

use super::base_salary::compute_base_salary;
use super::differential_bonus::compute_differential_bonus;
use super::hourly_rate::compute_real_hourly_rate;
use super::seniority::compute_seniority_years;
use super::seniority_bonus::compute_seniority_bonus;

/// Computes a complete payroll estimation from a smoothed hours basis.
///
/// The caller produces the [`SmoothedHours`] record first (see
/// [`compute_smoothed_hours`](super::compute_smoothed_hours)); this
/// function consumes its weekly and monthly FTE figures, derives seniority
/// from the hire and reference dates, and assembles the full result record
/// with its audit trace.
///
/// # Errors
///
/// * `InvalidInput` when the hire date is after the reference date
/// * `NotComputable` when the real monthly hours denominator is zero
pub fn compute_payroll(
    smoothed: &SmoothedHours,
    hire_date: NaiveDate,
    reference_date: NaiveDate,
    params: &PayParameters,
    factors: &ConversionFactors,
) -> EngineResult<PayrollResult> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let seniority_years = compute_seniority_years(hire_date, reference_date)?;
    steps.push(AuditStep {
        step_number,
        rule_id: "seniority".to_string(),
        rule_name: "Seniority".to_string(),
        article_ref: "1.7.7".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "reference_date": reference_date.to_string()
        }),
        output: serde_json::json!({ "seniority_years": seniority_years }),
        reasoning: format!(
            "Whole years between {} and {}, anniversary rule: {}",
            hire_date, reference_date, seniority_years
        ),
    });
    step_number += 1;

    let base = compute_base_salary(
        smoothed.weekly_hours,
        params.point_value,
        params.coefficient,
        step_number,
    );
    steps.push(base.audit_step);
    step_number += 1;

    let seniority_bonus = compute_seniority_bonus(
        smoothed.weekly_hours,
        params.point_value,
        seniority_years,
        step_number,
    );
    steps.push(seniority_bonus.audit_step);
    step_number += 1;

    let differential_bonus = compute_differential_bonus(
        smoothed.weekly_hours,
        params.differential_point_value,
        seniority_years,
        step_number,
    );
    steps.push(differential_bonus.audit_step);
    step_number += 1;

    let gross_salary_total = base.amount + seniority_bonus.amount + differential_bonus.amount;
    steps.push(AuditStep {
        step_number,
        rule_id: "gross_total".to_string(),
        rule_name: "Gross Salary Total".to_string(),
        article_ref: "1.7.2".to_string(),
        input: serde_json::json!({
            "base_salary": base.amount.normalize().to_string(),
            "seniority_bonus": seniority_bonus.amount.normalize().to_string(),
            "differential_bonus": differential_bonus.amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_salary_total": gross_salary_total.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} + {} = {} €",
            base.amount.normalize(),
            seniority_bonus.amount.normalize(),
            differential_bonus.amount.normalize(),
            gross_salary_total.normalize()
        ),
    });
    step_number += 1;

    let rate = compute_real_hourly_rate(
        gross_salary_total,
        smoothed.monthly_fte_hours,
        factors.fte_to_real_hours_factor,
        step_number,
    )?;
    steps.push(rate.audit_step);

    Ok(PayrollResult {
        smoothed_hours: smoothed.clone(),
        seniority_years,
        seniority_bonus: seniority_bonus.amount,
        differential_bonus: differential_bonus.amount,
        base_salary: base.amount,
        gross_salary_total,
        real_monthly_hours: rate.real_monthly_hours,
        real_hourly_rate: rate.rate,
        audit_trace: AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}
