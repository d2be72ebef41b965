//! Effective hourly rate calculation.
//!
//! This module recovers real (non-smoothed) monthly hours from the monthly
//! FTE figure and derives the effective gross hourly rate. A zero real
//! hours denominator is an explicit "not computable" outcome, never an
//! Inf/NaN value passed downstream.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the hourly rate calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct RealHourlyRateResult {
    /// Real monthly hours recovered from the FTE figure.
    pub real_monthly_hours: Decimal,
    /// The effective gross hourly rate in euros.
    pub rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the effective gross hourly rate over real monthly hours.
///
/// `real_monthly_hours = monthly_fte_hours / fte_to_real_hours_factor`
/// (factor 1.36 in the current configuration — a separate calibration from
/// the 7.4805 annual inverse factor), then
/// `rate = gross_total / real_monthly_hours`.
///
/// # Errors
///
/// * `InvalidInput` when the conversion factor is not positive
/// * `NotComputable` when the recovered real monthly hours are zero
pub fn compute_real_hourly_rate(
    gross_total: Decimal,
    monthly_fte_hours: Decimal,
    fte_to_real_hours_factor: Decimal,
    step_number: u32,
) -> EngineResult<RealHourlyRateResult> {
    if fte_to_real_hours_factor <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "fte_to_real_hours_factor".to_string(),
            message: "must be positive".to_string(),
        });
    }

    let real_monthly_hours = monthly_fte_hours / fte_to_real_hours_factor;
    if real_monthly_hours.is_zero() {
        return Err(EngineError::NotComputable {
            message: "real monthly hours are zero, hourly rate is undefined".to_string(),
        });
    }

    let rate = gross_total / real_monthly_hours;

    let audit_step = AuditStep {
        step_number,
        rule_id: "real_hourly_rate".to_string(),
        rule_name: "Real Hourly Rate".to_string(),
        article_ref: "5.4.4".to_string(),
        input: serde_json::json!({
            "gross_total": gross_total.normalize().to_string(),
            "monthly_fte_hours": monthly_fte_hours.normalize().to_string(),
            "fte_to_real_hours_factor": fte_to_real_hours_factor.normalize().to_string()
        }),
        output: serde_json::json!({
            "real_monthly_hours": real_monthly_hours.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        reasoning: format!(
            "{} FTE h / {} = {} real h; {} € / {} h = {} €/h",
            monthly_fte_hours.normalize(),
            fte_to_real_hours_factor.normalize(),
            real_monthly_hours.normalize(),
            gross_total.normalize(),
            real_monthly_hours.normalize(),
            rate.normalize()
        ),
    };

    Ok(RealHourlyRateResult {
        real_monthly_hours,
        rate,
        audit_step,
    })
}
