//! Differential (equalization) bonus calculation.
//!
//! The differential bonus tops up junior staff so that total compensation
//! is level across seniority: it starts from a ceiling of 62.03 points and
//! shrinks by the 2 points per year the seniority bonus gains, reaching
//! zero once the accrued seniority points pass the ceiling. It is valued
//! at the frozen historical point value, not the live one.

use rust_decimal::Decimal;

use super::smoothing::contract_weekly_hours;
use crate::models::AuditStep;

/// Returns the differential point ceiling of 62.03 points.
pub fn differential_points_ceiling() -> Decimal {
    Decimal::new(6203, 2)
}

/// The result of the differential bonus calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct DifferentialBonusResult {
    /// The monthly bonus amount in euros.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the monthly differential bonus.
///
/// Formula: `max(0, 62.03 − seniority_years × 2) × differential_point_value
/// × weekly_hours / 24`. The floor clamps the bonus to zero once seniority
/// reaches 31.015 years.
///
/// `differential_point_value` is the frozen historical point value (6.32 in
/// the current configuration), never the live point value.
pub fn compute_differential_bonus(
    weekly_hours: Decimal,
    differential_point_value: Decimal,
    seniority_years: u32,
    step_number: u32,
) -> DifferentialBonusResult {
    let accrued_points = Decimal::from(seniority_years) * Decimal::from(2);
    let remaining_points = (differential_points_ceiling() - accrued_points).max(Decimal::ZERO);
    let amount =
        remaining_points * differential_point_value * weekly_hours / contract_weekly_hours();

    let audit_step = AuditStep {
        step_number,
        rule_id: "differential_bonus".to_string(),
        rule_name: "Differential Bonus".to_string(),
        article_ref: "1.7.10".to_string(),
        input: serde_json::json!({
            "weekly_hours": weekly_hours.normalize().to_string(),
            "differential_point_value": differential_point_value.normalize().to_string(),
            "seniority_years": seniority_years
        }),
        output: serde_json::json!({
            "remaining_points": remaining_points.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "max(0, 62.03 - {}) = {} points x {} € x {} h / 24 = {} €",
            accrued_points.normalize(),
            remaining_points.normalize(),
            differential_point_value.normalize(),
            weekly_hours.normalize(),
            amount.normalize()
        ),
    };

    DifferentialBonusResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// DB-001: junior staff get the full ceiling
    #[test]
    fn test_zero_years_gets_full_ceiling() {
        // 24 h cancels the /24: 62.03 x 6.32 = 392.0296 €
        let result = compute_differential_bonus(Decimal::from(24), dec("6.32"), 0, 1);
        assert_eq!(result.amount, dec("392.0296"));
    }

    /// DB-002: clamps to zero past 31.015 years
    #[test]
    fn test_clamps_to_zero_at_32_years() {
        let result = compute_differential_bonus(Decimal::from(24), dec("6.32"), 32, 1);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    /// DB-003: still positive at 31 years
    #[test]
    fn test_positive_at_31_years() {
        // 62.03 - 62 = 0.03 points remain
        let result = compute_differential_bonus(Decimal::from(24), dec("6.32"), 31, 1);
        assert_eq!(result.amount, dec("0.03") * dec("6.32"));
    }

    /// DB-004: golden scenario amount
    #[test]
    fn test_golden_scenario_amount() {
        let weekly = dec("440") / dec("52");
        let result = compute_differential_bonus(weekly, dec("6.32"), 10, 1);
        assert_eq!(result.amount.round_dp(2), dec("93.65"));
    }

    /// DB-005: uses the frozen point value verbatim
    #[test]
    fn test_frozen_point_value_not_live_one() {
        let frozen = compute_differential_bonus(Decimal::from(24), dec("6.32"), 10, 1);
        let live = compute_differential_bonus(Decimal::from(24), dec("7.15"), 10, 1);
        assert_ne!(frozen.amount, live.amount);
    }

    #[test]
    fn test_ceiling_is_exactly_62_03() {
        assert_eq!(differential_points_ceiling(), dec("62.03"));
    }

    #[test]
    fn test_audit_step_records_remaining_points() {
        let result = compute_differential_bonus(Decimal::from(24), dec("6.32"), 10, 5);
        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(
            result.audit_step.output["remaining_points"].as_str().unwrap(),
            "42.03"
        );
    }

    proptest! {
        /// DB-P1: monotonically non-increasing in seniority years.
        #[test]
        fn prop_non_increasing_in_seniority(years in 0u32..60) {
            let weekly = dec("8.46");
            let a = compute_differential_bonus(weekly, dec("6.32"), years, 1).amount;
            let b = compute_differential_bonus(weekly, dec("6.32"), years + 1, 1).amount;
            prop_assert!(b <= a);
        }

        /// DB-P2: never negative.
        #[test]
        fn prop_never_negative(years in 0u32..200) {
            let amount = compute_differential_bonus(dec("8.46"), dec("6.32"), years, 1).amount;
            prop_assert!(amount >= Decimal::ZERO);
        }
    }
}
