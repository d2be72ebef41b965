//! Smoothed hours model.
//!
//! This module defines the [`SmoothedHours`] value record produced by the
//! smoothing calculation: raw annual teaching hours spread evenly over the
//! calendar year so that term/vacation variance does not show up in pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The smoothed pay basis derived from raw annual teaching hours.
///
/// All fields are fully derived from the annual hours input; the record is
/// recomputed wholesale whenever the input changes and carries no identity
/// of its own.
///
/// # Example
///
/// ```
/// use paie_engine::models::SmoothedHours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = SmoothedHours {
///     annual_hours_with_leave: Decimal::from_str("440").unwrap(),
///     monthly_hours: Decimal::from_str("36.67").unwrap(),
///     weekly_hours: Decimal::from_str("8.46").unwrap(),
///     monthly_fte_hours: Decimal::from_str("53.47").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmoothedHours {
    /// Annual hours including the 10% paid-leave uplift.
    pub annual_hours_with_leave: Decimal,
    /// Smoothed hours per month (annual with leave / 12).
    pub monthly_hours: Decimal,
    /// Smoothed hours per week (monthly / (52/12)).
    pub weekly_hours: Decimal,
    /// Monthly full-time-equivalent hours, rescaled against the 35h
    /// reference week and the 24h contractual full-time teaching week.
    pub monthly_fte_hours: Decimal,
}

impl SmoothedHours {
    /// Returns an all-zero record, the result for a zero hours input.
    pub fn zero() -> Self {
        Self {
            annual_hours_with_leave: Decimal::ZERO,
            monthly_hours: Decimal::ZERO,
            weekly_hours: Decimal::ZERO,
            monthly_fte_hours: Decimal::ZERO,
        }
    }
}
