//! Seniority calculation.
//!
//! This module computes whole-year seniority between a hire date and a
//! reference date, using the anniversary rule: a year counts only once the
//! hire anniversary has occurred in the reference year.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Computes whole years of seniority at the reference date.
///
/// The result is `reference.year - hire.year`, minus one when the
/// anniversary has not yet occurred in the reference year. The anniversary
/// check is a `(month, day)` tuple comparison, not a day-count subtraction;
/// the two are not numerically identical in all cases (a Feb 29 hire date
/// compares as `(2, 29)`, so a Feb 28 reference in a non-leap year defers
/// the anniversary).
///
/// # Errors
///
/// Returns `InvalidInput` when `hire_date` is after `reference_date`.
///
/// # Examples
///
/// ```
/// use paie_engine::calculation::compute_seniority_years;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
/// assert_eq!(compute_seniority_years(hire, reference).unwrap(), 4);
/// ```
pub fn compute_seniority_years(
    hire_date: NaiveDate,
    reference_date: NaiveDate,
) -> EngineResult<u32> {
    if hire_date > reference_date {
        return Err(EngineError::InvalidInput {
            field: "hire_date".to_string(),
            message: format!(
                "hire date {} is after reference date {}",
                hire_date, reference_date
            ),
        });
    }

    let mut years = reference_date.year() - hire_date.year();
    if (reference_date.month(), reference_date.day()) < (hire_date.month(), hire_date.day()) {
        years -= 1;
    }

    Ok(years as u32)
}
