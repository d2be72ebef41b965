//! Calculation logic for the Payroll Estimation Engine.
//!
//! This module contains all the calculation rules: annual hour smoothing
//! and FTE conversion, seniority in whole years, the seniority bonus, the
//! differential (equalization) bonus, the base salary, the effective real
//! hourly rate, and the orchestration that assembles a full payroll result.

mod base_salary;
mod differential_bonus;
mod hourly_rate;
mod payroll;
mod seniority;
mod seniority_bonus;
mod smoothing;

pub use base_salary::{BaseSalaryResult, compute_base_salary};
pub use differential_bonus::{
    DifferentialBonusResult, compute_differential_bonus, differential_points_ceiling,
};
pub use hourly_rate::{RealHourlyRateResult, compute_real_hourly_rate};
pub use payroll::compute_payroll;
pub use seniority::compute_seniority_years;
pub use seniority_bonus::{SeniorityBonusResult, compute_seniority_bonus};
pub use smoothing::{
    SmoothingResult, compute_smoothed_hours, contract_weekly_hours,
    inverse_fte_to_annual_real_hours, paid_leave_multiplier, reference_weekly_hours,
};
