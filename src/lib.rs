//! Payroll Estimation Engine for part-time music teachers.
//!
//! This crate implements the pay rules of the ECLAT collective agreement
//! (IDCC 1518) as applied to part-time teachers: annualized hour smoothing,
//! full-time-equivalent conversion, seniority and its two linked bonuses,
//! and parsing of the school's timesheet reports.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod timesheet;
