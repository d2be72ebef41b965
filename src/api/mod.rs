//! HTTP API module for the Payroll Estimation Engine.
//!
//! This module provides the REST API endpoints for smoothing hours,
//! estimating payroll and parsing timesheet reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PayrollRequest, SmoothedHoursRequest, TimesheetParseRequest};
pub use response::ApiError;
pub use state::AppState;
