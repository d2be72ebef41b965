//! HTTP request handlers for the Payroll Estimation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_payroll, compute_smoothed_hours, inverse_fte_to_annual_real_hours,
};
use crate::models::{SmoothedHours, TimesheetRecord};
use crate::timesheet::parse_timesheets;

use super::request::{CalculationRequest, PayrollRequest, TimesheetParseRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/timesheets/parse", post(parse_timesheets_handler))
        .with_state(state)
}

/// Response body for the smoothed-hours operation.
#[derive(Debug, Clone, Serialize)]
struct SmoothedHoursResponse {
    /// The smoothed hours record.
    smoothed_hours: SmoothedHours,
    /// Approximate real annual hours recovered from the FTE figure.
    approx_annual_real_hours: rust_decimal::Decimal,
}

/// Response body for the timesheet parse operation.
#[derive(Debug, Clone, Serialize)]
struct TimesheetParseResponse {
    /// Parsed records keyed by employee name.
    records: std::collections::HashMap<String, TimesheetRecord>,
}

/// Handler for the POST /calculate endpoint.
///
/// Accepts a tagged calculation request and dispatches on its operation.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match request {
        CalculationRequest::SmoothedHours(req) => {
            match compute_smoothed_hours(req.annual_hours_worked, 1) {
                Ok(result) => {
                    let approx_annual_real_hours = inverse_fte_to_annual_real_hours(
                        result.hours.monthly_fte_hours,
                        state.config().conversion().fte_to_annual_real_hours_factor,
                    );
                    info!(
                        correlation_id = %correlation_id,
                        annual_hours = %req.annual_hours_worked,
                        "Smoothing completed successfully"
                    );
                    (
                        StatusCode::OK,
                        [(header::CONTENT_TYPE, "application/json")],
                        Json(SmoothedHoursResponse {
                            smoothed_hours: result.hours,
                            approx_annual_real_hours,
                        }),
                    )
                        .into_response()
                }
                Err(err) => engine_error_response(correlation_id, err),
            }
        }
        CalculationRequest::Payroll(req) => payroll_response(correlation_id, &state, req),
    }
}

/// Runs the payroll pipeline for one request.
fn payroll_response(
    correlation_id: Uuid,
    state: &AppState,
    request: PayrollRequest,
) -> axum::response::Response {
    let reference_date = request
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let params = match state
        .config()
        .pay_parameters(&request.classification_code, reference_date)
    {
        Ok(params) => params,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                classification = %request.classification_code,
                "Pay parameter lookup failed"
            );
            return engine_error_response(correlation_id, err);
        }
    };

    let result = compute_smoothed_hours(request.annual_hours_worked, 1).and_then(|smoothing| {
        compute_payroll(
            &smoothing.hours,
            request.hire_date,
            reference_date,
            &params,
            state.config().conversion(),
        )
    });

    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                classification = %request.classification_code,
                seniority_years = result.seniority_years,
                gross_salary_total = %result.gross_salary_total,
                duration_us = result.audit_trace.duration_us,
                "Payroll estimation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /timesheets/parse endpoint.
async fn parse_timesheets_handler(
    payload: Result<Json<TimesheetParseRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet parse request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let records = parse_timesheets(&request.text);
    info!(
        correlation_id = %correlation_id,
        employee_count = records.len(),
        "Timesheet parse completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(TimesheetParseResponse { records }),
    )
        .into_response()
}

/// Maps an engine error to its HTTP response, logging it first.
fn engine_error_response(
    correlation_id: Uuid,
    err: crate::error::EngineError,
) -> axum::response::Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Maps a JSON extraction rejection to a 400 response.
fn json_rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
