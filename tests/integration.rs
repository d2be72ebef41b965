//! Comprehensive integration tests for the Payroll Estimation Engine.
//!
//! This test suite covers the API surface end to end:
//! - Smoothed hours calculation
//! - Full payroll estimation (golden scenario)
//! - Input validation and error mapping
//! - Timesheet report parsing

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use paie_engine::api::{AppState, create_router};
use paie_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/idcc1518").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Parses a JSON string field into a Decimal rounded to 2 dp.
fn rounded(value: &Value, field: &str) -> Decimal {
    dec(value[field].as_str().unwrap()).round_dp(2)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn payroll_request(annual_hours: &str, hire_date: &str, reference_date: &str) -> Value {
    json!({
        "operation": "payroll",
        "annual_hours_worked": annual_hours,
        "hire_date": hire_date,
        "reference_date": reference_date,
        "classification_code": "professeur"
    })
}

// =============================================================================
// Smoothed hours
// =============================================================================

#[tokio::test]
async fn test_smoothed_hours_for_400_annual_hours() {
    let body = json!({ "operation": "smoothed_hours", "annual_hours_worked": "400" });
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    let hours = &result["smoothed_hours"];
    assert_eq!(rounded(hours, "annual_hours_with_leave"), dec("440.00"));
    assert_eq!(rounded(hours, "monthly_hours"), dec("36.67"));
    assert_eq!(rounded(hours, "weekly_hours"), dec("8.46"));
    assert_eq!(rounded(hours, "monthly_fte_hours"), dec("53.47"));
}

#[tokio::test]
async fn test_smoothed_hours_zero_input_is_all_zero() {
    let body = json!({ "operation": "smoothed_hours", "annual_hours_worked": "0" });
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    let hours = &result["smoothed_hours"];
    assert_eq!(rounded(hours, "monthly_hours"), Decimal::ZERO);
    assert_eq!(rounded(hours, "weekly_hours"), Decimal::ZERO);
    assert_eq!(rounded(&result, "approx_annual_real_hours"), Decimal::ZERO);
}

#[tokio::test]
async fn test_smoothed_hours_includes_inverse_fte_estimate() {
    let body = json!({ "operation": "smoothed_hours", "annual_hours_worked": "400" });
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    // 53.4722... FTE h x 7.4805
    let expected = (dec("440") * dec("35") / dec("12") / dec("24") * dec("7.4805")).round_dp(2);
    assert_eq!(rounded(&result, "approx_annual_real_hours"), expected);
}

#[tokio::test]
async fn test_smoothed_hours_negative_input_rejected() {
    let body = json!({ "operation": "smoothed_hours", "annual_hours_worked": "-10" });
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "VALIDATION_ERROR");
}

// =============================================================================
// Payroll estimation
// =============================================================================

#[tokio::test]
async fn test_payroll_golden_scenario() {
    let body = payroll_request("400", "2015-01-01", "2025-06-01");
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["seniority_years"].as_u64().unwrap(), 10);
    assert_eq!(rounded(&result, "base_salary"), dec("768.85"));
    assert_eq!(rounded(&result, "seniority_bonus"), dec("50.42"));
    assert_eq!(rounded(&result, "differential_bonus"), dec("93.65"));
    assert_eq!(rounded(&result, "gross_salary_total"), dec("912.92"));
    assert_eq!(rounded(&result, "real_monthly_hours"), dec("39.32"));
    assert_eq!(rounded(&result, "real_hourly_rate"), dec("23.22"));
    assert_eq!(
        rounded(&result["smoothed_hours"], "weekly_hours"),
        dec("8.46")
    );
}

#[tokio::test]
async fn test_payroll_zero_seniority_has_no_seniority_bonus() {
    let body = payroll_request("400", "2025-01-15", "2025-06-01");
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["seniority_years"].as_u64().unwrap(), 0);
    assert_eq!(rounded(&result, "seniority_bonus"), Decimal::ZERO);
    // Juniors still get the full differential ceiling
    assert!(rounded(&result, "differential_bonus") > Decimal::ZERO);
}

#[tokio::test]
async fn test_payroll_anniversary_boundary() {
    let day_before = payroll_request("400", "2020-06-15", "2025-06-14");
    let (_, result) = post_json(create_router_for_test(), "/calculate", day_before).await;
    assert_eq!(result["seniority_years"].as_u64().unwrap(), 4);

    let on_the_day = payroll_request("400", "2020-06-15", "2025-06-15");
    let (_, result) = post_json(create_router_for_test(), "/calculate", on_the_day).await;
    assert_eq!(result["seniority_years"].as_u64().unwrap(), 5);
}

#[tokio::test]
async fn test_payroll_uses_point_revision_at_reference_date() {
    // In 2020 the 6.32 revision applies, so base salary is lower
    let body = payroll_request("400", "2015-01-01", "2020-06-01");
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    // 440/52 h x 6.32 € x 305 / 24
    let expected = (dec("440") / dec("52") * dec("6.32") * dec("305") / dec("24")).round_dp(2);
    assert_eq!(rounded(&result, "base_salary"), expected);
}

#[tokio::test]
async fn test_payroll_audit_trace_lists_rules_in_order() {
    let body = payroll_request("400", "2015-01-01", "2025-06-01");
    let (_, result) = post_json(create_router_for_test(), "/calculate", body).await;

    let rule_ids: Vec<&str> = result["audit_trace"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        rule_ids,
        vec![
            "seniority",
            "base_salary",
            "seniority_bonus",
            "differential_bonus",
            "gross_total",
            "real_hourly_rate"
        ]
    );
}

#[tokio::test]
async fn test_payroll_zero_hours_is_not_computable() {
    let body = payroll_request("0", "2015-01-01", "2025-06-01");
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"].as_str().unwrap(), "NOT_COMPUTABLE");
}

#[tokio::test]
async fn test_payroll_hire_after_reference_rejected() {
    let body = payroll_request("400", "2026-01-01", "2025-06-01");
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_payroll_unknown_classification_rejected() {
    let body = json!({
        "operation": "payroll",
        "annual_hours_worked": "400",
        "hire_date": "2015-01-01",
        "reference_date": "2025-06-01",
        "classification_code": "directeur"
    });
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "CLASSIFICATION_NOT_FOUND");
}

#[tokio::test]
async fn test_payroll_reference_date_defaults_to_today() {
    let body = json!({
        "operation": "payroll",
        "annual_hours_worked": "400",
        "hire_date": "2015-01-01",
        "classification_code": "professeur"
    });
    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["seniority_years"].as_u64().unwrap() >= 10);
}

#[tokio::test]
async fn test_unknown_operation_rejected() {
    let body = json!({ "operation": "primes", "annual_hours_worked": "400" });
    let (status, _) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let body = json!({ "operation": "payroll", "annual_hours_worked": "400" });
    let (status, _) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Timesheet parsing
// =============================================================================

#[tokio::test]
async fn test_parse_timesheets_two_employees() {
    let text = "Jean Dupont\n\
                01-09-2025 total jour : 03:30\n\
                02-09-2025 total jour : 04:00\n\
                Total Période : 7,5\n\
                Marie Martin\n\
                01-09-2025 total jour : 02:00\n";
    let body = json!({ "text": text });
    let (status, result) = post_json(create_router_for_test(), "/timesheets/parse", body).await;

    assert_eq!(status, StatusCode::OK);
    let records = &result["records"];

    let jean = &records["Jean Dupont"];
    assert_eq!(dec(jean["annual_total"].as_str().unwrap()), dec("7.5"));
    let entries = jean["daily_entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["date"].as_str().unwrap(), "2025-09-01");
    assert_eq!(dec(entries[0]["hours"].as_str().unwrap()), dec("3.5"));
    assert_eq!(dec(entries[1]["hours"].as_str().unwrap()), dec("4"));

    let marie = &records["Marie Martin"];
    assert_eq!(dec(marie["annual_total"].as_str().unwrap()), dec("2"));
    assert_eq!(marie["daily_entries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_parse_timesheets_sample_resource() {
    let text = paie_engine::timesheet::read_timesheet("./data/releve_heures.txt").unwrap();
    let body = json!({ "text": text });
    let (status, result) = post_json(create_router_for_test(), "/timesheets/parse", body).await;

    assert_eq!(status, StatusCode::OK);
    let records = &result["records"];
    assert_eq!(records.as_object().unwrap().len(), 3);

    // Explicit period total wins for Jean
    assert_eq!(
        dec(records["Jean Dupont"]["annual_total"].as_str().unwrap()),
        dec("11")
    );
    // No explicit total for Marie: sum of entries
    assert_eq!(
        dec(records["Marie Martin"]["annual_total"].as_str().unwrap()),
        dec("4.5")
    );
    assert_eq!(
        dec(records["Paul Lefèvre"]["annual_total"].as_str().unwrap()),
        dec("4")
    );
}

#[tokio::test]
async fn test_parse_timesheets_empty_text() {
    let body = json!({ "text": "" });
    let (status, result) = post_json(create_router_for_test(), "/timesheets/parse", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["records"].as_object().unwrap().is_empty());
}
