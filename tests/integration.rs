//! Comprehensive integration tests for the Recruiter Margin Calculator.
//!
//! This test suite covers:
//! - Stipend scaling against the $20/hour taxable floor
//! - Full-stipend packages
//! - Unknown destinations and zero stipends
//! - Bonus and travel spread, annualisation
//! - Form schema, destinations listing, export
//! - Error cases
//! - Property tests for idempotence and the weekly/annual invariants

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use recruiter_margin_calc::api::{AppState, create_router};
use recruiter_margin_calc::calculation::{calculate, compute, round2};
use recruiter_margin_calc::config::{RateTable, RateTableLoader};
use recruiter_margin_calc::models::{CalculationInput, PerDiemRate};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let rates = RateTableLoader::load("./config/gsa_rates.yaml").expect("Failed to load config");
    create_router(AppState::new(rates))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

fn assert_money(result: &Value, field: &str, expected: &str) {
    let actual = result["result"][field].as_str().unwrap();
    assert_eq!(
        decimal(actual).normalize(),
        decimal(expected).normalize(),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// Stipend Scaling
// =============================================================================

/// Dallas defaults: $78 bill, 27% margin, 35h, 46 weeks
#[tokio::test]
async fn test_dallas_defaults_scale_stipends() {
    let (status, body) = post(create_router_for_test(), "/calculate", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&body, "gross_weekly", "1992.90");
    assert_money(&body, "adjusted_housing", "878.01");
    assert_money(&body, "adjusted_meals", "414.89");
    assert_money(&body, "adjusted_taxable_hourly", "20.00");
    assert_money(&body, "taxable_weekly", "700.00");
    assert_money(&body, "total_weekly", "1992.90");
    assert_money(&body, "bonus_travel_weekly", "0");
    assert_money(&body, "weekly_total_with_bonus", "1992.90");
    assert_money(&body, "annual_income", "91673.40");
    assert_eq!(body["result"]["stipend_was_scaled"], json!(true));
    assert_eq!(
        body["report"]["advisory"],
        json!("GSA stipends were scaled down to ensure minimum taxable hourly of $20")
    );
}

#[tokio::test]
async fn test_los_angeles_generous_rate_pays_full_stipends() {
    let request = json!({
        "destination": "Los Angeles, CA",
        "client_hourly_rate": "115",
        "margin_fraction": "0.25",
        "hours_per_week": "36",
        "weeks_per_year": "48"
    });

    let (status, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    // 115 x 0.75 x 36 = 3105; 3105 - 1560 = 1545 >= 720
    assert_money(&body, "gross_weekly", "3105");
    assert_money(&body, "adjusted_housing", "1050");
    assert_money(&body, "adjusted_meals", "510");
    // 1545 / 36 = 42.9166.. -> 42.92
    assert_money(&body, "adjusted_taxable_hourly", "42.92");
    assert_money(&body, "taxable_weekly", "1545.12");
    assert_money(&body, "total_weekly", "3105.12");
    assert_money(&body, "annual_income", "149045.76");
    assert_eq!(body["result"]["stipend_was_scaled"], json!(false));
    assert!(body["report"].get("advisory").is_none());
}

#[tokio::test]
async fn test_chicago_partial_scaling() {
    let request = json!({
        "destination": "Chicago, IL",
        "client_hourly_rate": "70",
        "margin_fraction": "0.30",
        "hours_per_week": "36"
    });

    let (status, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    // 70 x 0.7 x 36 = 1764; floor 720; scale = 1044 / 1460
    assert_money(&body, "gross_weekly", "1764");
    assert_money(&body, "adjusted_housing", "700.77");
    assert_money(&body, "adjusted_meals", "343.23");
    assert_money(&body, "adjusted_taxable_hourly", "20");
    assert_money(&body, "total_weekly", "1764");
    assert_eq!(body["result"]["stipend_was_scaled"], json!(true));
}

#[tokio::test]
async fn test_budget_below_floor_removes_stipends_and_warns() {
    let request = json!({
        "client_hourly_rate": "25",
        "margin_fraction": "0.30"
    });

    let (status, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    // 25 x 0.7 x 35 = 612.5 < 700
    assert_money(&body, "adjusted_housing", "0");
    assert_money(&body, "adjusted_meals", "0");
    assert_money(&body, "adjusted_taxable_hourly", "17.50");
    let warnings = body["result"]["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings[0]["code"], json!("TAXABLE_FLOOR_UNREACHABLE"));
}

// =============================================================================
// Unknown Destination
// =============================================================================

#[tokio::test]
async fn test_unknown_destination_uses_zero_stipends() {
    let request = json!({ "destination": "Boise, ID" });

    let (status, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["destination_known"], json!(false));
    assert_money(&body, "adjusted_housing", "0");
    assert_money(&body, "adjusted_meals", "0");
    assert_money(&body, "adjusted_taxable_hourly", "56.94");
    assert_money(&body, "total_weekly", "1992.90");

    let warnings = body["result"]["audit_trace"]["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w["code"] == json!("UNKNOWN_DESTINATION")));
}

#[test]
fn test_zero_stipend_result_is_defined() {
    let input = CalculationInput {
        destination: "Nowhere".to_string(),
        client_hourly_rate: decimal("15"),
        ..Default::default()
    };

    let result = calculate(&input, &RateTable::builtin()).unwrap();

    assert!(result.stipend_was_scaled);
    assert_eq!(result.adjusted_housing, Decimal::ZERO);
    assert_eq!(result.adjusted_meals, Decimal::ZERO);
    // 15 x 0.73 = 10.95
    assert_eq!(result.adjusted_taxable_hourly, decimal("10.95"));
}

// =============================================================================
// Bonus and Travel
// =============================================================================

#[tokio::test]
async fn test_bonus_and_travel_spread_exactly_110() {
    let request = json!({
        "bonus_total": 4600,
        "travel_total": 460,
        "weeks_per_year": 46
    });

    let (status, body) = post(create_router_for_test(), "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&body, "bonus_travel_weekly", "110.00");
    assert_money(&body, "weekly_total_with_bonus", "2102.90");
    assert_money(&body, "annual_income", "96733.40");

    let line = body["report"]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["label"] == json!("Bonus + Travel Spread Weekly"))
        .unwrap();
    assert_eq!(line["value"], json!("$110.00"));
}

// =============================================================================
// Form, Destinations, Export
// =============================================================================

#[tokio::test]
async fn test_form_lists_destinations_and_defaults() {
    let (status, body) = get(create_router_for_test(), "/form").await;

    assert_eq!(status, StatusCode::OK);
    let fields = body["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 10);

    let destination = &fields[0];
    assert_eq!(destination["kind"], json!("select"));
    assert_eq!(destination["default"], json!("Dallas, TX"));
    assert_eq!(destination["options"].as_array().unwrap().len(), 4);

    let housing = fields
        .iter()
        .find(|f| f["name"] == json!("housing_per_week"))
        .unwrap();
    assert_eq!(housing["read_only"], json!(true));
    assert_eq!(housing["default"], json!("910"));
}

#[tokio::test]
async fn test_destinations_listing_is_sorted() {
    let (status, body) = get(create_router_for_test(), "/destinations").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Chicago, IL", "Dallas, TX", "Los Angeles, CA", "New York, NY"]
    );
}

#[tokio::test]
async fn test_single_destination_lookup() {
    let (status, body) = get(create_router_for_test(), "/destinations/Chicago,%20IL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("Chicago, IL"));
    assert_eq!(body["housing_per_week"], json!("980"));
    assert_eq!(body["meals_per_week"], json!("480"));
}

#[tokio::test]
async fn test_export_renders_print_ready_document() {
    let request = json!({ "facility": "Mercy General" });

    let (status, body) = post(create_router_for_test(), "/export", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], json!("Recruiter_Margin_Calc.pdf"));
    assert_eq!(body["margin_inches"], json!("0.5"));
    assert_eq!(body["render_scale"], json!(2));

    let document = body["document"].as_str().unwrap();
    assert!(document.contains("School: <strong>Mercy General</strong>"));
    assert!(document.contains("Total Weekly Comp (With Bonus): <strong>$1992.90</strong>"));
    assert!(document.contains("GSA stipends were scaled down"));
}

#[tokio::test]
async fn test_export_with_invalid_input_fails_before_rendering() {
    let request = json!({ "hours_per_week": "0" });

    let (status, body) = post(create_router_for_test(), "/export", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("INVALID_INPUT"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_margin_of_one_is_rejected() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        json!({ "margin_fraction": "1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("INVALID_INPUT"));
    assert_eq!(body["field"], json!("margin_fraction"));
}

#[tokio::test]
async fn test_negative_bonus_is_rejected() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        json!({ "bonus_total": "-500" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("bonus_total"));
}

#[tokio::test]
async fn test_unparsable_field_is_rejected() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        json!({ "client_hourly_rate": "NaN-ish" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("VALIDATION_ERROR"));
}

// =============================================================================
// Properties
// =============================================================================

fn cents(max: i64) -> impl Strategy<Value = Decimal> {
    (0..=max).prop_map(|c| Decimal::new(c, 2))
}

fn valid_input() -> impl Strategy<Value = (CalculationInput, PerDiemRate)> {
    (
        (1i64..=30_000).prop_map(|c| Decimal::new(c, 2)), // bill rate $0.01..$300
        (0i64..=95).prop_map(|m| Decimal::new(m, 2)),     // margin 0..0.95
        (1i64..=800).prop_map(|h| Decimal::new(h, 1)),    // hours 0.1..80
        (1i64..=52).prop_map(Decimal::from),              // weeks 1..52
        cents(2_000_000),
        cents(500_000),
        cents(300_000),
        cents(150_000),
    )
        .prop_map(|(rate, margin, hours, weeks, bonus, travel, housing, meals)| {
            (
                CalculationInput {
                    destination: "Anywhere".to_string(),
                    facility: None,
                    client_hourly_rate: rate,
                    margin_fraction: margin,
                    hours_per_week: hours,
                    weeks_per_year: weeks,
                    bonus_total: bonus,
                    travel_total: travel,
                },
                PerDiemRate::new(housing, meals),
            )
        })
}

proptest! {
    #[test]
    fn prop_compute_is_idempotent((input, rate) in valid_input()) {
        let first = compute(&input, rate).unwrap();
        let second = compute(&input, rate).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn prop_weekly_total_is_wages_plus_stipends((input, rate) in valid_input()) {
        let result = compute(&input, rate).unwrap();

        let rebuilt =
            round2(result.adjusted_taxable_hourly * input.hours_per_week) + result.stipend_weekly();
        prop_assert!((rebuilt - round2(result.total_weekly)).abs() <= Decimal::new(1, 2));
    }

    #[test]
    fn prop_annual_income_is_exact_product((input, rate) in valid_input()) {
        let result = compute(&input, rate).unwrap();
        prop_assert_eq!(result.annual_income, result.weekly_total_with_bonus * input.weeks_per_year);
    }

    #[test]
    fn prop_scaled_stipends_never_exceed_gsa_rate((input, rate) in valid_input()) {
        let result = compute(&input, rate).unwrap();

        prop_assert!(result.adjusted_housing >= Decimal::ZERO);
        prop_assert!(result.adjusted_meals >= Decimal::ZERO);
        prop_assert!(result.adjusted_housing <= rate.housing_per_week);
        prop_assert!(result.adjusted_meals <= rate.meals_per_week);
    }

    #[test]
    fn prop_taxable_floor_met_when_affordable((input, rate) in valid_input()) {
        let result = compute(&input, rate).unwrap();
        let floor = Decimal::new(20, 0);

        // Per-stipend rounding can shave at most a cent off each half
        if result.gross_weekly >= floor * input.hours_per_week {
            let slack = Decimal::new(1, 2) / input.hours_per_week + Decimal::new(1, 2);
            prop_assert!(result.adjusted_taxable_hourly + slack >= floor);
        }
    }
}
