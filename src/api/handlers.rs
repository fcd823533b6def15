//! HTTP request handlers for the Recruiter Margin Calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;
use crate::error::EngineError;
use crate::export::{HtmlDocumentRenderer, export_report};
use crate::models::CalculationInput;
use crate::report::ResultReport;

use super::form::FormSchema;
use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, DestinationRate};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/form", get(form_handler))
        .route("/destinations", get(destinations_handler))
        .route("/destinations/:name", get(destination_handler))
        .route("/calculate", post(calculate_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Handler for GET /form.
///
/// Returns the form schema with the rate table's destinations as options.
async fn form_handler(State(state): State<AppState>) -> impl IntoResponse {
    let schema = FormSchema::new(state.rates(), &CalculationInput::default());
    json_response(StatusCode::OK, schema)
}

/// Handler for GET /destinations.
async fn destinations_handler(State(state): State<AppState>) -> impl IntoResponse {
    let rates = state.rates();
    let listing: Vec<DestinationRate> = rates
        .destinations()
        .into_iter()
        .map(|name| {
            let rate = rates.lookup(name);
            DestinationRate {
                name: name.to_string(),
                housing_per_week: rate.housing_per_week,
                meals_per_week: rate.meals_per_week,
            }
        })
        .collect();
    json_response(StatusCode::OK, listing)
}

/// Handler for GET /destinations/:name.
///
/// Strict lookup: an unknown destination is a 404.
async fn destination_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.rates().get(&name) {
        Ok(rate) => json_response(
            StatusCode::OK,
            DestinationRate {
                name,
                housing_per_week: rate.housing_per_week,
                meals_per_week: rate.meals_per_week,
            },
        ),
        Err(err) => {
            let mut api_error: ApiErrorResponse = err.into();
            api_error.status = StatusCode::NOT_FOUND;
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the calculated pay breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input: CalculationInput = match parse_payload(payload, correlation_id) {
        Ok(request) => request.into(),
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match calculate(&input, state.rates()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                destination = %input.destination,
                destination_known = result.destination_known,
                stipend_was_scaled = result.stipend_was_scaled,
                stipend_weekly = %result.stipend_weekly(),
                annual_income = %result.annual_income,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let report = ResultReport::new(&input, &result);
            json_response(
                StatusCode::OK,
                CalculationResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    input,
                    result,
                    report,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /export endpoint.
///
/// Computes the breakdown and returns it rendered as a print-ready document.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let input: CalculationInput = match parse_payload(payload, correlation_id) {
        Ok(request) => request.into(),
        Err(response) => return response,
    };

    let result = match calculate(&input, state.rates()) {
        Ok(result) => result,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            return error_response(err);
        }
    };

    let report = ResultReport::new(&input, &result);
    match export_report(&report, state.export_settings(), &HtmlDocumentRenderer) {
        Ok(document) => {
            info!(
                correlation_id = %correlation_id,
                filename = %document.filename,
                "Export completed successfully"
            );
            json_response(StatusCode::OK, document)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Export failed");
            error_response(err)
        }
    }
}

/// Unwraps the JSON body or builds the 400 response for it.
fn parse_payload(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CalculationRequest, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_response(StatusCode::BAD_REQUEST, error))
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
