//! Request types for the Recruiter Margin Calculator API.
//!
//! This module defines the JSON request body shared by the `/calculate` and
//! `/export` endpoints. Every field is optional and falls back to the form
//! default; numeric fields accept JSON numbers or numeric strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CalculationInput;

/// Request body for the `/calculate` and `/export` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    /// The assignment city.
    pub destination: String,
    /// Client name or facility.
    pub facility: Option<String>,
    /// Rate charged to the client per hour.
    pub client_hourly_rate: Decimal,
    /// Recruiter's retained fraction of the bill rate.
    pub margin_fraction: Decimal,
    /// Contracted hours per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year.
    pub weeks_per_year: Decimal,
    /// Total bonus over the assignment.
    pub bonus_total: Decimal,
    /// Total travel reimbursement over the assignment.
    pub travel_total: Decimal,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        CalculationInput::default().into()
    }
}

impl From<CalculationRequest> for CalculationInput {
    fn from(req: CalculationRequest) -> Self {
        CalculationInput {
            destination: req.destination,
            facility: req.facility,
            client_hourly_rate: req.client_hourly_rate,
            margin_fraction: req.margin_fraction,
            hours_per_week: req.hours_per_week,
            weeks_per_year: req.weeks_per_year,
            bonus_total: req.bonus_total,
            travel_total: req.travel_total,
        }
    }
}

impl From<CalculationInput> for CalculationRequest {
    fn from(input: CalculationInput) -> Self {
        CalculationRequest {
            destination: input.destination,
            facility: input.facility,
            client_hourly_rate: input.client_hourly_rate,
            margin_fraction: input.margin_fraction,
            hours_per_week: input.hours_per_week,
            weeks_per_year: input.weeks_per_year,
            bonus_total: input.bonus_total,
            travel_total: input.travel_total,
        }
    }
}
