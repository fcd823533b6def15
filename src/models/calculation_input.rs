//! Calculation input model.
//!
//! This module defines [`CalculationInput`], the full set of recruiter-entered
//! values that drive one compensation calculation, along with its validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Destination selected when none is given.
pub const DEFAULT_DESTINATION: &str = "Dallas, TX";

/// Facility shown when none is given.
pub const DEFAULT_FACILITY: &str = "Christa McAuliffe";

/// Upper bound on any single numeric input.
///
/// Keeps every intermediate product well inside the range of [`Decimal`].
pub fn max_input_value() -> Decimal {
    Decimal::new(1_000_000_000, 0)
}

/// The inputs to a single compensation calculation.
///
/// The per-diem pair is not part of the input; it is resolved from the
/// rate table using `destination`.
///
/// # Example
///
/// ```
/// use recruiter_margin_calc::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput::default();
/// assert_eq!(input.destination, "Dallas, TX");
/// assert_eq!(input.client_hourly_rate, Decimal::new(78, 0));
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The assignment city, a key into the rate table.
    pub destination: String,
    /// Client name or facility; carried into reports only.
    #[serde(default)]
    pub facility: Option<String>,
    /// Rate charged to the client per hour.
    pub client_hourly_rate: Decimal,
    /// Recruiter's retained fraction of the bill rate (0.27 = 27%).
    pub margin_fraction: Decimal,
    /// Contracted hours per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year, used to spread bonus and travel.
    pub weeks_per_year: Decimal,
    /// Total bonus over the full assignment.
    pub bonus_total: Decimal,
    /// Total travel reimbursement over the full assignment.
    pub travel_total: Decimal,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            destination: DEFAULT_DESTINATION.to_string(),
            facility: Some(DEFAULT_FACILITY.to_string()),
            client_hourly_rate: Decimal::new(78, 0),
            margin_fraction: Decimal::new(27, 2),
            hours_per_week: Decimal::new(35, 0),
            weeks_per_year: Decimal::new(46, 0),
            bonus_total: Decimal::ZERO,
            travel_total: Decimal::ZERO,
        }
    }
}

impl CalculationInput {
    /// Checks every numeric field, reporting the first offending one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when:
    /// - `client_hourly_rate`, `hours_per_week` or `weeks_per_year` is not positive
    /// - `margin_fraction` is outside `0 <= m < 1`
    /// - `bonus_total` or `travel_total` is negative
    /// - any value exceeds [`max_input_value`]
    pub fn validate(&self) -> EngineResult<()> {
        require_positive("client_hourly_rate", self.client_hourly_rate)?;

        if self.margin_fraction < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "margin_fraction",
                "must not be negative",
            ));
        }
        if self.margin_fraction >= Decimal::ONE {
            return Err(EngineError::invalid_input(
                "margin_fraction",
                "must be less than 1 (e.g. 0.27 for 27%)",
            ));
        }

        require_positive("hours_per_week", self.hours_per_week)?;
        require_positive("weeks_per_year", self.weeks_per_year)?;
        require_non_negative("bonus_total", self.bonus_total)?;
        require_non_negative("travel_total", self.travel_total)?;

        Ok(())
    }
}

fn require_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::invalid_input(field, "must be greater than zero"));
    }
    require_within_bounds(field, value)
}

fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_input(field, "must not be negative"));
    }
    require_within_bounds(field, value)
}

fn require_within_bounds(field: &str, value: Decimal) -> EngineResult<()> {
    if value > max_input_value() {
        return Err(EngineError::invalid_input(
            field,
            format!("must not exceed {}", max_input_value()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_invalid(input: &CalculationInput, expected_field: &str) {
        match input.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidInput on {}, got {:?}", expected_field, other),
        }
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        let input = CalculationInput::default();
        assert_eq!(input.destination, "Dallas, TX");
        assert_eq!(input.facility.as_deref(), Some("Christa McAuliffe"));
        assert_eq!(input.margin_fraction, dec("0.27"));
        assert_eq!(input.hours_per_week, dec("35"));
        assert_eq!(input.weeks_per_year, dec("46"));
        assert_eq!(input.bonus_total, Decimal::ZERO);
        assert_eq!(input.travel_total, Decimal::ZERO);
    }

    #[test]
    fn test_default_input_is_valid() {
        assert!(CalculationInput::default().validate().is_ok());
    }

    #[test]
    fn test_zero_hours_is_invalid() {
        let input = CalculationInput {
            hours_per_week: Decimal::ZERO,
            ..Default::default()
        };
        assert_invalid(&input, "hours_per_week");
    }

    #[test]
    fn test_zero_weeks_is_invalid() {
        let input = CalculationInput {
            weeks_per_year: Decimal::ZERO,
            ..Default::default()
        };
        assert_invalid(&input, "weeks_per_year");
    }

    #[test]
    fn test_negative_client_rate_is_invalid() {
        let input = CalculationInput {
            client_hourly_rate: dec("-78"),
            ..Default::default()
        };
        assert_invalid(&input, "client_hourly_rate");
    }

    #[test]
    fn test_margin_of_one_is_invalid() {
        let input = CalculationInput {
            margin_fraction: Decimal::ONE,
            ..Default::default()
        };
        assert_invalid(&input, "margin_fraction");
    }

    #[test]
    fn test_negative_margin_is_invalid() {
        let input = CalculationInput {
            margin_fraction: dec("-0.05"),
            ..Default::default()
        };
        assert_invalid(&input, "margin_fraction");
    }

    #[test]
    fn test_zero_margin_is_valid() {
        let input = CalculationInput {
            margin_fraction: Decimal::ZERO,
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_negative_bonus_is_invalid() {
        let input = CalculationInput {
            bonus_total: dec("-100"),
            ..Default::default()
        };
        assert_invalid(&input, "bonus_total");
    }

    #[test]
    fn test_negative_travel_is_invalid() {
        let input = CalculationInput {
            travel_total: dec("-1"),
            ..Default::default()
        };
        assert_invalid(&input, "travel_total");
    }

    #[test]
    fn test_oversized_bonus_is_invalid() {
        let input = CalculationInput {
            bonus_total: dec("1000000000.01"),
            ..Default::default()
        };
        assert_invalid(&input, "bonus_total");
    }

    #[test]
    fn test_deserialize_without_facility() {
        let json = r#"{
            "destination": "Chicago, IL",
            "client_hourly_rate": "90",
            "margin_fraction": "0.25",
            "hours_per_week": "36",
            "weeks_per_year": "48",
            "bonus_total": "0",
            "travel_total": "500"
        }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.destination, "Chicago, IL");
        assert!(input.facility.is_none());
        assert_eq!(input.travel_total, dec("500"));
    }
}
