//! Per-diem rate model.
//!
//! A [`PerDiemRate`] is the weekly GSA allowance pair for one destination:
//! housing and meals. Both halves are paid as non-taxable stipends.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::max_input_value;

/// Weekly per-diem allowance for a destination.
///
/// # Example
///
/// ```
/// use recruiter_margin_calc::models::PerDiemRate;
/// use rust_decimal::Decimal;
///
/// let dallas = PerDiemRate::new(Decimal::new(910, 0), Decimal::new(430, 0));
/// assert_eq!(dallas.weekly_total(), Decimal::new(1340, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDiemRate {
    /// Lodging allowance per week.
    pub housing_per_week: Decimal,
    /// Meals and incidentals allowance per week.
    pub meals_per_week: Decimal,
}

impl PerDiemRate {
    /// The fallback rate used when a destination has no entry.
    pub const ZERO: PerDiemRate = PerDiemRate {
        housing_per_week: Decimal::ZERO,
        meals_per_week: Decimal::ZERO,
    };

    /// Creates a rate from its housing and meals halves.
    pub fn new(housing_per_week: Decimal, meals_per_week: Decimal) -> Self {
        Self {
            housing_per_week,
            meals_per_week,
        }
    }

    /// Housing plus meals, before any scaling.
    pub fn weekly_total(&self) -> Decimal {
        self.housing_per_week + self.meals_per_week
    }

    /// Rejects negative allowances and allowances above [`max_input_value`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the offending half.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("housing_per_week", self.housing_per_week),
            ("meals_per_week", self.meals_per_week),
        ] {
            if value < Decimal::ZERO {
                return Err(EngineError::invalid_input(field, "must not be negative"));
            }
            if value > max_input_value() {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must not exceed {}", max_input_value()),
                ));
            }
        }
        Ok(())
    }
}

impl Default for PerDiemRate {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_rate_has_zero_total() {
        assert_eq!(PerDiemRate::ZERO.weekly_total(), Decimal::ZERO);
        assert_eq!(PerDiemRate::default(), PerDiemRate::ZERO);
    }

    #[test]
    fn test_weekly_total_sums_both_halves() {
        let rate = PerDiemRate::new(dec("1200"), dec("550"));
        assert_eq!(rate.weekly_total(), dec("1750"));
    }

    #[test]
    fn test_negative_housing_is_rejected() {
        let rate = PerDiemRate::new(dec("-1"), dec("430"));
        match rate.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "housing_per_week"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_meals_is_rejected() {
        let rate = PerDiemRate::new(dec("910"), dec("-0.01"));
        match rate.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "meals_per_week"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_housing_is_rejected() {
        let rate = PerDiemRate::new(Decimal::MAX, Decimal::ONE);
        match rate.validate() {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "housing_per_week");
                assert!(message.contains("must not exceed"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_at_bound_is_valid() {
        let rate = PerDiemRate::new(max_input_value(), max_input_value());
        assert!(rate.validate().is_ok());
    }

    #[test]
    fn test_deserialize_from_numbers_and_strings() {
        let json = r#"{ "housing_per_week": 910, "meals_per_week": "430.50" }"#;
        let rate: PerDiemRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.housing_per_week, dec("910"));
        assert_eq!(rate.meals_per_week, dec("430.50"));
        assert!(rate.validate().is_ok());
    }
}
