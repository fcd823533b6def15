//! Cent rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places money is rounded to.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds to cents, half away from zero.
///
/// # Examples
///
/// ```
/// use recruiter_margin_calc::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("878.0141").unwrap()), Decimal::from_str("878.01").unwrap());
/// assert_eq!(round2(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round2(dec("414.8849")), dec("414.88"));
    }

    #[test]
    fn test_rounds_up_at_midpoint() {
        assert_eq!(round2(dec("1.005")), dec("1.01"));
    }

    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round2(dec("-2.345")), dec("-2.35"));
    }

    #[test]
    fn test_short_values_are_unchanged() {
        assert_eq!(round2(dec("910")), dec("910"));
        assert_eq!(round2(dec("20.5")), dec("20.5"));
    }
}
