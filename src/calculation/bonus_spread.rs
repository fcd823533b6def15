//! Bonus and travel spread, and annualisation.
//!
//! Lump-sum bonus and travel reimbursement are spread evenly across the
//! working weeks, then the weekly package is annualised. No extra rounding
//! is applied here, so `annual_income == weekly_total_with_bonus x weeks`
//! holds exactly.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of spreading bonus and travel, including the audit step.
#[derive(Debug, Clone)]
pub struct BonusSpreadResult {
    /// `(bonus + travel) / weeks`.
    pub bonus_travel_weekly: Decimal,
    /// Weekly total plus the spread.
    pub weekly_total_with_bonus: Decimal,
    /// `weekly_total_with_bonus x weeks`.
    pub annual_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Spreads bonus and travel over `weeks_per_year` and annualises the result.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `weeks_per_year` is zero, and
/// [`EngineError::CalculationError`] if any figure overflows.
///
/// # Examples
///
/// ```
/// use recruiter_margin_calc::calculation::spread_bonus_and_travel;
/// use rust_decimal::Decimal;
///
/// let result = spread_bonus_and_travel(
///     Decimal::new(2000, 0),
///     Decimal::new(4600, 0),
///     Decimal::new(460, 0),
///     Decimal::new(46, 0),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.bonus_travel_weekly, Decimal::new(110, 0));
/// assert_eq!(result.annual_income, Decimal::new(97060, 0));
/// ```
pub fn spread_bonus_and_travel(
    total_weekly: Decimal,
    bonus_total: Decimal,
    travel_total: Decimal,
    weeks_per_year: Decimal,
    step_number: u32,
) -> EngineResult<BonusSpreadResult> {
    if weeks_per_year.is_zero() {
        return Err(EngineError::invalid_input(
            "weeks_per_year",
            "must be greater than zero",
        ));
    }

    let lump_sum = bonus_total
        .checked_add(travel_total)
        .ok_or_else(|| overflow("bonus plus travel"))?;
    let bonus_travel_weekly = lump_sum
        .checked_div(weeks_per_year)
        .ok_or_else(|| overflow("weekly bonus and travel spread"))?;
    let weekly_total_with_bonus = total_weekly
        .checked_add(bonus_travel_weekly)
        .ok_or_else(|| overflow("weekly total with bonus"))?;
    let annual_income = weekly_total_with_bonus
        .checked_mul(weeks_per_year)
        .ok_or_else(|| overflow("annual income"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "bonus_travel_spread".to_string(),
        rule_name: "Bonus and Travel Spread".to_string(),
        input: serde_json::json!({
            "total_weekly": total_weekly.normalize().to_string(),
            "bonus_total": bonus_total.normalize().to_string(),
            "travel_total": travel_total.normalize().to_string(),
            "weeks_per_year": weeks_per_year.normalize().to_string()
        }),
        output: serde_json::json!({
            "bonus_travel_weekly": bonus_travel_weekly.normalize().to_string(),
            "weekly_total_with_bonus": weekly_total_with_bonus.normalize().to_string(),
            "annual_income": annual_income.normalize().to_string()
        }),
        reasoning: format!(
            "(${} + ${}) / {} weeks = ${}/week; (${} + ${}) x {} weeks = ${}",
            bonus_total.normalize(),
            travel_total.normalize(),
            weeks_per_year.normalize(),
            bonus_travel_weekly.normalize(),
            total_weekly.normalize(),
            bonus_travel_weekly.normalize(),
            weeks_per_year.normalize(),
            annual_income.normalize()
        ),
    };

    Ok(BonusSpreadResult {
        bonus_travel_weekly,
        weekly_total_with_bonus,
        annual_income,
        audit_step,
    })
}

fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} is out of range", what),
    }
}
