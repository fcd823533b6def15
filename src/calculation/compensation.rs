//! End-to-end compensation calculation.
//!
//! [`compute`] turns one validated input and a resolved per-diem rate into a
//! complete [`CalculationResult`]. [`calculate`] resolves the rate from a
//! [`RateTable`] first. Both are pure: the same arguments always produce an
//! equal result, so callers simply re-run them whenever any input changes.

use tracing::{debug, warn};

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationInput, CalculationResult, PerDiemRate,
};

use super::bonus_spread::spread_bonus_and_travel;
use super::gross_pay::calculate_gross_weekly;
use super::stipend_scaling::scale_stipends;
use super::taxable_wages::calculate_taxable_wages;

/// Warning code raised when the destination has no per-diem rate.
pub const UNKNOWN_DESTINATION: &str = "UNKNOWN_DESTINATION";

/// Where the per-diem rate for a calculation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RateSource {
    Supplied,
    RateTable,
    Fallback,
}

impl RateSource {
    fn as_str(self) -> &'static str {
        match self {
            RateSource::Supplied => "supplied",
            RateSource::RateTable => "rate_table",
            RateSource::Fallback => "fallback",
        }
    }
}

/// Computes the pay breakdown for `input` using an already-resolved rate.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// if the input or rate fails validation, and
/// [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if a figure overflows.
///
/// # Examples
///
/// ```
/// use recruiter_margin_calc::calculation::compute;
/// use recruiter_margin_calc::models::{CalculationInput, PerDiemRate};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = PerDiemRate::new(Decimal::new(910, 0), Decimal::new(430, 0));
/// let result = compute(&CalculationInput::default(), rate).unwrap();
///
/// assert!(result.stipend_was_scaled);
/// assert_eq!(result.adjusted_taxable_hourly, Decimal::from_str("20.00").unwrap());
/// assert_eq!(result.annual_income, Decimal::from_str("91673.40").unwrap());
/// ```
pub fn compute(input: &CalculationInput, per_diem: PerDiemRate) -> EngineResult<CalculationResult> {
    compute_with_source(input, per_diem, RateSource::Supplied)
}

/// Resolves the destination in `rates` and computes the pay breakdown.
///
/// An unknown destination is not an error: zero stipends are used, the
/// result's `destination_known` is false, and an `UNKNOWN_DESTINATION`
/// warning is attached. Use [`RateTable::get`] beforehand to reject it.
///
/// # Errors
///
/// Same as [`compute`].
pub fn calculate(input: &CalculationInput, rates: &RateTable) -> EngineResult<CalculationResult> {
    let (per_diem, known) = rates.resolve(&input.destination);
    let source = if known {
        RateSource::RateTable
    } else {
        warn!(
            destination = %input.destination,
            "Destination not in rate table; using zero stipends"
        );
        RateSource::Fallback
    };
    compute_with_source(input, per_diem, source)
}

fn compute_with_source(
    input: &CalculationInput,
    per_diem: PerDiemRate,
    source: RateSource,
) -> EngineResult<CalculationResult> {
    input.validate()?;
    per_diem.validate()?;

    let mut steps: Vec<AuditStep> = Vec::with_capacity(5);
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    steps.push(per_diem_step(input, &per_diem, source, step_number));
    step_number += 1;
    if source == RateSource::Fallback {
        warnings.push(AuditWarning {
            code: UNKNOWN_DESTINATION.to_string(),
            message: format!(
                "No GSA rate for '{}'; housing and meals stipends set to $0",
                input.destination
            ),
            severity: "medium".to_string(),
        });
    }

    let gross = calculate_gross_weekly(
        input.client_hourly_rate,
        input.margin_fraction,
        input.hours_per_week,
        step_number,
    );
    steps.push(gross.audit_step);
    step_number += 1;

    let stipends = scale_stipends(gross.gross_weekly, input.hours_per_week, &per_diem, step_number);
    steps.push(stipends.audit_step);
    warnings.extend(stipends.warning);
    step_number += 1;

    let wages = calculate_taxable_wages(
        gross.gross_weekly,
        stipends.adjusted_housing,
        stipends.adjusted_meals,
        input.hours_per_week,
        step_number,
    );
    steps.push(wages.audit_step);
    step_number += 1;

    let spread = spread_bonus_and_travel(
        wages.total_weekly,
        input.bonus_total,
        input.travel_total,
        input.weeks_per_year,
        step_number,
    )?;
    steps.push(spread.audit_step);

    debug!(
        destination = %input.destination,
        gross_weekly = %gross.gross_weekly,
        taxable_hourly = %wages.adjusted_taxable_hourly,
        stipend_was_scaled = stipends.needs_adjustment,
        annual_income = %spread.annual_income,
        "Compensation computed"
    );

    Ok(CalculationResult {
        gross_weekly: gross.gross_weekly,
        adjusted_housing: stipends.adjusted_housing,
        adjusted_meals: stipends.adjusted_meals,
        adjusted_taxable_hourly: wages.adjusted_taxable_hourly,
        taxable_weekly: wages.taxable_weekly,
        total_weekly: wages.total_weekly,
        bonus_travel_weekly: spread.bonus_travel_weekly,
        weekly_total_with_bonus: spread.weekly_total_with_bonus,
        annual_income: spread.annual_income,
        stipend_was_scaled: stipends.needs_adjustment,
        destination_known: source != RateSource::Fallback,
        per_diem,
        audit_trace: AuditTrace { steps, warnings },
    })
}

fn per_diem_step(
    input: &CalculationInput,
    per_diem: &PerDiemRate,
    source: RateSource,
    step_number: u32,
) -> AuditStep {
    let reasoning = match source {
        RateSource::Supplied => format!(
            "Using supplied per-diem rate for '{}': housing ${}, meals ${}",
            input.destination,
            per_diem.housing_per_week.normalize(),
            per_diem.meals_per_week.normalize()
        ),
        RateSource::RateTable => format!(
            "Looked up GSA rate for '{}': housing ${}, meals ${}",
            input.destination,
            per_diem.housing_per_week.normalize(),
            per_diem.meals_per_week.normalize()
        ),
        RateSource::Fallback => format!(
            "'{}' is not in the rate table; falling back to $0 housing and meals",
            input.destination
        ),
    };

    AuditStep {
        step_number,
        rule_id: "per_diem_rate".to_string(),
        rule_name: "Per-Diem Rate".to_string(),
        input: serde_json::json!({
            "destination": input.destination
        }),
        output: serde_json::json!({
            "housing_per_week": per_diem.housing_per_week.normalize().to_string(),
            "meals_per_week": per_diem.meals_per_week.normalize().to_string(),
            "source": source.as_str()
        }),
        reasoning,
    }
}
