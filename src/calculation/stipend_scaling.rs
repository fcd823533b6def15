//! Stipend scaling against the minimum taxable wage floor.
//!
//! Per-diem stipends are tax free, so paying the full GSA rate can leave too
//! little of the weekly budget classified as wages. When gross pay minus the
//! full stipends falls below `$20 x hours`, both stipends are scaled down by
//! the same factor so that exactly the floor remains taxable (or to zero if
//! the budget cannot even cover the floor).

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AuditStep, AuditWarning, PerDiemRate};

use super::rounding::round2;

/// Warning code raised when gross pay is below the taxable floor.
pub const TAXABLE_FLOOR_UNREACHABLE: &str = "TAXABLE_FLOOR_UNREACHABLE";

/// The minimum taxable wage per hour, in dollars.
pub fn minimum_taxable_hourly() -> Decimal {
    Decimal::new(20, 0)
}

/// The result of stipend scaling, including the audit step.
#[derive(Debug, Clone)]
pub struct StipendScalingResult {
    /// `$20 x hours`: the weekly wages that must stay taxable.
    pub required_taxable_total: Decimal,
    /// Housing plus meals before scaling.
    pub original_stipend_total: Decimal,
    /// True when full stipends would breach the floor.
    pub needs_adjustment: bool,
    /// Factor applied to both stipends; 1 when no adjustment is needed.
    pub scale: Decimal,
    /// Housing after scaling, rounded to cents.
    pub adjusted_housing: Decimal,
    /// Meals after scaling, rounded to cents.
    pub adjusted_meals: Decimal,
    /// Set when the budget cannot cover the floor even with zero stipends.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the stipend scale factor.
///
/// Returns 1 when no adjustment is needed. Otherwise returns
/// `max(0, (gross - required) / stipends)`, or 0 when there are no stipends
/// to scale.
pub fn stipend_scale_factor(
    gross_weekly: Decimal,
    required_taxable_total: Decimal,
    original_stipend_total: Decimal,
    needs_adjustment: bool,
) -> Decimal {
    if !needs_adjustment {
        return Decimal::ONE;
    }
    if original_stipend_total.is_zero() {
        return Decimal::ZERO;
    }
    ((gross_weekly - required_taxable_total) / original_stipend_total).max(Decimal::ZERO)
}

/// Scales the per-diem stipends so the taxable floor is respected.
///
/// # Arguments
///
/// * `gross_weekly` - Weekly budget after margin
/// * `hours_per_week` - Contracted weekly hours (must be positive)
/// * `per_diem` - Unscaled weekly rate for the destination
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use recruiter_margin_calc::calculation::scale_stipends;
/// use recruiter_margin_calc::models::PerDiemRate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dallas = PerDiemRate::new(Decimal::new(910, 0), Decimal::new(430, 0));
/// let result = scale_stipends(Decimal::from_str("1992.9").unwrap(), Decimal::new(35, 0), &dallas, 1);
///
/// assert!(result.needs_adjustment);
/// assert_eq!(result.adjusted_housing, Decimal::from_str("878.01").unwrap());
/// assert_eq!(result.adjusted_meals, Decimal::from_str("414.89").unwrap());
/// ```
pub fn scale_stipends(
    gross_weekly: Decimal,
    hours_per_week: Decimal,
    per_diem: &PerDiemRate,
    step_number: u32,
) -> StipendScalingResult {
    let floor = minimum_taxable_hourly();
    let required_taxable_total = floor * hours_per_week;
    let original_stipend_total = per_diem.weekly_total();
    let taxable_with_full_stipends = gross_weekly - original_stipend_total;

    let needs_adjustment = taxable_with_full_stipends < required_taxable_total;
    let scale = stipend_scale_factor(
        gross_weekly,
        required_taxable_total,
        original_stipend_total,
        needs_adjustment,
    );

    let adjusted_housing = round2(per_diem.housing_per_week * scale);
    let adjusted_meals = round2(per_diem.meals_per_week * scale);

    debug!(
        gross_weekly = %gross_weekly,
        required_taxable_total = %required_taxable_total,
        needs_adjustment,
        scale = %scale,
        "Stipend scaling decided"
    );

    let warning = (gross_weekly < required_taxable_total).then(|| AuditWarning {
        code: TAXABLE_FLOOR_UNREACHABLE.to_string(),
        message: format!(
            "Gross weekly pay ${} is below the ${} taxable floor (${}/h x {}h); stipends were removed and the floor is still not met",
            round2(gross_weekly),
            round2(required_taxable_total),
            floor,
            hours_per_week.normalize()
        ),
        severity: "high".to_string(),
    });

    let reasoning = if needs_adjustment {
        format!(
            "${} - ${} stipends leaves ${}, below the ${} floor; stipends scaled by {}",
            gross_weekly.normalize(),
            original_stipend_total.normalize(),
            taxable_with_full_stipends.normalize(),
            required_taxable_total.normalize(),
            scale.normalize()
        )
    } else {
        format!(
            "${} - ${} stipends leaves ${}, at or above the ${} floor; stipends paid in full",
            gross_weekly.normalize(),
            original_stipend_total.normalize(),
            taxable_with_full_stipends.normalize(),
            required_taxable_total.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "stipend_scaling".to_string(),
        rule_name: "Stipend Scaling".to_string(),
        input: serde_json::json!({
            "gross_weekly": gross_weekly.normalize().to_string(),
            "hours_per_week": hours_per_week.normalize().to_string(),
            "housing_per_week": per_diem.housing_per_week.normalize().to_string(),
            "meals_per_week": per_diem.meals_per_week.normalize().to_string(),
            "minimum_taxable_hourly": floor.to_string()
        }),
        output: serde_json::json!({
            "required_taxable_total": required_taxable_total.normalize().to_string(),
            "original_stipend_total": original_stipend_total.normalize().to_string(),
            "needs_adjustment": needs_adjustment,
            "scale": scale.normalize().to_string(),
            "adjusted_housing": adjusted_housing.to_string(),
            "adjusted_meals": adjusted_meals.to_string()
        }),
        reasoning,
    };

    StipendScalingResult {
        required_taxable_total,
        original_stipend_total,
        needs_adjustment,
        scale,
        adjusted_housing,
        adjusted_meals,
        warning,
        audit_step,
    }
}
