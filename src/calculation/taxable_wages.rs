//! Taxable wage calculation.
//!
//! Whatever the stipends don't cover is paid as taxable wages. The hourly
//! rate is rounded to cents first, and the weekly figures are rebuilt from
//! that rounded rate and the rounded stipends.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::rounding::round2;

/// The result of the taxable wage calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxableWagesResult {
    /// Taxable hourly rate, rounded to cents.
    pub adjusted_taxable_hourly: Decimal,
    /// `adjusted_taxable_hourly x hours`.
    pub taxable_weekly: Decimal,
    /// Taxable wages plus stipends.
    pub total_weekly: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Splits the remaining weekly budget into taxable wages.
///
/// `hours_per_week` must be positive; callers validate it first.
///
/// # Examples
///
/// ```
/// use recruiter_margin_calc::calculation::calculate_taxable_wages;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// let result = calculate_taxable_wages(dec("1992.9"), dec("878.01"), dec("414.89"), dec("35"), 1);
///
/// assert_eq!(result.adjusted_taxable_hourly, dec("20.00"));
/// assert_eq!(result.taxable_weekly, dec("700"));
/// assert_eq!(result.total_weekly, dec("1992.90"));
/// ```
pub fn calculate_taxable_wages(
    gross_weekly: Decimal,
    adjusted_housing: Decimal,
    adjusted_meals: Decimal,
    hours_per_week: Decimal,
    step_number: u32,
) -> TaxableWagesResult {
    let remaining = gross_weekly - adjusted_housing - adjusted_meals;
    let adjusted_taxable_hourly = round2(remaining / hours_per_week);
    let taxable_weekly = adjusted_taxable_hourly * hours_per_week;
    let total_weekly = taxable_weekly + adjusted_housing + adjusted_meals;

    let audit_step = AuditStep {
        step_number,
        rule_id: "taxable_wages".to_string(),
        rule_name: "Taxable Wages".to_string(),
        input: serde_json::json!({
            "gross_weekly": gross_weekly.normalize().to_string(),
            "adjusted_housing": adjusted_housing.to_string(),
            "adjusted_meals": adjusted_meals.to_string(),
            "hours_per_week": hours_per_week.normalize().to_string()
        }),
        output: serde_json::json!({
            "adjusted_taxable_hourly": adjusted_taxable_hourly.to_string(),
            "taxable_weekly": taxable_weekly.normalize().to_string(),
            "total_weekly": total_weekly.normalize().to_string()
        }),
        reasoning: format!(
            "(${} - ${} - ${}) / {}h = ${}/h taxable; ${}/h x {}h + stipends = ${}",
            gross_weekly.normalize(),
            adjusted_housing,
            adjusted_meals,
            hours_per_week.normalize(),
            adjusted_taxable_hourly,
            adjusted_taxable_hourly,
            hours_per_week.normalize(),
            total_weekly.normalize()
        ),
    };

    TaxableWagesResult {
        adjusted_taxable_hourly,
        taxable_weekly,
        total_weekly,
        audit_step,
    }
}
