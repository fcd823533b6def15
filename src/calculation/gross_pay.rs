//! Gross weekly pay calculation.
//!
//! Gross weekly pay is the contractor's all-in weekly budget: the client
//! bill rate with the recruiter's margin taken out, times weekly hours.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the gross pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossPayResult {
    /// Weekly budget after margin.
    pub gross_weekly: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates gross weekly pay as `rate * (1 - margin) * hours`.
///
/// # Examples
///
/// ```
/// use recruiter_margin_calc::calculation::calculate_gross_weekly;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_gross_weekly(
///     Decimal::from_str("78").unwrap(),
///     Decimal::from_str("0.27").unwrap(),
///     Decimal::from_str("35").unwrap(),
///     1,
/// );
/// assert_eq!(result.gross_weekly, Decimal::from_str("1992.9").unwrap());
/// ```
pub fn calculate_gross_weekly(
    client_hourly_rate: Decimal,
    margin_fraction: Decimal,
    hours_per_week: Decimal,
    step_number: u32,
) -> GrossPayResult {
    let pass_through = Decimal::ONE - margin_fraction;
    let gross_weekly = client_hourly_rate * pass_through * hours_per_week;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_weekly".to_string(),
        rule_name: "Gross Weekly Pay".to_string(),
        input: serde_json::json!({
            "client_hourly_rate": client_hourly_rate.normalize().to_string(),
            "margin_fraction": margin_fraction.normalize().to_string(),
            "hours_per_week": hours_per_week.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_weekly": gross_weekly.normalize().to_string()
        }),
        reasoning: format!(
            "${} x (1 - {}) x {}h = ${}",
            client_hourly_rate.normalize(),
            margin_fraction.normalize(),
            hours_per_week.normalize(),
            gross_weekly.normalize()
        ),
    };

    GrossPayResult {
        gross_weekly,
        audit_step,
    }
}
