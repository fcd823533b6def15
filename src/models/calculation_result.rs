//! Calculation result models for the Recruiter Margin Calculator.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! audit structures that capture every output of a compensation calculation.
//! A result is a pure value: computing the same input twice yields equal
//! results, audit trace included.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PerDiemRate;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation but that a
/// recruiter should see before quoting the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use recruiter_margin_calc::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The complete result of a compensation calculation.
///
/// Housing, meals and the taxable hourly rate are already rounded to cents;
/// every other figure is derived from those rounded values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Weekly budget for the contractor after margin.
    pub gross_weekly: Decimal,
    /// Housing stipend per week after any scaling.
    pub adjusted_housing: Decimal,
    /// Meals stipend per week after any scaling.
    pub adjusted_meals: Decimal,
    /// Taxable hourly rate once stipends are taken out.
    pub adjusted_taxable_hourly: Decimal,
    /// Taxable wages per week.
    pub taxable_weekly: Decimal,
    /// Taxable wages plus stipends, before bonus and travel.
    pub total_weekly: Decimal,
    /// Bonus and travel spread evenly across the working weeks.
    pub bonus_travel_weekly: Decimal,
    /// Weekly total including the bonus and travel spread.
    pub weekly_total_with_bonus: Decimal,
    /// Weekly total with bonus over the working year.
    pub annual_income: Decimal,
    /// True when stipends were reduced to protect the taxable floor.
    pub stipend_was_scaled: bool,
    /// False when the destination had no rate and zero stipends were used.
    pub destination_known: bool,
    /// The unscaled per-diem rate the calculation started from.
    pub per_diem: PerDiemRate,
    /// Every rule applied, in order, plus any warnings.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Total non-taxable stipends per week.
    pub fn stipend_weekly(&self) -> Decimal {
        self.adjusted_housing + self.adjusted_meals
    }
}
