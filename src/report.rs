//! Read-only rendering of a calculation result.
//!
//! A [`ResultReport`] is the display form of a [`CalculationResult`]: one
//! labelled currency line per figure, plus the scaling advisory when
//! stipends were reduced. Reports feed both the API response and the
//! document export.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round2;
use crate::models::{CalculationInput, CalculationResult};

/// Shown when stipends were scaled to protect the taxable floor.
pub const STIPEND_SCALED_ADVISORY: &str =
    "GSA stipends were scaled down to ensure minimum taxable hourly of $20";

/// Report heading.
pub const REPORT_TITLE: &str = "Recruiter Margin Calculator";

/// Formats an amount as dollars with exactly two decimals.
///
/// # Examples
///
/// ```
/// use recruiter_margin_calc::report::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1992.9").unwrap()), "$1992.90");
/// assert_eq!(format_currency(Decimal::new(910, 0)), "$910.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let mut cents = round2(amount);
    cents.rescale(2);
    if cents < Decimal::ZERO {
        format!("-${}", cents.abs())
    } else {
        format!("${}", cents)
    }
}

/// One labelled figure in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Display label.
    pub label: String,
    /// Formatted currency value.
    pub value: String,
    /// Headline figures are rendered larger.
    #[serde(default)]
    pub emphasis: bool,
}

impl ReportLine {
    fn new(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            value: format_currency(amount),
            emphasis: false,
        }
    }

    fn emphasised(label: &str, amount: Decimal) -> Self {
        Self {
            emphasis: true,
            ..Self::new(label, amount)
        }
    }
}

/// Display form of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultReport {
    /// Report heading.
    pub title: String,
    /// Assignment destination.
    pub destination: String,
    /// Client name or facility, if given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    /// Figures in display order.
    pub lines: Vec<ReportLine>,
    /// The scaling advisory, present only when stipends were scaled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
    /// Calculation warnings, as messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ResultReport {
    /// Builds the report for `result`, which was computed from `input`.
    pub fn new(input: &CalculationInput, result: &CalculationResult) -> Self {
        let lines = vec![
            ReportLine::new("Gross Weekly Income", result.gross_weekly),
            ReportLine::new("Adjusted Housing", result.adjusted_housing),
            ReportLine::new("Adjusted Meals", result.adjusted_meals),
            ReportLine::new("Adjusted Taxable Hourly", result.adjusted_taxable_hourly),
            ReportLine::new("Weekly Taxable Wages", result.taxable_weekly),
            ReportLine::new("Total Weekly Comp (No Bonus)", result.total_weekly),
            ReportLine::new("Bonus + Travel Spread Weekly", result.bonus_travel_weekly),
            ReportLine::emphasised(
                "Total Weekly Comp (With Bonus)",
                result.weekly_total_with_bonus,
            ),
            ReportLine::emphasised("Annualized Income", result.annual_income),
        ];

        Self {
            title: REPORT_TITLE.to_string(),
            destination: input.destination.clone(),
            facility: input
                .facility
                .as_ref()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
            lines,
            advisory: result
                .stipend_was_scaled
                .then(|| STIPEND_SCALED_ADVISORY.to_string()),
            warnings: result
                .audit_trace
                .warnings
                .iter()
                .map(|w| w.message.clone())
                .collect(),
        }
    }

    /// Finds a line by its label.
    pub fn line(&self, label: &str) -> Option<&ReportLine> {
        self.lines.iter().find(|l| l.label == label)
    }
}
