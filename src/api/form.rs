//! Input form schema.
//!
//! Describes the calculator form so a client can render it: each field's
//! name, label, hint, kind and default, with the destination constrained to
//! the rate table's keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::RateTable;
use crate::models::CalculationInput;
use crate::report::REPORT_TITLE;

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free numeric entry.
    Number,
    /// Free text entry.
    Text,
    /// One of a fixed set of options.
    Select,
}

/// One field of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Request field name.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Short hint shown next to the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Entry kind.
    pub kind: FieldKind,
    /// Initial value.
    pub default: Value,
    /// Increment for number inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    /// Derived fields cannot be edited.
    pub read_only: bool,
    /// Allowed values for select fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FormField {
    fn number(name: &str, label: &str, hint: Option<&str>, default: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            hint: hint.map(str::to_string),
            kind: FieldKind::Number,
            default: Value::String(default.to_string()),
            step: None,
            read_only: false,
            options: Vec::new(),
        }
    }
}

/// The complete form description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Form heading.
    pub title: String,
    /// Fields in display order.
    pub fields: Vec<FormField>,
}

impl FormSchema {
    /// Builds the form for `rates`, pre-filled with `defaults`.
    ///
    /// The read-only housing and meals fields show the rate for the default
    /// destination.
    pub fn new(rates: &RateTable, defaults: &CalculationInput) -> Self {
        let default_rate = rates.lookup(&defaults.destination);

        let destination = FormField {
            name: "destination".to_string(),
            label: "Destination".to_string(),
            hint: Some("City for assignment".to_string()),
            kind: FieldKind::Select,
            default: Value::String(defaults.destination.clone()),
            step: None,
            read_only: false,
            options: rates.destinations().into_iter().map(str::to_string).collect(),
        };

        let facility = FormField {
            name: "facility".to_string(),
            label: "School".to_string(),
            hint: Some("Client name or facility".to_string()),
            kind: FieldKind::Text,
            default: defaults
                .facility
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
            step: None,
            read_only: false,
            options: Vec::new(),
        };

        let margin = FormField {
            step: Some("0.01".to_string()),
            ..FormField::number(
                "margin_fraction",
                "Margin (%)",
                Some("e.g. 0.27 = 27%"),
                defaults.margin_fraction,
            )
        };

        let housing = FormField {
            read_only: true,
            ..FormField::number(
                "housing_per_week",
                "Housing / Week (GSA)",
                None,
                default_rate.housing_per_week,
            )
        };

        let meals = FormField {
            read_only: true,
            ..FormField::number(
                "meals_per_week",
                "Meals / Week (GSA)",
                None,
                default_rate.meals_per_week,
            )
        };

        let fields = vec![
            destination,
            facility,
            FormField::number(
                "client_hourly_rate",
                "Charged to Client / Hour",
                Some("Bill rate"),
                defaults.client_hourly_rate,
            ),
            margin,
            FormField::number(
                "hours_per_week",
                "Hours / Week",
                Some("Typically 35"),
                defaults.hours_per_week,
            ),
            FormField::number(
                "weeks_per_year",
                "Weeks / Year",
                Some("Typically 46"),
                defaults.weeks_per_year,
            ),
            housing,
            meals,
            FormField::number(
                "bonus_total",
                "Bonus",
                Some("Total bonus over full assignment"),
                defaults.bonus_total,
            ),
            FormField::number(
                "travel_total",
                "Travel",
                Some("Total travel reimbursement"),
                defaults.travel_total,
            ),
        ];

        Self {
            title: REPORT_TITLE.to_string(),
            fields,
        }
    }

    /// Finds a field by name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
