//! Configuration types for per-diem rate lookup.
//!
//! This module contains the [`RateTable`] registry handed to the calculator
//! and the strongly-typed structure deserialized from YAML rate files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::PerDiemRate;

/// Rate table file structure.
///
/// ```yaml
/// destinations:
///   "Dallas, TX":
///     housing_per_week: 910
///     meals_per_week: 430
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableFile {
    /// Map of destination name to its weekly per-diem rate.
    pub destinations: HashMap<String, PerDiemRate>,
}

/// Read-only registry of per-diem rates keyed by destination.
///
/// The table is built once (from [`RateTable::builtin`] or a YAML file) and
/// never mutated afterwards.
///
/// # Example
///
/// ```
/// use recruiter_margin_calc::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::builtin();
/// let dallas = table.lookup("Dallas, TX");
/// assert_eq!(dallas.housing_per_week, Decimal::new(910, 0));
///
/// // Unknown destinations degrade to zero stipends.
/// assert_eq!(table.lookup("Boise, ID").weekly_total(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, PerDiemRate>,
}

impl RateTable {
    /// Creates a table from a destination map.
    pub fn new(rates: HashMap<String, PerDiemRate>) -> Self {
        Self { rates }
    }

    /// The GSA weekly rates shipped with the calculator.
    pub fn builtin() -> Self {
        let rates = [
            ("Dallas, TX", 910, 430),
            ("New York, NY", 1200, 550),
            ("Los Angeles, CA", 1050, 510),
            ("Chicago, IL", 980, 480),
        ]
        .into_iter()
        .map(|(name, housing, meals)| {
            (
                name.to_string(),
                PerDiemRate::new(Decimal::new(housing, 0), Decimal::new(meals, 0)),
            )
        })
        .collect();

        Self::new(rates)
    }

    /// Returns the rate for `destination`, or [`PerDiemRate::ZERO`] if absent.
    pub fn lookup(&self, destination: &str) -> PerDiemRate {
        self.resolve(destination).0
    }

    /// Returns the rate for `destination` and whether the table knew it.
    pub fn resolve(&self, destination: &str) -> (PerDiemRate, bool) {
        match self.rates.get(destination) {
            Some(rate) => (*rate, true),
            None => (PerDiemRate::ZERO, false),
        }
    }

    /// Strict lookup.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownDestination`] if the table has no entry.
    pub fn get(&self, destination: &str) -> EngineResult<&PerDiemRate> {
        self.rates
            .get(destination)
            .ok_or_else(|| EngineError::UnknownDestination {
                destination: destination.to_string(),
            })
    }

    /// All destination names, sorted for display.
    pub fn destinations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of destinations.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no destinations.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
