//! Application state for the Recruiter Margin Calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateTable;
use crate::export::ExportSettings;

/// Shared application state.
///
/// Contains the read-only resources shared across all request handlers:
/// the per-diem rate table and the export settings.
#[derive(Clone)]
pub struct AppState {
    /// The per-diem rate table.
    rates: Arc<RateTable>,
    /// Settings applied to every export.
    export_settings: Arc<ExportSettings>,
}

impl AppState {
    /// Creates a new application state with the given rate table.
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
            export_settings: Arc::new(ExportSettings::default()),
        }
    }

    /// Replaces the export settings.
    pub fn with_export_settings(mut self, settings: ExportSettings) -> Self {
        self.export_settings = Arc::new(settings);
        self
    }

    /// Returns a reference to the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns a reference to the export settings.
    pub fn export_settings(&self) -> &ExportSettings {
        &self.export_settings
    }
}
