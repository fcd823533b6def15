//! Configuration loading functionality.
//!
//! This module provides the [`RateTableLoader`] type for loading per-diem
//! rate tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{RateTable, RateTableFile};

/// Loads rate tables from YAML.
///
/// # Example
///
/// ```no_run
/// use recruiter_margin_calc::config::RateTableLoader;
///
/// let table = RateTableLoader::load("./config/gsa_rates.yaml")?;
/// println!("Loaded {} destinations", table.len());
/// # Ok::<(), recruiter_margin_calc::error::EngineError>(())
/// ```
pub struct RateTableLoader;

impl RateTableLoader {
    /// Loads a rate table from the specified file.
    ///
    /// # Returns
    ///
    /// Returns the table on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A rate is negative or too large, or no destinations are defined (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<RateTable> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let table = Self::from_yaml_str(&content, &path_str)?;
        info!(path = %path_str, destinations = table.len(), "Loaded rate table");
        Ok(table)
    }

    /// Parses and validates a rate table from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<RateTable> {
        let file: RateTableFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        if file.destinations.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: origin.to_string(),
                message: "no destinations defined".to_string(),
            });
        }

        for (name, rate) in &file.destinations {
            rate.validate().map_err(|err| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: format!("destination '{}': {}", name, err),
            })?;
        }

        Ok(RateTable::new(file.destinations))
    }
}
