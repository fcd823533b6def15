//! Process-level settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};
use crate::export::ExportSettings;

use super::loader::RateTableLoader;
use super::types::RateTable;

/// Address the server binds to when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Environment variable naming an optional YAML rate table.
pub const RATE_TABLE_PATH_VAR: &str = "RATE_TABLE_PATH";

/// Environment variable overriding the bind address.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

/// Environment variable setting how many times an export is attempted.
pub const EXPORT_MAX_ATTEMPTS_VAR: &str = "EXPORT_MAX_ATTEMPTS";

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: SocketAddr,
    /// YAML rate table; the built-in table is used when `None`.
    pub rate_table_path: Option<PathBuf>,
    /// Renderer attempts per export.
    pub export_max_attempts: u32,
}

impl ServerSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| EngineError::ConfigParseError {
                path: BIND_ADDR_VAR.to_string(),
                message: format!("'{}' is not a socket address", raw_addr),
            })?;

        let rate_table_path = lookup(RATE_TABLE_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let export_max_attempts = match lookup(EXPORT_MAX_ATTEMPTS_VAR)
            .filter(|v| !v.trim().is_empty())
        {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(attempts) if attempts > 0 => attempts,
                _ => {
                    return Err(EngineError::ConfigParseError {
                        path: EXPORT_MAX_ATTEMPTS_VAR.to_string(),
                        message: format!("'{}' is not a positive attempt count", raw),
                    });
                }
            },
            None => ExportSettings::default().max_attempts,
        };

        Ok(Self {
            bind_addr,
            rate_table_path,
            export_max_attempts,
        })
    }

    /// Loads the configured rate table, falling back to the built-in one.
    pub fn rate_table(&self) -> EngineResult<RateTable> {
        match &self.rate_table_path {
            Some(path) => RateTableLoader::load(path),
            None => Ok(RateTable::builtin()),
        }
    }

    /// Export settings with the configured attempt count.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            max_attempts: self.export_max_attempts,
            ..Default::default()
        }
    }
}
