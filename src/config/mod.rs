//! Configuration loading and management for the Recruiter Margin Calculator.
//!
//! This module provides the per-diem [`RateTable`], loading of rate tables
//! from YAML files, and the environment-driven settings of the server binary.
//!
//! # Example
//!
//! ```no_run
//! use recruiter_margin_calc::config::RateTableLoader;
//!
//! let table = RateTableLoader::load("./config/gsa_rates.yaml").unwrap();
//! println!("Destinations: {:?}", table.destinations());
//! ```

mod loader;
mod settings;
mod types;

pub use loader::RateTableLoader;
pub use settings::{
    BIND_ADDR_VAR, DEFAULT_BIND_ADDR, EXPORT_MAX_ATTEMPTS_VAR, RATE_TABLE_PATH_VAR, ServerSettings,
};
pub use types::{RateTable, RateTableFile};
