//! Core data models for the Recruiter Margin Calculator.
//!
//! This module contains all the domain models used throughout the crate.

mod calculation_input;
mod calculation_result;
mod per_diem;

pub use calculation_input::{
    CalculationInput, DEFAULT_DESTINATION, DEFAULT_FACILITY, max_input_value,
};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use per_diem::PerDiemRate;
