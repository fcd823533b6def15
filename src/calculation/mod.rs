//! Calculation logic for the Recruiter Margin Calculator.
//!
//! This module contains the calculation functions that turn a bill rate,
//! margin and schedule into a compliant pay breakdown: gross weekly pay,
//! stipend scaling against the $20/hour taxable floor, taxable wages, and
//! the bonus/travel spread with annualisation.

mod bonus_spread;
mod compensation;
mod gross_pay;
mod rounding;
mod stipend_scaling;
mod taxable_wages;

pub use bonus_spread::{BonusSpreadResult, spread_bonus_and_travel};
pub use compensation::{UNKNOWN_DESTINATION, calculate, compute};
pub use gross_pay::{GrossPayResult, calculate_gross_weekly};
pub use rounding::{MONEY_DECIMAL_PLACES, round2};
pub use stipend_scaling::{
    StipendScalingResult, TAXABLE_FLOOR_UNREACHABLE, minimum_taxable_hourly, scale_stipends,
    stipend_scale_factor,
};
pub use taxable_wages::{TaxableWagesResult, calculate_taxable_wages};
