//! Recruiter Margin Calculator
//!
//! This crate computes compliant travel-healthcare pay packages: given a
//! client bill rate, margin, assignment destination and schedule, it splits
//! the weekly budget into taxable wages and non-taxable GSA per-diem
//! stipends, scaling the stipends down when needed to keep at least $20/hour
//! taxable. Results can be rendered as a report and exported as a document.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod report;
