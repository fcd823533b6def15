//! HTTP API module for the Recruiter Margin Calculator.
//!
//! This module provides the REST API endpoints for describing the input
//! form, computing a pay breakdown, and exporting it as a document.

mod form;
mod handlers;
mod request;
mod response;
mod state;

pub use form::{FieldKind, FormField, FormSchema};
pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, DestinationRate};
pub use state::AppState;
