//! Document export of a calculation report.
//!
//! Exporting hands a finished [`ResultReport`] to a [`DocumentRenderer`]
//! together with fixed page settings. The built-in [`HtmlDocumentRenderer`]
//! produces the print-ready page that an external PDF rasteriser turns into
//! `Recruiter_Margin_Calc.pdf`. A renderer failure is reported as
//! [`EngineError::ExportFailed`] and never touches the calculation itself.

mod html;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::report::ResultReport;

pub use html::HtmlDocumentRenderer;

/// File name of the exported document.
pub const EXPORT_FILENAME: &str = "Recruiter_Margin_Calc.pdf";

/// Page and retry settings for an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Name the exported document is saved under.
    pub filename: String,
    /// Page margin on every side, in inches.
    pub margin_inches: Decimal,
    /// Rasterisation scale passed to the PDF renderer.
    pub render_scale: u32,
    /// Renderer attempts before giving up; at least one is always made.
    pub max_attempts: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename: EXPORT_FILENAME.to_string(),
            margin_inches: Decimal::new(5, 1),
            render_scale: 2,
            max_attempts: 1,
        }
    }
}

/// The output of a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// MIME type of `body`.
    pub content_type: String,
    /// The rendered document.
    pub body: String,
}

/// Turns a report into a document.
pub trait DocumentRenderer {
    /// Renders `report` using `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ExportFailed`] when rendering fails.
    fn render(&self, report: &ResultReport, settings: &ExportSettings)
    -> EngineResult<RenderedDocument>;
}

/// A finished export, ready to hand to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Name to save the document under.
    pub filename: String,
    /// Page margin in inches.
    pub margin_inches: Decimal,
    /// Rasterisation scale.
    pub render_scale: u32,
    /// MIME type of `document`.
    pub content_type: String,
    /// The rendered document.
    pub document: String,
}

/// Renders `report`, retrying up to `settings.max_attempts` times.
///
/// # Errors
///
/// Returns the last [`EngineError::ExportFailed`] if every attempt fails.
///
/// # Examples
///
/// ```
/// use recruiter_margin_calc::calculation::calculate;
/// use recruiter_margin_calc::config::RateTable;
/// use recruiter_margin_calc::export::{ExportSettings, HtmlDocumentRenderer, export_report};
/// use recruiter_margin_calc::models::CalculationInput;
/// use recruiter_margin_calc::report::ResultReport;
///
/// let input = CalculationInput::default();
/// let result = calculate(&input, &RateTable::builtin()).unwrap();
/// let report = ResultReport::new(&input, &result);
///
/// let export = export_report(&report, &ExportSettings::default(), &HtmlDocumentRenderer).unwrap();
/// assert_eq!(export.filename, "Recruiter_Margin_Calc.pdf");
/// assert!(export.document.contains("$1992.90"));
/// ```
pub fn export_report(
    report: &ResultReport,
    settings: &ExportSettings,
    renderer: &dyn DocumentRenderer,
) -> EngineResult<ExportDocument> {
    let attempts = settings.max_attempts.max(1);
    let mut last_error = None;

    for attempt in 1..=attempts {
        match renderer.render(report, settings) {
            Ok(rendered) => {
                info!(
                    filename = %settings.filename,
                    attempt,
                    bytes = rendered.body.len(),
                    "Export rendered"
                );
                return Ok(ExportDocument {
                    filename: settings.filename.clone(),
                    margin_inches: settings.margin_inches,
                    render_scale: settings.render_scale,
                    content_type: rendered.content_type,
                    document: rendered.body,
                });
            }
            Err(err) => {
                warn!(attempt, max_attempts = attempts, error = %err, "Export attempt failed");
                last_error = Some(err);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| EngineError::ExportFailed {
        message: "renderer was never invoked".to_string(),
    }))
}
