//! HTML rendering of a report for print/PDF conversion.

use std::fmt::Write;

use crate::error::{EngineError, EngineResult};
use crate::report::ResultReport;

use super::{DocumentRenderer, ExportSettings, RenderedDocument};

/// Renders a report as a standalone, print-ready HTML page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDocumentRenderer;

impl DocumentRenderer for HtmlDocumentRenderer {
    fn render(
        &self,
        report: &ResultReport,
        settings: &ExportSettings,
    ) -> EngineResult<RenderedDocument> {
        let body = render_html(report, settings).map_err(|e| EngineError::ExportFailed {
            message: e.to_string(),
        })?;

        Ok(RenderedDocument {
            content_type: "text/html; charset=utf-8".to_string(),
            body,
        })
    }
}

fn render_html(report: &ResultReport, settings: &ExportSettings) -> Result<String, std::fmt::Error> {
    let mut out = String::with_capacity(2048);

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", escape(&report.title))?;
    writeln!(
        out,
        "<style>@page {{ margin: {}in; }} body {{ font-family: sans-serif; }} .emphasis {{ font-size: 1.125rem; }} .advisory {{ color: #dc2626; font-size: 0.875rem; }}</style>",
        settings.margin_inches.normalize()
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{}</h2>", escape(&report.title))?;
    writeln!(out, "<div>Destination: <strong>{}</strong></div>", escape(&report.destination))?;
    if let Some(facility) = &report.facility {
        writeln!(out, "<div>School: <strong>{}</strong></div>", escape(facility))?;
    }
    writeln!(out, "<h3>Results</h3>")?;

    for line in &report.lines {
        let class = if line.emphasis { " class=\"emphasis\"" } else { "" };
        writeln!(
            out,
            "<div{}>{}: <strong>{}</strong></div>",
            class,
            escape(&line.label),
            escape(&line.value)
        )?;
    }

    if let Some(advisory) = &report.advisory {
        writeln!(out, "<div class=\"advisory\">* {}</div>", escape(advisory))?;
    }
    for warning in &report.warnings {
        writeln!(out, "<div class=\"advisory\">! {}</div>", escape(warning))?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    Ok(out)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
