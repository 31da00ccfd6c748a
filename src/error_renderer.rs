//! Error rendering using ariadne
//!
//! Syntax errors are shown with the offending line, a label under the
//! failing position and any help text. Runtime errors are a single line.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

/// Name shown for the source in rendered reports.
const SOURCE_ID: &str = "<stdin>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use lispy::{Engine, render_error};
///
/// let engine = Engine::default();
/// if let Err(e) = engine.run("+ 1 (2") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, logs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Syntax { diagnostics, input } => {
            render_diagnostics(input, diagnostics, writer, use_color)
        }
        Error::Runtime(e) => writeln!(writer, "{}", e),
    }
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
        };

        let range = label_range(source, diag.span.0.clone());
        let mut report = Report::build(kind, (SOURCE_ID, range.clone()))
            .with_message(&diag.message)
            .with_config(
                ariadne::Config::default()
                    .with_color(use_color)
                    .with_index_type(IndexType::Byte),
            );

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, range))
                .with_message(&diag.message)
                .with_color(color),
        );

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        report
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}

/// Widen an empty span to cover the character it points at, so the label
/// has something to underline. Spans at the end of input stay empty.
///
/// Ranges are byte offsets, matching the report's `IndexType::Byte`.
fn label_range(source: &str, range: Range<usize>) -> Range<usize> {
    if !range.is_empty() {
        return range;
    }
    match source.get(range.start..).and_then(|rest| rest.chars().next()) {
        Some(c) => range.start..range.start + c.len_utf8(),
        None => range,
    }
}
