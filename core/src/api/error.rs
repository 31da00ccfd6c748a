//! Public error types for the Lispy API.
//!
//! Internal errors are converted to these types at API boundaries.

use crate::evaluator::EvalError;
use crate::parser::{ParseError, Span};
use core::fmt;
use thiserror::Error;

/// Public error type for all Lispy operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input does not match the grammar. The evaluator never ran.
    #[error("Syntax error: {}", summarize(.diagnostics))]
    Syntax {
        diagnostics: Vec<Diagnostic>,
        /// The rejected input, kept for rendering.
        input: String,
    },

    /// A well-formed program failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] EvalError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Syntax {
            diagnostics: vec![err.to_diagnostic()],
            input: err.source,
        }
    }
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}
