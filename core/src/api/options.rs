//! Configuration options for the Lispy engine.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for the Lispy engine.
///
/// # Example
///
/// ```
/// use lispy_core::api::EngineOptions;
///
/// let options = EngineOptions { max_depth: 32 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum parenthesis nesting accepted by the parser.
    ///
    /// Default: 128
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
