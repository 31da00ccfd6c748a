//! The Lispy engine.

use super::{EngineOptions, Error};
use crate::evaluator;
use crate::parser::{self, ParsedExpr};
use bumpalo::Bump;
use tracing::debug;

/// Parses and evaluates Lispy programs.
///
/// The engine itself holds no per-line state: parse trees live in an arena
/// owned by the caller (see [`Engine::parse`]) or by a single call to
/// [`Engine::run`].
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse a program into `arena`.
    pub fn parse<'a>(&self, arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, Error> {
        Ok(parser::parse_with_max_depth(
            arena,
            source,
            self.options.max_depth,
        )?)
    }

    /// Evaluate a parsed program.
    pub fn eval(&self, parsed: &ParsedExpr<'_>) -> Result<i64, Error> {
        Ok(evaluator::eval(parsed.expr)?)
    }

    /// Parse and evaluate one program.
    ///
    /// The parse tree is dropped before this returns, on every path.
    pub fn run(&self, source: &str) -> Result<i64, Error> {
        let arena = Bump::new();
        let source = arena.alloc_str(source);
        let parsed = self.parse(&arena, source)?;
        let result = self.eval(&parsed);
        debug!(
            source = parsed.source,
            allocated = arena.allocated_bytes(),
            "Evaluated line"
        );
        result
    }
}
