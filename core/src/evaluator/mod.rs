//! Tree-walking evaluator for Lispy programs.
//!
//! The evaluator reduces a parsed [`Expr`] to a single integer, or to the
//! first [`EvalError`] produced while folding operators over operands.
//!
//! ## Design Principles
//!
//! - **Never panic**: overflow wraps, division by zero and bad literals are errors
//! - **Errors are values**: every operand is evaluated, and errors travel through
//!   the same `Result` channel as numbers until they reach the caller unchanged
//! - **Stack-safe for parsed input**: the parser bounds nesting depth, and the
//!   evaluator recurses at most once per nesting level
//!
//! ## Example
//!
//! ```
//! use lispy_core::{evaluator, parser};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "+ 1 (* 2 3)").unwrap();
//! assert_eq!(evaluator::eval(parsed.expr), Ok(7));
//! ```

mod error;
mod eval;
mod operators;


pub use error::EvalError;
pub use operators::apply_operator;

use crate::parser::Expr;
use tracing::debug;

/// The result of evaluating any node: a number, or the error that stopped it.
pub type EvalResult = Result<i64, EvalError>;

/// Evaluate a parsed expression.
pub fn eval(expr: &Expr<'_>) -> EvalResult {
    let result = eval::eval_expr(expr);
    debug!(?result, "Evaluated expression");
    result
}
