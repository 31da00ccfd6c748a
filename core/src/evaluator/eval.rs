//! Core evaluation logic.

use crate::evaluator::{EvalError, EvalResult, apply_operator};
use crate::parser::Expr;
use tracing::trace;

/// Evaluate an expression node.
pub(super) fn eval_expr(expr: &Expr<'_>) -> EvalResult {
    match expr {
        Expr::Number(text) => eval_number(text),

        Expr::Apply { op, head, tail } => {
            let mut acc = eval_expr(head);

            for operand in tail.iter() {
                // Every operand is evaluated, even after the accumulator has
                // become an error. Only the combination short-circuits.
                let next = eval_expr(operand);
                acc = apply_operator(acc, op, next);
            }

            trace!(op = *op, result = ?acc, "Folded application");
            acc
        }
    }
}

/// Parse a base-10 literal, rejecting values outside the `i64` range.
fn eval_number(text: &str) -> EvalResult {
    text.parse::<i64>().map_err(|err| {
        trace!(text, %err, "Invalid numeric literal");
        EvalError::InvalidNumericLiteral
    })
}
