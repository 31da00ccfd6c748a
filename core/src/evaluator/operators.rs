//! Operator implementations.

use crate::evaluator::{EvalError, EvalResult};
use crate::parser::Operator;

/// Combine an accumulated value with the next operand.
///
/// An error on the left wins over one on the right, and both win over an
/// unknown operator or a zero divisor.
pub fn apply_operator(x: EvalResult, op: &str, y: EvalResult) -> EvalResult {
    let x = x?;
    let y = y?;
    let op = Operator::from_symbol(op).ok_or(EvalError::UnknownOperator)?;
    eval_binary_int(op, x, y)
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division and remainder by zero return an error.
pub(super) fn eval_binary_int(op: Operator, left: i64, right: i64) -> EvalResult {
    match op {
        Operator::Add => Ok(left.wrapping_add(right)),
        Operator::Sub => Ok(left.wrapping_sub(right)),
        Operator::Mul => Ok(left.wrapping_mul(right)),
        Operator::Div | Operator::Rem if right == 0 => Err(EvalError::DivideByZero),
        // wrapping_* handles the i64::MIN / -1 case
        Operator::Div => Ok(left.wrapping_div(right)),
        Operator::Rem => Ok(left.wrapping_rem(right)),
    }
}
