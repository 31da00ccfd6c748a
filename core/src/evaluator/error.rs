//! Runtime evaluation errors.
//!
//! The `Display` text of each variant is the exact message shown to users.

use thiserror::Error;

/// Errors produced while evaluating a well-formed program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Division or remainder with a zero divisor.
    #[error("Error: Division By Zero!")]
    DivideByZero,

    /// An operator symbol the evaluator has no implementation for.
    #[error("Error: Invalid Operator!")]
    UnknownOperator,

    /// A literal that does not fit in a 64-bit signed integer.
    #[error("Error: Invalid Number!")]
    InvalidNumericLiteral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EvalError::DivideByZero.to_string(),
            "Error: Division By Zero!"
        );
        assert_eq!(
            EvalError::UnknownOperator.to_string(),
            "Error: Invalid Operator!"
        );
        assert_eq!(
            EvalError::InvalidNumericLiteral.to_string(),
            "Error: Invalid Number!"
        );
    }
}
