//! Grammar and evaluator for Lispy, a prefix-notation integer calculator.
//!
//! A program is a bare operator followed by one or more expressions, where an
//! expression is an integer literal or a parenthesized application:
//!
//! ```text
//! + 1 (* 2 3) (- 10 4)
//! ```

pub mod api;
pub mod evaluator;
pub mod parser;
