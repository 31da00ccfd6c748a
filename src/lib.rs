//! Lispy - a prefix-notation integer calculator
//!
//! # Overview
//!
//! Lispy evaluates programs such as `+ 1 (* 2 3)`: a bare operator followed
//! by one or more operands, each an integer literal or a parenthesized
//! application. The supported operators are `+`, `-`, `*`, `/` and `%`,
//! folded left to right over 64-bit signed integers.
//!
//! # Quick Start
//!
//! ```
//! use lispy::{Engine, EngineOptions, Error, EvalError};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! assert_eq!(engine.run("- 10 2 3").unwrap(), 5);
//!
//! match engine.run("/ 1 2 0") {
//!     Err(Error::Runtime(e)) => assert_eq!(e, EvalError::DivideByZero),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! # Errors
//!
//! Inputs that do not match the grammar produce [`Error::Syntax`], which can
//! be rendered with a source snippet using [`render_error`] and friends.
//! Well-formed programs that cannot be evaluated produce [`Error::Runtime`],
//! whose message is one of a fixed set of lines such as
//! `Error: Division By Zero!`.

// Re-export public API from lispy_core
pub use lispy_core::api::{Diagnostic, Engine, EngineOptions, Error, Severity};

// Re-export the grammar and evaluator
pub use lispy_core::evaluator::{self, EvalError, EvalResult};
pub use lispy_core::parser::{self, Expr, Operator, ParsedExpr};

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
