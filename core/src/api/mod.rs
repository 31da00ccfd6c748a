//! Public API for the Lispy calculator.
//!
//! An [`Engine`] holds the configuration for parsing and evaluating
//! programs. Each call to [`Engine::run`] parses one line into its own arena,
//! evaluates it and releases the tree before returning.
//!
//! # Example
//!
//! ```
//! use lispy_core::api::{Engine, EngineOptions, Error};
//! use lispy_core::evaluator::EvalError;
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! assert_eq!(engine.run("+ 1 2 3").unwrap(), 6);
//! assert!(matches!(
//!     engine.run("/ 10 0"),
//!     Err(Error::Runtime(EvalError::DivideByZero))
//! ));
//! assert!(matches!(engine.run("(+ 1 2"), Err(Error::Syntax { .. })));
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::Engine;
pub use error::{Diagnostic, Error, Severity};
pub use options::EngineOptions;
