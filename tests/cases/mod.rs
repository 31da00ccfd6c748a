#![allow(dead_code)]

use lispy::{Engine, EngineOptions, Error, EvalError};
use once_cell::sync::Lazy;

/// What a single input line turns into, without the syntax error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Value(i64),
    Runtime(EvalError),
    Syntax,
}

pub use Outcome::*;

pub fn run(input: &str) -> Outcome {
    run_with(&Engine::new(EngineOptions::default()), input)
}

pub fn run_with(engine: &Engine, input: &str) -> Outcome {
    match engine.run(input) {
        Ok(value) => Value(value),
        Err(Error::Runtime(e)) => Runtime(e),
        Err(Error::Syntax { .. }) => Syntax,
    }
}

pub struct TestCase {
    pub name: &'static str,
    pub input: &'static str,
    pub outcome: Outcome,
}

/// Lines whose results are part of the calculator's documented behavior.
pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "sum",
            input: "+ 1 2 3",
            outcome: Value(6),
        },
        TestCase {
            name: "product",
            input: "* 2 3 4",
            outcome: Value(24),
        },
        TestCase {
            name: "difference",
            input: "- 10 2 3",
            outcome: Value(5),
        },
        TestCase {
            name: "divide_by_zero",
            input: "/ 10 0",
            outcome: Runtime(EvalError::DivideByZero),
        },
        TestCase {
            name: "fold_then_divide_by_zero",
            input: "/ 1 2 0",
            outcome: Runtime(EvalError::DivideByZero),
        },
        TestCase {
            name: "unsupported_operator",
            input: "^ 1 2",
            outcome: Syntax,
        },
        TestCase {
            name: "literal_out_of_range",
            input: "+ 99999999999999999999",
            outcome: Runtime(EvalError::InvalidNumericLiteral),
        },
        TestCase {
            name: "unbalanced_parens",
            input: "(+ 1 2",
            outcome: Syntax,
        },
    ]
});

#[allow(unused_macros)]
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        outcome: $outcome:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(
                cases::run($input),
                $outcome,
                "input: {:?}",
                $input
            );
        }
    };
}
