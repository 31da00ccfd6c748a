use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span};

/// Parser error with context
#[derive(Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// Unclosed delimiter
    UnclosedDelimiter { delimiter: char },
    /// Maximum nesting depth exceeded
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: String, span: Span) -> Self {
        Self { kind, source, span }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                let mut help = vec![];
                if found == "'('" && expected.contains("operator") {
                    help.push(
                        "The outermost operator is written without parentheses, e.g. `+ 1 (* 2 3)`"
                            .to_string(),
                    );
                }
                (
                    format!("Expected {}, found {}", expected, found),
                    "P001",
                    help,
                )
            }
            ParseErrorKind::UnclosedDelimiter { delimiter } => (
                format!("Unclosed delimiter '{}'", delimiter),
                "P002",
                vec!["Add the missing closing delimiter".to_string()],
            ),
            ParseErrorKind::MaxDepthExceeded { max_depth, .. } => (
                format!(
                    "Expression nesting depth exceeds maximum of {} levels",
                    max_depth
                ),
                "P004",
                vec!["Reduce nesting or simplify the expression".to_string()],
            ),
            ParseErrorKind::Other { message } => (message.clone(), "P999", vec![]),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            span: self.span.clone(),
            help,
            code: Some(code.to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(f, "{}: {}", diagnostic.severity, diagnostic.message)?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &diagnostic.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    // Running out of input while a paren is still open is reported against
    // the paren itself, which is where the fix belongs.
    if span.0.start >= source.trim_end().len() {
        if let Some(open) = innermost_unclosed_paren(source) {
            return ParseError::new(
                ParseErrorKind::UnclosedDelimiter { delimiter: '(' },
                source.to_string(),
                Span::new(open, open + 1),
            );
        }
    }

    let kind = match err.variant {
        ErrorVariant::ParsingError { positives, .. } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: describe_found(source, span.0.start),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source.to_string(), span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts = Vec::new();

    for rule in rules {
        // An operand is a number or a parenthesized application, but pest
        // only reports the `number` attempt.
        let expected: &[&str] = match rule {
            Rule::number => &["number", "'('"],
            Rule::operator => &["operator"],
            Rule::EOI => &["end of input"],
            _ => &["expression"],
        };
        for concept in expected {
            if !concepts.contains(concept) {
                concepts.push(*concept);
            }
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Describe the input at `pos`, which is where matching stopped.
fn describe_found(source: &str, pos: usize) -> String {
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        None => "end of input".to_string(),
        Some(c) => format!("'{}'", c.escape_debug()),
    }
}

fn innermost_unclosed_paren(source: &str) -> Option<usize> {
    let mut open = Vec::new();
    for (pos, c) in source.char_indices() {
        match c {
            '(' => open.push(pos),
            ')' => {
                open.pop();
            }
            _ => {}
        }
    }
    open.pop()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_to_diagnostic() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: "expression".to_string(),
                found: "')'".to_string(),
            },
            "test source".to_string(),
            Span(10..20),
        );

        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert!(diagnostic.message.contains("Expected expression"));
        assert!(diagnostic.message.contains("found ')'"));
        assert_eq!(diagnostic.code, Some("P001".to_string()));
        assert!(diagnostic.help.is_empty());
    }

    #[test]
    fn test_parenthesized_program_gets_help() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: "operator".to_string(),
                found: "'('".to_string(),
            },
            "(+ 1 2)".to_string(),
            Span(0..0),
        );

        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.help.len(), 1);
        assert!(diagnostic.help[0].contains("without parentheses"));
    }

    #[test]
    fn test_format_expected_rules() {
        assert_eq!(format_expected_rules(&[Rule::number]), "number or '('");
        assert_eq!(format_expected_rules(&[Rule::operator]), "operator");
        assert_eq!(
            format_expected_rules(&[Rule::number, Rule::expression]),
            "number, '(' or expression"
        );
        assert_eq!(
            format_expected_rules(&[Rule::operator, Rule::number, Rule::EOI]),
            "operator, number, '(' or end of input"
        );
        assert_eq!(format_expected_rules(&[]), "something else");
    }

    #[test]
    fn test_describe_found() {
        assert_eq!(describe_found("^ 1 2", 0), "'^'");
        assert_eq!(describe_found("+ 1", 3), "end of input");
        assert_eq!(describe_found("+\t", 1), "'\\t'");
    }

    #[test]
    fn test_innermost_unclosed_paren() {
        assert_eq!(innermost_unclosed_paren("+ (+ 1 (2"), Some(7));
        assert_eq!(innermost_unclosed_paren("+ (+ 1 2)"), None);
        assert_eq!(innermost_unclosed_paren("+ (+ (1) 2"), Some(2));
    }

    #[test]
    fn test_custom_error_conversion() {
        let pest_err = pest::error::Error::<Rule>::new_from_pos(
            pest::error::ErrorVariant::CustomError {
                message: "something odd".to_string(),
            },
            pest::Position::from_start("+ 1"),
        );

        let parse_err = convert_pest_error(pest_err, "+ 1");
        assert_eq!(
            parse_err.kind,
            ParseErrorKind::Other {
                message: "something odd".to_string()
            }
        );
        assert_eq!(parse_err.span, Span(0..0));
    }
}
