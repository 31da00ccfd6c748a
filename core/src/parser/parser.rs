use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::{Expr, ParsedExpr, Span};
use bumpalo::Bump;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;
use tracing::{debug, trace};

/// Default limit on parenthesis nesting, see [`parse_with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Parser)]
#[grammar = "parser/lispy.pest"]
pub struct LispyParser;

/// Parse a whole program using [`DEFAULT_MAX_DEPTH`].
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

/// Parse a whole program, rejecting inputs whose parentheses nest deeper than
/// `max_depth`.
///
/// The depth check runs before the grammar, so neither the grammar engine nor
/// later tree walks recurse deeper than the limit.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedExpr<'a>, ParseError> {
    check_nesting(source, max_depth)?;

    let mut pairs = LispyParser::parse(Rule::program, source).map_err(|e| {
        let err = convert_pest_error(e, source);
        debug!(error = %err, "Syntax error");
        err
    })?;
    let program = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            source.to_string(),
            Span::new(0, source.len()),
        )
    })?;

    let span = program.as_span();
    let expr = build_application(arena, program.into_inner(), span, source)?;
    trace!(expr = %expr, "Parsed program");
    Ok(ParsedExpr { expr, source })
}

fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for (pos, c) in source.char_indices() {
        match c {
            '(' => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                        source.to_string(),
                        Span::new(pos, pos + 1),
                    ));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn missing_pair(what: &str, span: pest::Span<'_>, source: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: format!("missing {}", what),
        },
        source.to_string(),
        span.into(),
    )
}

/// Build an application from the children of a `program` or a parenthesized
/// `expression`: an operator followed by one or more expressions.
fn build_application<'a>(
    arena: &'a Bump,
    mut pairs: Pairs<'a, Rule>,
    span: pest::Span<'a>,
    source: &str,
) -> Result<&'a Expr<'a>, ParseError> {
    let op = pairs
        .next()
        .filter(|pair| pair.as_rule() == Rule::operator)
        .ok_or_else(|| missing_pair("operator", span, source))?
        .as_str();

    let mut operands = Vec::new();
    for pair in pairs {
        match pair.as_rule() {
            Rule::expression => operands.push(build_expr(arena, pair, source)?),
            Rule::EOI => {}
            rule => {
                return Err(ParseError::new(
                    ParseErrorKind::Other {
                        message: format!("Unhandled rule: {:?}", rule),
                    },
                    source.to_string(),
                    pair.as_span().into(),
                ));
            }
        }
    }

    let (head, tail) = operands
        .split_first()
        .ok_or_else(|| missing_pair("operand", span, source))?;

    let expr: &'a Expr<'a> = arena.alloc(Expr::Apply {
        op,
        head: *head,
        tail: arena.alloc_slice_copy(tail),
    });
    Ok(expr)
}

fn build_expr<'a>(
    arena: &'a Bump,
    pair: Pair<'a, Rule>,
    source: &str,
) -> Result<&'a Expr<'a>, ParseError> {
    let span = pair.as_span();
    let inner = pair.into_inner();
    match inner.peek() {
        Some(first) if first.as_rule() == Rule::number => {
            let expr: &'a Expr<'a> = arena.alloc(Expr::Number(first.as_str()));
            Ok(expr)
        }
        Some(first) if first.as_rule() == Rule::operator => {
            build_application(arena, inner, span, source)
        }
        _ => Err(missing_pair("number or application", span, source)),
    }
}
