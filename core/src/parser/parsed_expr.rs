use core::fmt;

/// A parsed program together with the source it was parsed from.
///
/// Every node borrows from the arena passed to [`parse`](super::parse), so
/// the whole tree is released when that arena is dropped.
#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub source: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    /// A numeric literal, kept as written. Range checking happens at
    /// evaluation time.
    Number(&'a str),

    /// An operator applied to one or more operands.
    ///
    /// The operator is kept as its symbol so that trees built outside the
    /// grammar can still carry operators the evaluator does not know.
    Apply {
        op: &'a str,
        head: &'a Expr<'a>,
        tail: &'a [&'a Expr<'a>],
    },
}

impl<'a> Expr<'a> {
    /// Operands of an application in evaluation order. Numbers have none.
    pub fn operands(&self) -> impl Iterator<Item = &'a Expr<'a>> + '_ {
        let (head, tail): (Option<&'a Expr<'a>>, &'a [&'a Expr<'a>]) = match self {
            Expr::Number(_) => (None, &[]),
            Expr::Apply { head, tail, .. } => (Some(*head), *tail),
        };
        head.into_iter().chain(tail.iter().copied())
    }
}

// Renders the tree back in prefix notation, parenthesizing every application.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(text) => f.write_str(text),
            Expr::Apply { op, .. } => {
                write!(f, "({}", op)?;
                for operand in self.operands() {
                    write!(f, " {}", operand)?;
                }
                f.write_str(")")
            }
        }
    }
}
