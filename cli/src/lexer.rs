use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"-?[0-9]+")]
    Number,

    #[regex(r"[+\-*/%]")]
    Operator,
}

/// Split a line into classified byte ranges.
///
/// Whitespace is not reported. Characters no token matches come back as
/// `None` so callers can flag them.
pub fn classify(line: &str) -> Vec<(Option<Token>, std::ops::Range<usize>)> {
    Token::lexer(line)
        .spanned()
        .map(|(token, span)| (token.ok(), span))
        .collect()
}
