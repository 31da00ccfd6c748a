use crate::lexer::{Token, classify};
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

#[derive(Debug)]
struct PaletteItem {
    token: Option<Token>,
    fg: Color,
}

const DEFAULT_FG: Color = Color::White;

const PALETTE: &[PaletteItem] = &[
    PaletteItem { token: Some(Token::Number), fg: Color::Cyan },
    PaletteItem { token: Some(Token::Operator), fg: Color::Magenta },
    PaletteItem { token: Some(Token::LParen), fg: Color::DarkGray },
    PaletteItem { token: Some(Token::RParen), fg: Color::DarkGray },
    PaletteItem { token: None, fg: Color::Red },
];

fn color_of(token: Option<Token>) -> Color {
    PALETTE
        .iter()
        .find(|item| item.token == token)
        .map_or(DEFAULT_FG, |item| item.fg)
}

/// Colors numbers, operators and parentheses, and flags characters the
/// grammar will reject.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token, span) in classify(line) {
            if span.start > curr_end {
                output.push((Style::new().fg(DEFAULT_FG), line[curr_end..span.start].to_string()));
            }
            output.push((Style::new().fg(color_of(token)), line[span.clone()].to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(DEFAULT_FG), line[curr_end..].to_string()));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reedline::Highlighter as _;

    #[test]
    fn test_highlight_preserves_text() {
        for line in ["+ 1 (* 2 3)", "  - 5  ", "^ 1 2", ""] {
            let styled = Highlighter.highlight(line, 0);
            let text: String = styled.buffer.iter().map(|(_, s)| s.as_str()).collect();
            assert_eq!(text, line);
        }
    }

    #[test]
    fn test_highlight_flags_unknown_characters() {
        let styled = Highlighter.highlight("^ 1", 0);
        assert_eq!(styled.buffer[0].0, Style::new().fg(Color::Red));
        assert_eq!(styled.buffer[0].1, "^");
    }
}
