use bumpalo::Bump;
use clap::Parser;
use lispy::{
    Engine, EngineOptions, Error, render_error_to_string, render_error_to_string_no_color,
};
use lispy_core::parser::DEFAULT_MAX_DEPTH;
use miette::{IntoDiagnostic, Result};
use reedline::{
    Emacs, FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, Signal, default_emacs_keybindings,
};
use std::borrow::Cow;
use std::io::{BufRead, BufReader, Write};
use tracing::debug;

mod highlighter;
mod lexer;

const HISTORY_CAPACITY: usize = 1000;

/// Lispy - a prefix-notation integer calculator
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(about = "Evaluate prefix-notation arithmetic, e.g. `+ 1 (* 2 3)`", long_about = None)]
struct Args {
    /// Print the parsed tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Maximum parenthesis nesting accepted by the parser
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Render syntax errors without colors
    #[arg(long)]
    no_color: bool,

    /// Program to evaluate (if not provided, reads from stdin)
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

/// Fixed `lispy> ` prompt with no right-hand segment.
struct LispyPrompt;

impl Prompt for LispyPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("lispy")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("::: ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

/// Startup text for interactive sessions. Printed with `println!`, it ends
/// in a blank line.
fn banner() -> String {
    format!(
        "Lispy version {}\nPress Ctrl+C or Ctrl+D to exit\n",
        env!("CARGO_PKG_VERSION")
    )
}

fn setup_reedline() -> Result<(Reedline, LispyPrompt)> {
    // In-memory only: nothing is written to disk.
    let history = Box::new(FileBackedHistory::new(HISTORY_CAPACITY).into_diagnostic()?);

    let edit_mode = Box::new(Emacs::new(default_emacs_keybindings()));

    let line_editor = Reedline::create()
        .with_history(history)
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_edit_mode(edit_mode);

    Ok((line_editor, LispyPrompt))
}

/// Parse and evaluate one line, writing the result or runtime error to `out`
/// and syntax errors to `err`.
///
/// The line's parse tree lives in an arena dropped before this returns.
fn interpret_input(
    engine: &Engine,
    input: &str,
    args: &Args,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    debug!(input, "Interpreting line");
    let arena = Bump::new();
    let input = arena.alloc_str(input);

    // Parse
    let parsed = match engine.parse(&arena, input) {
        Ok(parsed) => parsed,
        Err(e) => {
            let rendered = if args.no_color {
                render_error_to_string_no_color(&e)
            } else {
                render_error_to_string(&e)
            };
            write!(err, "{}", rendered).into_diagnostic()?;
            return Ok(());
        }
    };

    if args.debug_parse {
        writeln!(out, "=== Parsed Tree ===").into_diagnostic()?;
        writeln!(out, "{:#?}", parsed.expr).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
    }

    // Evaluate
    match engine.eval(&parsed) {
        Ok(value) => writeln!(out, "{}", value).into_diagnostic()?,
        Err(Error::Runtime(e)) => writeln!(out, "{}", e).into_diagnostic()?,
        Err(e @ Error::Syntax { .. }) => {
            write!(err, "{}", render_error_to_string_no_color(&e)).into_diagnostic()?
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(EngineOptions {
        max_depth: args.max_depth,
    });

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        return interpret_input(&engine, expr, &args, &mut stdout.lock(), &mut stderr.lock());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline()?;

        println!("{}", banner());

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    if buffer.trim().is_empty() {
                        continue;
                    }
                    interpret_input(
                        &engine,
                        &buffer,
                        &args,
                        &mut stdout.lock(),
                        &mut stderr.lock(),
                    )?;
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let reader = BufReader::new(std::io::stdin().lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            if line.trim().is_empty() {
                continue;
            }
            interpret_input(&engine, &line, &args, &mut stdout.lock(), &mut stderr.lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(debug_parse: bool) -> Args {
        Args {
            debug_parse,
            max_depth: DEFAULT_MAX_DEPTH,
            no_color: true,
            expression: None,
        }
    }

    fn interpret(input: &str, args: &Args) -> (String, String) {
        let engine = Engine::new(EngineOptions {
            max_depth: args.max_depth,
        });
        let mut out = Vec::new();
        let mut err = Vec::new();
        interpret_input(&engine, input, args, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_prints_value() {
        let (out, err) = interpret("+ 1 2 3", &args(false));
        assert_eq!(out, "6\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_prints_negative_value() {
        let (out, _) = interpret("- 1 10", &args(false));
        assert_eq!(out, "-9\n");
    }

    #[test]
    fn test_prints_runtime_errors_to_stdout() {
        let cases = [
            ("/ 10 0", "Error: Division By Zero!\n"),
            ("% 10 0", "Error: Division By Zero!\n"),
            ("+ 99999999999999999999", "Error: Invalid Number!\n"),
        ];
        for (input, expected) in cases {
            let (out, err) = interpret(input, &args(false));
            assert_eq!(out, expected, "input: {}", input);
            assert_eq!(err, "");
        }
    }

    #[test]
    fn test_syntax_errors_go_to_stderr() {
        let (out, err) = interpret("(+ 1 2", &args(false));
        assert_eq!(out, "");
        assert!(err.contains("(+ 1 2"), "stderr: {}", err);
    }

    #[test]
    fn test_debug_parse_prints_tree() {
        let (out, _) = interpret("+ 1 (* 2 3)", &args(true));
        assert!(out.starts_with("=== Parsed Tree ===\n"));
        assert!(out.contains("Apply"));
        assert!(out.ends_with("\n7\n"));
    }

    #[test]
    fn test_max_depth_argument() {
        let shallow = Args {
            max_depth: 1,
            ..args(false)
        };
        let (out, err) = interpret("+ (+ (+ 1))", &shallow);
        assert_eq!(out, "");
        assert!(err.contains("nesting depth"), "stderr: {}", err);
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            banner(),
            "Lispy version 0.0.1\nPress Ctrl+C or Ctrl+D to exit\n"
        );
    }

    #[test]
    fn test_prompt() {
        let prompt = LispyPrompt;
        let rendered = format!(
            "{}{}",
            prompt.render_prompt_left(),
            prompt.render_prompt_indicator(PromptEditMode::Default)
        );
        assert_eq!(rendered, "lispy> ");
    }

    #[test]
    fn test_args_accept_leading_minus_expression() {
        let args = Args::parse_from(["lispy", "- 10 2 3"]);
        assert_eq!(args.expression.as_deref(), Some("- 10 2 3"));

        let args = Args::parse_from(["lispy", "-5"]);
        assert_eq!(args.expression.as_deref(), Some("-5"));
    }
}
