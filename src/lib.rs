//! # indoscript
//!
//! indoscript is a tree-walking interpreter for a small imperative scripting
//! language with Indonesian keywords. It tokenizes, parses and executes
//! programs with variables, blocks, conditionals, loops and first-class
//! functions with lexical closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    evaluator::core::Interpreter,
    lexer::{TokenKind, tokenize},
    parser::core::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps the tokens needed to report errors at the right place.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing or
/// evaluating code. Each error carries the line, and where possible the token,
/// it should be reported at.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Formats them as one-line diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scopes and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

/// The outcome of running one piece of source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every statement executed.
    Completed,
    /// Lexing or parsing failed; nothing was executed.
    SyntaxError,
    /// Execution stopped at a runtime error.
    RuntimeError,
}

impl Status {
    /// The process exit code for this outcome: `0`, `65` or `70`.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::SyntaxError => 65,
            Self::RuntimeError => 70,
        }
    }
}

/// Tokenizes, parses and executes `source` on `interpreter`.
///
/// Lexical and parse errors are all written to the interpreter's diagnostic
/// sink, one per line, and the program is then not executed. Otherwise the
/// statements run against the interpreter's global scope, which keeps every
/// binding for the next call.
///
/// # Examples
/// ```
/// use indoscript::{Status, interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::new(Vec::new(), Vec::new());
///
/// let status = run("fungsi kuadrat(x) { balikin x * x; } cetak kuadrat(4);",
///                  &mut interpreter);
/// assert_eq!(status, Status::Completed);
/// assert_eq!(String::from_utf8_lossy(interpreter.output()), "16\n");
///
/// // `y` is not defined.
/// assert_eq!(run("cetak y;", &mut interpreter), Status::RuntimeError);
///
/// // Missing semicolon.
/// assert_eq!(run("cetak 1", &mut interpreter), Status::SyntaxError);
/// ```
pub fn run<W: Write, E: Write>(source: &str, interpreter: &mut Interpreter<W, E>) -> Status {
    let (tokens, lex_errors) = tokenize(source);
    let diagnostics = interpreter.diagnostics_mut();

    for error in &lex_errors {
        if let Err(write_error) = writeln!(diagnostics, "{error}") {
            tracing::error!(%write_error, %error, "could not report lexical error");
        }
    }

    let (statements, had_parse_error) = match parse_program(&tokens, diagnostics) {
        Ok(parsed) => parsed,
        Err(write_error) => {
            tracing::error!(%write_error, "could not report parse errors");
            return Status::SyntaxError;
        },
    };

    if had_parse_error || !lex_errors.is_empty() {
        tracing::debug!(lexical = lex_errors.len(), "not executing program with syntax errors");
        return Status::SyntaxError;
    }

    tracing::debug!(statements = statements.len(), "executing program");

    if interpreter.interpret(&statements) {
        Status::RuntimeError
    } else {
        Status::Completed
    }
}

/// Whether `source` leaves a `{` open, so an interactive prompt should keep
/// reading lines before running it.
///
/// Braces inside strings and comments are not counted. Surplus `}` never asks
/// for more input; the parser reports them.
///
/// # Examples
/// ```
/// use indoscript::needs_more_input;
///
/// assert!(needs_more_input("fungsi f() {"));
/// assert!(!needs_more_input("fungsi f() {\n  balikin 1;\n}"));
/// ```
#[must_use]
pub fn needs_more_input(source: &str) -> bool {
    let (tokens, _) = tokenize(source);
    let depth = tokens.iter().fold(0_isize, |depth, token| match token.kind {
                                 TokenKind::LBrace => depth + 1,
                                 TokenKind::RBrace => depth - 1,
                                 _ => depth,
                             });
    depth > 0
}
