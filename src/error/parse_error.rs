use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character that starts no token.
    UnexpectedCharacter {
        /// The offending source text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A string literal was not closed before the end of its line.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The token stream did not match the grammar.
    UnexpectedToken {
        /// The token the parser stopped at.
        token:   Token,
        /// What the parser expected instead.
        message: String,
    },
}

impl ParseError {
    /// Builds a grammar error at `token`.
    #[must_use]
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        Self::UnexpectedToken { token:   token.clone(),
                                message: message.into(), }
    }

    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
            Self::UnexpectedToken { token, .. } => token.line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { lexeme, line } => {
                write!(f, "[line {line}] Error: Unexpected character '{lexeme}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "[line {line}] Error: Unterminated string.")
            },
            Self::UnexpectedToken { token, message } => {
                write!(f, "[line {}] Error at {token}: {message}", token.line)
            },
        }
    }
}

impl std::error::Error for ParseError {}
