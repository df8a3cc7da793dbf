use crate::interpreter::lexer::Token;

#[derive(Debug)]
/// Represents all errors that can occur during execution.
///
/// Every variant carries the token that triggered it so the report can name
/// the offending source text and its line.
pub enum RuntimeError {
    /// An operator was applied to operands of the wrong kind.
    TypeMismatch {
        /// The operator token.
        token:   Token,
        /// Details about the mismatch.
        details: String,
    },
    /// Read of or assignment to a name bound in no enclosing scope.
    UndefinedVariable {
        /// The variable name token.
        name: Token,
    },
    /// Tried to call a value that is not a function.
    NotCallable {
        /// The closing parenthesis of the call.
        token: Token,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The closing parenthesis of the call.
        token:    Token,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
    },
    /// `balikin` was executed outside of any function body.
    ReturnOutsideFunction {
        /// The `balikin` keyword.
        token: Token,
    },
    /// The output sink refused a `cetak` line.
    Output {
        /// The `cetak` keyword.
        token:  Token,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

impl RuntimeError {
    /// The token the error is reported at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::TypeMismatch { token, .. }
            | Self::UndefinedVariable { name: token }
            | Self::NotCallable { token }
            | Self::ArgumentCountMismatch { token, .. }
            | Self::ReturnOutsideFunction { token }
            | Self::Output { token, .. } => token,
        }
    }

    /// The source line the error is reported at.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token().line
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = self.token();
        write!(f, "[line {}] Runtime error at {token}: ", token.line)?;

        match self {
            Self::TypeMismatch { details, .. } => write!(f, "{details}."),
            Self::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{}'.", name.lexeme)
            },
            Self::NotCallable { .. } => write!(f, "Can only call functions."),
            Self::ArgumentCountMismatch { expected, found, .. } => {
                write!(f, "Expected {expected} arguments but got {found}.")
            },
            Self::ReturnOutsideFunction { .. } => {
                write!(f, "Cannot return from top-level code.")
            },
            Self::Output { source, .. } => write!(f, "Failed to write output: {source}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}
