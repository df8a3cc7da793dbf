/// Lexing and parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing source
/// code. Parse errors include unexpected characters, unterminated strings and
/// grammar violations detected before any statement runs.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing statements:
/// operand type mismatches, undefined variables, calls to non-callable values
/// and arity mismatches.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
