/// The evaluator module executes the syntax tree.
///
/// The evaluator walks statements and expressions, applies operators, manages
/// the scope chain and produces program output. It is the execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Executes statements and reports how each one completed.
/// - Evaluates expressions, including short-circuit logic and calls.
/// - Reports runtime errors such as type mismatches and unbound names.
pub mod evaluator;
/// Lexical scopes.
///
/// Defines the linked chain of name-to-value maps that variables, parameters
/// and function closures live in.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a keyword, identifier, literal, operator or delimiter. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and line.
/// - Handles numeric and string literals, identifiers and keywords.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements of a program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with location info.
/// - Recovers after an error so one pass reports every independent mistake.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, strings, booleans, nil and functions.
/// - Implements truthiness, equality and printing.
pub mod value;
