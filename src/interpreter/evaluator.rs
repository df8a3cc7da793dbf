/// Core evaluation logic and interpreter state.
///
/// Contains the interpreter itself, statement execution, expression dispatch,
/// block scoping and error reporting.
pub mod core;

/// Binary operator evaluation logic.
///
/// Arithmetic, concatenation, comparisons and equality.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Short-circuiting `dan` / `atau`.
pub mod logic;

/// Function calls.
///
/// Checks the callee and argument count, binds parameters in a fresh scope and
/// turns a `balikin` completion into the call's result.
pub mod function;

/// Evaluation of `selama` loops.
pub mod while_loop;
