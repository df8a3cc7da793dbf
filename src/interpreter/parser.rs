/// Core parsing entry points.
///
/// Contains the program-level parse loop, panic-mode recovery and the
/// expression entry point.
pub mod core;

/// Binary and logical operator parsing.
///
/// One routine per precedence level, from `atau` down to `*` and `/`. Every
/// level is left-associative.
pub mod binary;

/// Unary, call and primary expression parsing.
pub mod unary;

/// Block parsing.
///
/// Parses brace-delimited statement lists, recovering from errors inside the
/// block without abandoning it.
pub mod block;

/// Declaration and statement parsing.
///
/// Implements `fungsi`, `misal`, bare assignments and every statement form.
pub mod statement;

/// Token cursor helpers shared by all parsing routines.
pub mod utils;
