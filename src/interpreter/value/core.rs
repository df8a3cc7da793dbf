use std::rc::Rc;

use crate::{ast::LiteralValue, interpreter::value::function::Function};

/// Represents a runtime value in the interpreter.
///
/// Exactly one of number, string, boolean, nil or function. Operators match
/// on this enum exhaustively, so a new kind of value cannot slip past their
/// type checks.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`benar` or `salah`).
    Bool(bool),
    /// The absence of a value (`kosong`).
    Nil,
    /// A user-defined function. Compared by identity.
    Function(Rc<Function>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl Value {
    /// Maps the value to a boolean for conditions and logical operators.
    ///
    /// Numbers are truthy when nonzero, strings when non-empty and booleans
    /// are themselves. `kosong` and functions are falsy.
    ///
    /// # Example
    /// ```
    /// use indoscript::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::Nil.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Nil | Self::Function(_) => false,
        }
    }

    /// A short name for the kind of value, used in error details.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Nil => "nil",
            Self::Function(_) => "function",
        }
    }
}

/// Structural equality across all kinds.
///
/// Values of different kinds are never equal and no coercion happens.
/// Functions are equal only to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The text `cetak` writes for a value.
///
/// Numbers use the shortest decimal text that round-trips (`7`, `0.5`),
/// booleans print as `benar` / `salah` and nil as `kosong`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "benar"),
            Self::Bool(false) => write!(f, "salah"),
            Self::Nil => write!(f, "kosong"),
            Self::Function(function) => write!(f, "<fungsi {}>", function.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_print_without_trailing_zeroes() {
        assert_eq!(Value::Number(7.0).to_string(), "7");
        assert_eq!(Value::Number(-2.5).to_string(), "-2.5");
        assert_eq!(Value::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn different_kinds_are_never_equal() {
        assert_ne!(Value::Number(1.0), Value::from("1"));
        assert_ne!(Value::Bool(false), Value::Nil);
        assert_eq!(Value::Nil, Value::Nil);
        assert_eq!(Value::from("a"), Value::from("a"));
    }
}
