use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::core::Value},
};

/// Evaluates a binary operation on two already evaluated operands.
///
/// - `+` adds two numbers or concatenates two strings.
/// - `-`, `*`, `/` and the relational operators require two numbers.
/// - `==` and `!=` accept any kinds; values of different kinds are never
///   equal.
///
/// Division follows IEEE 754, so dividing by zero yields an infinity or NaN
/// rather than an error.
///
/// # Parameters
/// - `op`: The binary operator.
/// - `token`: The operator token, used for error reporting.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Errors
/// `TypeMismatch` naming the operator when the operand kinds are not accepted.
///
/// # Example
/// ```
/// use indoscript::{
///     ast::BinaryOperator,
///     interpreter::{
///         evaluator::binary::eval_binary,
///         lexer::{Token, TokenKind},
///         value::core::Value,
///     },
/// };
///
/// let plus = Token::new(TokenKind::Plus, "+", 1);
///
/// let sum = eval_binary(BinaryOperator::Add, &plus, &Value::from("a"), &Value::from("b"));
/// assert_eq!(sum.unwrap(), Value::from("ab"));
///
/// let mixed = eval_binary(BinaryOperator::Add, &plus, &Value::from("a"), &Value::Number(1.0));
/// assert!(mixed.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   token: &Token,
                   left: &Value,
                   right: &Value)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Equal, NotEqual};

    match (op, left, right) {
        (Equal, l, r) => Ok(Value::Bool(l == r)),
        (NotEqual, l, r) => Ok(Value::Bool(l != r)),
        (Add, Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (Add, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Add, l, r) => Err(mismatch(token,
                                    &format!("Operands of '+' must be two numbers or two strings, \
                                              got {} and {}",
                                             l.type_name(),
                                             r.type_name()))),
        (_, Value::Number(a), Value::Number(b)) => Ok(eval_numeric(op, *a, *b)),
        (_, l, r) => Err(mismatch(token,
                                  &format!("Operands of '{op}' must be numbers, got {} and {}",
                                           l.type_name(),
                                           r.type_name()))),
    }
}

/// Applies an arithmetic or relational operator to two numbers.
fn eval_numeric(op: BinaryOperator, a: f64, b: f64) -> Value {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Add => Value::Number(a + b),
        Sub => Value::Number(a - b),
        Mul => Value::Number(a * b),
        Div => Value::Number(a / b),
        Less => Value::Bool(a < b),
        Greater => Value::Bool(a > b),
        LessEqual => Value::Bool(a <= b),
        GreaterEqual => Value::Bool(a >= b),
        Equal => Value::Bool(a == b),
        NotEqual => Value::Bool(a != b),
    }
}

fn mismatch(token: &Token, details: &str) -> RuntimeError {
    RuntimeError::TypeMismatch { token:   token.clone(),
                                 details: details.to_string(), }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::TokenKind;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn op_token(lexeme: &str) -> Token {
        Token::new(TokenKind::Star, lexeme, 3)
    }

    #[test]
    fn arithmetic_on_numbers() {
        let t = op_token("*");
        assert_eq!(eval_binary(BinaryOperator::Mul, &t, &num(6.0), &num(7.0)).unwrap(),
                   num(42.0));
        assert_eq!(eval_binary(BinaryOperator::Div, &t, &num(1.0), &num(4.0)).unwrap(),
                   num(0.25));
        assert_eq!(eval_binary(BinaryOperator::GreaterEqual, &t, &num(2.0), &num(2.0)).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn equality_never_coerces() {
        let t = op_token("==");
        assert_eq!(eval_binary(BinaryOperator::Equal, &t, &num(1.0), &Value::from("1")).unwrap(),
                   Value::Bool(false));
        assert_eq!(eval_binary(BinaryOperator::Equal, &t, &Value::Nil, &Value::Nil).unwrap(),
                   Value::Bool(true));
        assert_eq!(eval_binary(BinaryOperator::NotEqual, &t, &Value::Bool(true), &num(1.0)).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn relational_operators_reject_strings() {
        let t = op_token("<");
        let error = eval_binary(BinaryOperator::Less, &t, &Value::from("a"), &Value::from("b"))
            .unwrap_err();
        assert_eq!(error.to_string(),
                   "[line 3] Runtime error at '<': Operands of '<' must be numbers, got string \
                    and string.");
    }
}
