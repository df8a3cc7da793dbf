use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation. Any other kind is a type mismatch.
/// - `Not`: the boolean negation of the operand's truthiness. Accepts every
///   kind.
///
/// # Example
/// ```
/// use indoscript::{
///     ast::UnaryOperator,
///     interpreter::{
///         evaluator::unary::eval_unary,
///         lexer::{Token, TokenKind},
///         value::core::Value,
///     },
/// };
///
/// let bang = Token::new(TokenKind::Bang, "!", 1);
/// assert_eq!(eval_unary(UnaryOperator::Not, &bang, &Value::from("")).unwrap(),
///            Value::Bool(true));
///
/// let minus = Token::new(TokenKind::Minus, "-", 1);
/// assert_eq!(eval_unary(UnaryOperator::Negate, &minus, &Value::Number(5.0)).unwrap(),
///            Value::Number(-5.0));
/// assert!(eval_unary(UnaryOperator::Negate, &minus, &Value::Nil).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, token: &Token, value: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            other => {
                Err(RuntimeError::TypeMismatch { token:   token.clone(),
                                                 details: format!("Operand of '-' must be a \
                                                                   number, got {}",
                                                                  other.type_name()), })
            },
        },
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}
