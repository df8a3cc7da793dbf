use std::io::Write;

use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        environment::Scope,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write, E: Write> Interpreter<W, E> {
    /// Evaluates `dan` / `atau` with short-circuiting.
    ///
    /// The left operand decides. `atau` returns it unchanged when it is
    /// truthy and `dan` returns it unchanged when it is falsy; in both cases
    /// the right operand is never evaluated. Otherwise the result is the right
    /// operand's value. No operand is converted to a boolean.
    ///
    /// # Example
    /// ```
    /// use indoscript::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::tokenize,
    ///     parser::core::parse,
    /// };
    ///
    /// let (tokens, _) = tokenize("cetak 0 atau \"cadangan\"; cetak 2 dan kosong;");
    /// let (statements, _) = parse(&tokens);
    ///
    /// let mut interpreter = Interpreter::new(Vec::new(), Vec::new());
    /// interpreter.interpret(&statements);
    ///
    /// assert_eq!(String::from_utf8_lossy(interpreter.output()), "cadangan\nkosong\n");
    /// ```
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               op: LogicalOperator,
                               right: &Expr,
                               scope: &Scope)
                               -> EvalResult<Value> {
        let left = self.evaluate(left, scope)?;

        let decided = match op {
            LogicalOperator::Or => left.is_truthy(),
            LogicalOperator::And => !left.is_truthy(),
        };

        if decided {
            return Ok(left);
        }

        self.evaluate(right, scope)
    }
}
