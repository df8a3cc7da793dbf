use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        environment::{Environment, Scope},
        evaluator::core::{EvalResult, Flow, Interpreter},
    },
};

impl<W: Write, E: Write> Interpreter<W, E> {
    /// Executes a `selama` loop.
    ///
    /// The condition is evaluated in `scope` before every iteration. Each
    /// iteration runs the body in its own fresh child of `scope`, so a
    /// `misal` inside the body starts over on every pass while assignments to
    /// outer names persist.
    ///
    /// # Returns
    /// `Flow::Return` if the body returned, which ends the loop.
    ///
    /// # Errors
    /// Any error raised by the condition or the body.
    pub(crate) fn execute_while(&mut self,
                                condition: &Expr,
                                body: &[Statement],
                                scope: &Scope)
                                -> EvalResult<Flow> {
        while self.evaluate(condition, scope)?.is_truthy() {
            if let Flow::Return(value) = self.execute_block(body, Environment::child(scope))? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Normal)
    }
}
