use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Scope},
        evaluator::core::{EvalResult, Flow, Interpreter},
        lexer::Token,
        value::{core::Value, function::Function},
    },
};

impl<W: Write, E: Write> Interpreter<W, E> {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then every argument from left to right.
    /// Only then is the callee checked to be a function.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `paren`: Closing parenthesis of the call, used for error reporting.
    /// - `scope`: Scope the callee and arguments are evaluated in.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is not a function.
    /// - Any error from evaluating the arguments or running the body.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            paren: &Token,
                            scope: &Scope)
                            -> EvalResult<Value> {
        let callee = self.evaluate(callee, scope)?;
        let arguments = arguments.iter()
                                 .map(|argument| self.evaluate(argument, scope))
                                 .collect::<EvalResult<Vec<_>>>()?;

        let Value::Function(function) = callee else {
            return Err(RuntimeError::NotCallable { token: paren.clone() });
        };

        self.call_function(&function, arguments, paren)
    }

    /// Runs `function` with already evaluated `arguments`.
    ///
    /// Parameters are bound in a fresh scope whose parent is the scope the
    /// function was declared in, and the body runs in that scope. A `balikin`
    /// anywhere in the body ends the call with its value; falling off the end
    /// yields `kosong`.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the number of arguments differs from the
    ///   number of parameters. Nothing is bound in that case.
    /// - Any error raised by the body.
    pub fn call_function(&mut self,
                         function: &Function,
                         arguments: Vec<Value>,
                         paren: &Token)
                         -> EvalResult<Value> {
        if arguments.len() != function.arity() {
            return Err(RuntimeError::ArgumentCountMismatch { token:    paren.clone(),
                                                             expected: function.arity(),
                                                             found:    arguments.len(), });
        }

        let scope = Environment::child(&function.closure);
        {
            let mut bindings = scope.borrow_mut();
            for (param, argument) in function.declaration.params.iter().zip(arguments) {
                bindings.define(&param.lexeme, argument);
            }
        }

        tracing::trace!(name = function.name(), depth = self.call_depth(), "calling function");

        self.enter_call();
        let result = self.execute_block(&function.declaration.body, scope);
        self.leave_call();

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }
}
