use std::{io::Write, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Scope},
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::{core::Value, function::Function},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `balikin` does not unwind the host stack. Every statement reports whether
/// it ran to completion or is returning, and every caller that runs a list
/// of statements stops and hands a `Return` upward until a function call
/// consumes it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// The statement ran to completion.
    Normal,
    /// A `balikin` executed with this value.
    Return(Value),
}

/// The tree-walking interpreter.
///
/// Owns the two output sinks and the global scope. The global scope persists
/// across [`Interpreter::interpret`] calls, so feeding a REPL's lines one by
/// one to the same interpreter keeps earlier definitions alive.
///
/// ## Usage
///
/// ```
/// use indoscript::interpreter::{
///     evaluator::core::Interpreter,
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let mut interpreter = Interpreter::new(Vec::new(), Vec::new());
///
/// let (tokens, _) = tokenize("misal x = 1 + 2 * 3; cetak x;");
/// let (statements, _) = parse(&tokens);
/// assert!(!interpreter.interpret(&statements));
///
/// let (tokens, _) = tokenize("cetak x - 1;");
/// let (statements, _) = parse(&tokens);
/// assert!(!interpreter.interpret(&statements));
///
/// assert_eq!(String::from_utf8_lossy(interpreter.output()), "7\n6\n");
/// ```
pub struct Interpreter<W: Write, E: Write> {
    out:         W,
    diagnostics: E,
    globals:     Scope,
    call_depth:  usize,
}

impl<W: Write, E: Write> Interpreter<W, E> {
    /// Creates an interpreter writing `cetak` output to `out` and error
    /// reports to `diagnostics`, with an empty global scope.
    #[must_use]
    pub fn new(out: W, diagnostics: E) -> Self {
        Self { out,
               diagnostics,
               globals: Environment::global(),
               call_depth: 0 }
    }

    /// The global scope of this interpreter.
    #[must_use]
    pub const fn globals(&self) -> &Scope {
        &self.globals
    }

    /// The output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// The diagnostic sink.
    #[must_use]
    pub const fn diagnostics(&self) -> &E {
        &self.diagnostics
    }

    /// Mutable access to the diagnostic sink, for reporting errors found
    /// before execution.
    pub const fn diagnostics_mut(&mut self) -> &mut E {
        &mut self.diagnostics
    }

    /// Consumes the interpreter and returns `(output, diagnostics)`.
    #[must_use]
    pub fn into_sinks(self) -> (W, E) {
        (self.out, self.diagnostics)
    }

    /// Executes `statements` in the global scope.
    ///
    /// Stops at the first runtime error, writes exactly one line describing it
    /// to the diagnostic sink and returns `true`. Output already written is
    /// kept. Returns `false` when every statement ran.
    pub fn interpret(&mut self, statements: &[Statement]) -> bool {
        let globals = Rc::clone(&self.globals);

        for statement in statements {
            if let Err(error) = self.execute(statement, &globals) {
                tracing::debug!(line = error.line(), %error, "runtime error");
                if let Err(write_error) = writeln!(self.diagnostics, "{error}") {
                    tracing::error!(%write_error, %error, "could not report runtime error");
                }
                return true;
            }
        }

        false
    }

    /// Executes a single statement in `scope`.
    ///
    /// # Returns
    /// `Flow::Return` when a `balikin` ran inside the statement, otherwise
    /// `Flow::Normal`.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while executing it.
    pub fn execute(&mut self, statement: &Statement, scope: &Scope) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr } => {
                self.evaluate(expr, scope)?;
                Ok(Flow::Normal)
            },
            Statement::Print { keyword, expr } => {
                let value = self.evaluate(expr, scope)?;
                writeln!(self.out, "{value}").map_err(|source| {
                                                 RuntimeError::Output { token: keyword.clone(),
                                                                        source }
                                             })?;
                Ok(Flow::Normal)
            },
            Statement::VarDeclaration { name, initializer } => {
                let value = self.evaluate(initializer, scope)?;
                scope.borrow_mut().define(&name.lexeme, value);
                Ok(Flow::Normal)
            },
            Statement::Assignment { name, value } => {
                let value = self.evaluate(value, scope)?;
                scope.borrow_mut().assign_or_define(name, value)?;
                Ok(Flow::Normal)
            },
            Statement::Block { statements } => {
                self.execute_block(statements, Environment::child(scope))
            },
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                let branch = if self.evaluate(condition, scope)?.is_truthy() {
                    then_branch
                } else {
                    else_branch
                };
                self.execute_block(branch, Environment::child(scope))
            },
            Statement::While { condition, body } => self.execute_while(condition, body, scope),
            Statement::Function(declaration) => {
                let function = Function::new(Rc::clone(declaration), Rc::clone(scope));
                scope.borrow_mut()
                     .define(&declaration.name.lexeme, Value::Function(Rc::new(function)));
                Ok(Flow::Normal)
            },
            Statement::Return { keyword, value } => {
                if self.call_depth == 0 {
                    return Err(RuntimeError::ReturnOutsideFunction { token: keyword.clone() });
                }

                let value = match value {
                    Some(expr) => self.evaluate(expr, scope)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            },
        }
    }

    /// Executes `statements` in order inside `scope`.
    ///
    /// Stops early and passes the completion upward when a statement returns.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by one of the statements.
    pub fn execute_block(&mut self, statements: &[Statement], scope: Scope) -> EvalResult<Flow> {
        tracing::trace!(depth = scope.borrow().depth(), "entering scope");

        for statement in statements {
            if let Flow::Return(value) = self.execute(statement, &scope)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Normal)
    }

    /// Evaluates an expression in `scope`.
    ///
    /// # Errors
    /// Type mismatches, unbound names, calls to non-functions and wrong
    /// argument counts.
    pub fn evaluate(&mut self, expr: &Expr, scope: &Scope) -> EvalResult<Value> {
        match expr {
            Expr::Primary { value, .. } => Ok(Value::from(value)),
            Expr::Group { inner } => self.evaluate(inner, scope),
            Expr::Variable { name } => scope.borrow().get(name),
            Expr::Unary { op, token, operand } => {
                let operand = self.evaluate(operand, scope)?;
                eval_unary(*op, token, &operand)
            },
            Expr::Binary { left,
                           op,
                           token,
                           right, } => {
                let left = self.evaluate(left, scope)?;
                let right = self.evaluate(right, scope)?;
                eval_binary(*op, token, &left, &right)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right, scope),
            Expr::Call { callee,
                         arguments,
                         paren, } => self.eval_call(callee, arguments, paren, scope),
        }
    }

    pub(in crate::interpreter::evaluator) fn enter_call(&mut self) {
        self.call_depth += 1;
    }

    pub(in crate::interpreter::evaluator) fn leave_call(&mut self) {
        self.call_depth -= 1;
    }

    pub(in crate::interpreter::evaluator) const fn call_depth(&self) -> usize {
        self.call_depth
    }
}
