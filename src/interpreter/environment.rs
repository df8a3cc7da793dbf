use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::core::Value},
};

/// A shared handle to one scope of the chain.
///
/// Scopes are shared because function values keep the scope they were
/// declared in alive after it has been exited.
pub type Scope = Rc<RefCell<Environment>>;

/// One scope: a mapping from names to values plus a link to the enclosing
/// scope.
///
/// The chain is rooted at a single global scope per interpreter. Parent links
/// only ever point outward, so the chain cannot form a cycle.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<Scope>,
}

impl Environment {
    /// Creates a root scope with no parent.
    #[must_use]
    pub fn global() -> Scope {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a scope nested inside `parent`.
    #[must_use]
    pub fn child(parent: &Scope) -> Scope {
        Rc::new(RefCell::new(Self { values:    HashMap::new(),
                                    enclosing: Some(Rc::clone(parent)), }))
    }

    /// Inserts or overwrites `name` in this scope only.
    ///
    /// Enclosing scopes are never searched, so defining a name that an outer
    /// scope already holds shadows it.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// Searches this scope first, then each enclosing scope outward.
    ///
    /// # Errors
    /// `UndefinedVariable` when no scope in the chain binds the name.
    ///
    /// # Example
    /// ```
    /// use indoscript::interpreter::{
    ///     environment::Environment,
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let global = Environment::global();
    /// global.borrow_mut().define("x", Value::Number(1.0));
    ///
    /// let inner = Environment::child(&global);
    /// let x = Token::new(TokenKind::Identifier, "x", 1);
    /// inner.borrow_mut().assign(&x, Value::Number(2.0)).unwrap();
    ///
    /// assert_eq!(global.borrow().get(&x).unwrap(), Value::Number(2.0));
    /// ```
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }

        match &self.enclosing {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(RuntimeError::UndefinedVariable { name: name.clone() }),
        }
    }

    /// Overwrites the nearest existing binding of `name`, or defines it in
    /// this scope when no scope in the chain binds it yet.
    ///
    /// This is what a bare `name = value;` does: an enclosing binding is
    /// updated in place, otherwise the statement declares a new one.
    ///
    /// # Errors
    /// None in practice: `assign` only runs once the name is known to be bound.
    pub fn assign_or_define(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if self.binds(&name.lexeme) {
            return self.assign(name, value);
        }

        self.define(&name.lexeme, value);
        Ok(())
    }

    /// Whether this scope or any enclosing one binds `name`.
    #[must_use]
    pub fn binds(&self, name: &str) -> bool {
        self.values.contains_key(name)
        || self.enclosing
               .as_ref()
               .is_some_and(|parent| parent.borrow().binds(name))
    }

    /// Looks up the nearest binding of `name`.
    ///
    /// # Errors
    /// `UndefinedVariable` when no scope in the chain binds the name.
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        match &self.enclosing {
            Some(parent) => parent.borrow().get(name),
            None => Err(RuntimeError::UndefinedVariable { name: name.clone() }),
        }
    }

    /// Number of scopes between this one and the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.enclosing
            .as_ref()
            .map_or(0, |parent| parent.borrow().depth() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::TokenKind;

    fn name(text: &str) -> Token {
        Token::new(TokenKind::Identifier, text, 1)
    }

    #[test]
    fn define_shadows_without_touching_the_parent() {
        let global = Environment::global();
        global.borrow_mut().define("a", Value::Number(1.0));

        let inner = Environment::child(&global);
        inner.borrow_mut().define("a", Value::Number(2.0));

        assert_eq!(inner.borrow().get(&name("a")).unwrap(), Value::Number(2.0));
        assert_eq!(global.borrow().get(&name("a")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn assign_updates_the_nearest_binding() {
        let global = Environment::global();
        global.borrow_mut().define("a", Value::Number(1.0));
        let middle = Environment::child(&global);
        middle.borrow_mut().define("a", Value::Number(2.0));
        let inner = Environment::child(&middle);

        inner.borrow_mut()
             .assign(&name("a"), Value::Number(3.0))
             .unwrap();

        assert_eq!(middle.borrow().get(&name("a")).unwrap(), Value::Number(3.0));
        assert_eq!(global.borrow().get(&name("a")).unwrap(), Value::Number(1.0));
        assert_eq!(inner.borrow().depth(), 2);
    }

    #[test]
    fn assign_or_define_updates_outer_bindings_and_declares_new_ones() {
        let global = Environment::global();
        global.borrow_mut().define("a", Value::Number(1.0));
        let inner = Environment::child(&global);

        inner.borrow_mut()
             .assign_or_define(&name("a"), Value::Number(2.0))
             .unwrap();
        inner.borrow_mut()
             .assign_or_define(&name("b"), Value::Number(3.0))
             .unwrap();

        assert_eq!(global.borrow().get(&name("a")).unwrap(), Value::Number(2.0));
        assert_eq!(inner.borrow().get(&name("b")).unwrap(), Value::Number(3.0));
        assert!(!global.borrow().binds("b"));
    }

    #[test]
    fn unbound_names_are_errors() {
        let global = Environment::global();
        let inner = Environment::child(&global);

        assert!(matches!(inner.borrow().get(&name("nope")),
                         Err(RuntimeError::UndefinedVariable { .. })));
        assert!(matches!(inner.borrow_mut().assign(&name("nope"), Value::Nil),
                         Err(RuntimeError::UndefinedVariable { .. })));
    }
}
