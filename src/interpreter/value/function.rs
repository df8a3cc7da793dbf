use std::{fmt, rc::Rc};

use crate::{ast::FunctionDef, interpreter::environment::Scope};

/// A function value: a declaration bundled with the scope it closes over.
///
/// Calls run in a fresh child of `closure`, so the body sees every binding
/// visible where the function was declared, including ones created later in
/// that same scope.
pub struct Function {
    /// The declaration this value was created from.
    pub declaration: Rc<FunctionDef>,
    /// The scope active when the declaration was executed.
    pub closure:     Scope,
}

impl Function {
    /// Creates a function value closing over `closure`.
    #[must_use]
    pub const fn new(declaration: Rc<FunctionDef>, closure: Scope) -> Self {
        Self { declaration,
               closure }
    }

    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    /// The number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.declaration.params.len()
    }
}

// The closure may hold this very function, so never descend into it.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fungsi {}/{}>", self.name(), self.arity())
    }
}
