use std::rc::Rc;

use crate::interpreter::lexer::Token;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: numbers, strings, booleans and `kosong`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, without its quotes.
    Str(String),
    /// A boolean literal value: `benar` or `salah`.
    Bool(bool),
    /// The `kosong` literal.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The variant set is closed; the evaluator matches on it exhaustively.
/// Operator variants keep the operator token so runtime errors can name it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// The operator token.
        token: Token,
        /// Right operand.
        right: Box<Self>,
    },
    /// A short-circuiting `dan` / `atau`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// The operator token.
        token: Token,
        /// Right operand, evaluated only when needed.
        right: Box<Self>,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operator token.
        token:   Token,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A literal value (number, string, boolean or nil).
    Primary {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Group {
        /// The wrapped expression.
        inner: Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The name token.
        name: Token,
    },
    /// Function call expression (e.g. `luas(2, 3)`).
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Arguments, evaluated left to right.
        arguments: Vec<Self>,
        /// The closing parenthesis, used for error reporting.
        paren:     Token,
    },
}

/// A user-defined function declaration.
///
/// Shared behind an `Rc` so that function values can refer to their
/// declaration without copying the body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   Token,
    /// The parameter names, in declaration order.
    pub params: Vec<Token>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `cetak <expr>;`
    Print {
        /// The `cetak` keyword.
        keyword: Token,
        /// The value to print.
        expr:    Expr,
    },
    /// `misal <name> = <expr>;`
    VarDeclaration {
        /// The name of the variable.
        name:        Token,
        /// The initial value of the variable.
        initializer: Expr,
    },
    /// A bare `<name> = <expr>;`. Updates the nearest existing binding or,
    /// when there is none, declares the name in the current scope.
    Assignment {
        /// The name of the variable.
        name:  Token,
        /// The value which is being assigned.
        value: Expr,
    },
    /// `{ ... }`
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
    },
    /// `jika <cond> { ... } lain { ... }`
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statements run when the condition is truthy.
        then_branch: Vec<Self>,
        /// Statements run otherwise; empty when no `lain` was written.
        else_branch: Vec<Self>,
    },
    /// `selama <cond> { ... }`
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
    },
    /// `fungsi <name>(<params>) { ... }`
    Function(Rc<FunctionDef>),
    /// `balikin <expr>?;`
    Return {
        /// The `balikin` keyword.
        keyword: Token,
        /// The returned value; `kosong` when absent.
        value:   Option<Expr>,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`dan`)
    And,
    /// Logical or (`atau`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "dan"),
            Self::Or => write!(f, "atau"),
        }
    }
}
