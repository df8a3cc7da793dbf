use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::{advance, peek},
        },
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `atau`. This is the lowest precedence
/// level.
///
/// Grammar: `logic_or := logic_and ("atau" logic_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_logical_and(tokens)?;

    loop {
        let token = peek(tokens);
        if let Some(op) = token_to_logical_operator(&token.kind)
           && matches!(op, LogicalOperator::Or)
        {
            advance(tokens);

            let right = parse_logical_and(tokens)?;

            left = Expr::Logical { left: Box::new(left),
                                   op,
                                   token: token.clone(),
                                   right: Box::new(right) };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `dan`. Binds tighter than `atau`.
///
/// Grammar: `logic_and := equality ("dan" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_equality(tokens)?;

    loop {
        let token = peek(tokens);
        if let Some(op) = token_to_logical_operator(&token.kind)
           && matches!(op, LogicalOperator::And)
        {
            advance(tokens);

            let right = parse_equality(tokens)?;

            left = Expr::Logical { left: Box::new(left),
                                   op,
                                   token: token.clone(),
                                   right: Box::new(right) };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses equality operators.
///
/// Grammar: `equality := comparison (("!=" | "==") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_comparison(tokens)?;

    loop {
        let token = peek(tokens);
        if let Some(op) = token_to_binary_operator(&token.kind)
           && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
        {
            advance(tokens);
            let right = parse_comparison(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  token: token.clone(),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Parses relational operators.
///
/// Grammar: `comparison := term (("<" | "<=" | ">" | ">=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_term(tokens)?;

    loop {
        let token = peek(tokens);
        if let Some(op) = token_to_binary_operator(&token.kind)
           && is_relational_op(op)
        {
            advance(tokens);
            let right = parse_term(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  token: token.clone(),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
///
/// `8 - 3 - 2` parses as `(8 - 3) - 2`.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_factor(tokens)?;

    loop {
        let token = peek(tokens);
        if let Some(op) = token_to_binary_operator(&token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            advance(tokens);
            let right = parse_factor(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  token: token.clone(),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `factor := unary (("*" | "/") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens)?;

    loop {
        let token = peek(tokens);
        if let Some(op) = token_to_binary_operator(&token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            advance(tokens);
            let right = parse_unary(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  token: token.clone(),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for tokens that are not arithmetic, comparison or equality
/// operators. `dan` and `atau` are handled by [`token_to_logical_operator`].
///
/// # Example
/// ```
/// use indoscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&TokenKind::And), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Maps `dan` / `atau` to their logical operator.
#[must_use]
pub const fn token_to_logical_operator(kind: &TokenKind) -> Option<LogicalOperator> {
    match kind {
        TokenKind::And => Some(LogicalOperator::And),
        TokenKind::Or => Some(LogicalOperator::Or),
        _ => None,
    }
}

/// Determines whether a binary operator is one of `<`, `<=`, `>`, `>=`.
///
/// # Example
/// ```
/// use indoscript::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(!is_relational_op(BinaryOperator::Equal));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual)
}
