use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{advance, consume, match_kind, parse_comma_separated, peek},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (numeric negation) and `!` (logical not).
/// Unary operators are right-associative, so `!-x` parses as `!(-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | call
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = peek(tokens);
    let op = match token.kind {
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Bang => UnaryOperator::Not,
        _ => return parse_call(tokens),
    };

    advance(tokens);
    let operand = parse_unary(tokens)?;
    Ok(Expr::Unary { op,
                     token: token.clone(),
                     operand: Box::new(operand) })
}

/// Parses a primary expression followed by any number of call suffixes.
///
/// Calls chain to the left, so `f(1)(2)` calls the result of `f(1)`.
///
/// Grammar: `call := primary ("(" arguments? ")")*`
///
/// # Errors
/// Returns a `ParseError` if an argument fails to parse or a call is not
/// closed with `)`.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut expr = parse_primary(tokens)?;

    while match_kind(tokens, &TokenKind::LParen).is_some() {
        let (arguments, paren) = parse_comma_separated(tokens,
                                                       parse_expression,
                                                       &TokenKind::RParen,
                                                       "Expect ')' after arguments.")?;
        expr = Expr::Call { callee: Box::new(expr),
                            arguments,
                            paren: paren.clone() };
    }

    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | "benar" | "salah" | "kosong"
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token cannot start an
/// expression.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = peek(tokens);

    if let Some(value) = token.literal() {
        advance(tokens);
        return Ok(Expr::Primary { value,
                                  line: token.line });
    }

    match token.kind {
        TokenKind::Identifier => {
            advance(tokens);
            Ok(Expr::Variable { name: token.clone() })
        },
        TokenKind::LParen => parse_grouping(tokens),
        _ => Err(ParseError::at(token, "Expect expression.")),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `group := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    consume(tokens, &TokenKind::LParen, "Expect '('.")?;
    let inner = parse_expression(tokens)?;
    consume(tokens, &TokenKind::RParen, "Expect ')' after expression.")?;

    Ok(Expr::Group { inner: Box::new(inner) })
}
