use std::{iter::Peekable, mem::discriminant};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Stand-in returned when a stream lacks its end-of-stream token.
static END_OF_STREAM: Token = Token { kind:   TokenKind::Eof,
                                      lexeme: String::new(),
                                      line:   0, };

/// Returns the next token without consuming it.
///
/// The end-of-stream token is never consumed, so once the stream is exhausted
/// this keeps returning it.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().unwrap_or(&END_OF_STREAM)
}

/// Consumes and returns the next token, staying put at the end of the stream.
pub(in crate::interpreter::parser) fn advance<'a, I>(tokens: &mut Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a Token>
{
    let token = peek(tokens);
    if !token.is_eof() {
        tokens.next();
    }
    token
}

/// Whether the next token has the same kind as `kind`.
///
/// Payloads are ignored: any number token matches `TokenKind::Number(_)`.
pub(in crate::interpreter::parser) fn check<'a, I>(tokens: &mut Peekable<I>,
                                                   kind: &TokenKind)
                                                   -> bool
    where I: Iterator<Item = &'a Token>
{
    discriminant(&peek(tokens).kind) == discriminant(kind)
}

/// Consumes the next token if it has the given kind.
pub(in crate::interpreter::parser) fn match_kind<'a, I>(tokens: &mut Peekable<I>,
                                                        kind: &TokenKind)
                                                        -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if check(tokens, kind) {
        Some(advance(tokens))
    } else {
        None
    }
}

/// Consumes a token of the given kind or fails with `message` at the token
/// that was found instead.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the next token has another kind.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: &TokenKind,
                                                     message: &str)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if check(tokens, kind) {
        Ok(advance(tokens))
    } else {
        Err(ParseError::at(peek(tokens), message))
    }
}

/// Parses a comma-separated list of items up to and including a closing
/// token.
///
/// Shared by parameter lists and call arguments. An immediately encountered
/// closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Returns
/// The parsed items and the closing token.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or the closing token is
/// missing.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind,
    message: &str)
    -> ParseResult<(Vec<T>, &'a Token)>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();

    if !check(tokens, closing) {
        loop {
            items.push(parse_item(tokens)?);
            if match_kind(tokens, &TokenKind::Comma).is_none() {
                break;
            }
        }
    }

    let close = consume(tokens, closing, message)?;
    Ok((items, close))
}
