use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_declaration,
            utils::{check, consume, peek},
        },
    },
};

/// Parses the declarations of a block after its opening `{`, up to and
/// including the closing `}`.
///
/// A declaration that fails to parse is recorded in `errors` and skipped; the
/// rest of the block is still parsed.
///
/// Grammar: `block := "{" declaration* "}"`
///
/// # Errors
/// Returns a `ParseError` if the stream ends before the closing `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          errors: &mut Vec<ParseError>)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    while !check(tokens, &TokenKind::RBrace) && !peek(tokens).is_eof() {
        if let Some(statement) = parse_declaration(tokens, errors) {
            statements.push(statement);
        }
    }

    consume(tokens, &TokenKind::RBrace, "Expect '}' after block.")?;
    Ok(statements)
}
