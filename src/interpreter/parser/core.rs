use std::{io::Write, iter::Peekable};

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical_or,
            statement::parse_declaration,
            utils::{advance, match_kind, peek},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token stream into statements.
///
/// Parsing never stops at the first error. A failed declaration is recorded,
/// the parser skips ahead to the next statement boundary and carries on, so
/// one pass reports every independent mistake. Statements that parsed cleanly
/// are returned alongside the errors.
///
/// Grammar: `program := declaration* EOF`
///
/// # Example
/// ```
/// use indoscript::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let (tokens, _) = tokenize("misal = 1; cetak (2; cetak 3;");
/// let (statements, errors) = parse(&tokens);
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(statements.len(), 1);
/// ```
#[must_use]
pub fn parse(tokens: &[Token]) -> (Vec<Statement>, Vec<ParseError>) {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while !peek(&mut iter).is_eof() {
        if let Some(brace) = match_kind(&mut iter, &TokenKind::RBrace) {
            errors.push(ParseError::at(brace, "Unmatched '}'."));
            continue;
        }

        if let Some(statement) = parse_declaration(&mut iter, &mut errors) {
            statements.push(statement);
        }
    }

    (statements, errors)
}

/// Parses a token stream, writing one diagnostic line per error.
///
/// Returns the statements parsed so far and whether any error occurred.
/// Callers must not execute the statements when the flag is set.
///
/// # Errors
/// Fails only if writing to `diagnostics` fails.
pub fn parse_program<W: Write>(tokens: &[Token],
                               diagnostics: &mut W)
                               -> std::io::Result<(Vec<Statement>, bool)> {
    let (statements, errors) = parse(tokens);

    for error in &errors {
        writeln!(diagnostics, "{error}")?;
    }

    Ok((statements, !errors.is_empty()))
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := logic_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_logical_or(tokens)
}

/// Discards tokens until a likely statement boundary.
///
/// Stops after a `;` or before a keyword that starts a declaration or
/// statement (`fungsi`, `misal`, `selama`, `jika`, `cetak`, `balikin`).
///
/// A `}` is never skipped: it closes the enclosing block, and `parse` consumes
/// a stray one at the top level. Any other token the error was raised at is
/// skipped.
pub(in crate::interpreter::parser) fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    if matches!(peek(tokens).kind, TokenKind::RBrace) {
        return;
    }

    let mut previous = advance(tokens);

    while !peek(tokens).is_eof() {
        if matches!(previous.kind, TokenKind::Semicolon) {
            return;
        }

        if matches!(peek(tokens).kind, TokenKind::RBrace) {
            return;
        }

        if matches!(peek(tokens).kind,
                    TokenKind::Function
                    | TokenKind::Let
                    | TokenKind::Loop
                    | TokenKind::If
                    | TokenKind::Print
                    | TokenKind::Return)
        {
            return;
        }

        previous = advance(tokens);
    }
}
