use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression, synchronize},
            utils::{check, consume, match_kind, parse_comma_separated, peek},
        },
    },
};

/// Parses one declaration, recovering from any error inside it.
///
/// On failure the error is appended to `errors`, the token stream is skipped
/// forward to the next statement boundary and `None` is returned, so the
/// caller can simply continue with the next declaration.
///
/// Grammar:
/// ```text
///     declaration := funcDecl | varDecl | assignment | statement
/// ```
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                                errors: &mut Vec<ParseError>)
                                -> Option<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    match parse_declaration_inner(tokens, errors) {
        Ok(statement) => Some(statement),
        Err(error) => {
            tracing::debug!(%error, "recovering from parse error");
            errors.push(error);
            synchronize(tokens);
            None
        },
    }
}

fn parse_declaration_inner<'a, I>(tokens: &mut Peekable<I>,
                                  errors: &mut Vec<ParseError>)
                                  -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if match_kind(tokens, &TokenKind::Function).is_some() {
        return parse_function_declaration(tokens, errors);
    }

    if match_kind(tokens, &TokenKind::Let).is_some() {
        return parse_var_declaration(tokens);
    }

    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    parse_statement(tokens, errors)
}

/// Parses the rest of `fungsi name(a, b) { ... }` after the keyword.
///
/// Grammar: `funcDecl := "fungsi" IDENTIFIER "(" parameters? ")" block`
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     errors: &mut Vec<ParseError>)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = consume(tokens, &TokenKind::Identifier, "Expect function name.")?;
    consume(tokens, &TokenKind::LParen, "Expect '(' after function name.")?;

    let (params, _) = parse_comma_separated(tokens,
                                            |tokens| {
                                                consume(tokens,
                                                        &TokenKind::Identifier,
                                                        "Expect parameter name.").cloned()
                                            },
                                            &TokenKind::RParen,
                                            "Expect ')' after parameters.")?;

    consume(tokens, &TokenKind::LBrace, "Expect '{' before function body.")?;
    let body = parse_block(tokens, errors)?;

    Ok(Statement::Function(Rc::new(FunctionDef { name: name.clone(),
                                                 params,
                                                 body })))
}

/// Parses the rest of `misal name = value;` after the keyword.
///
/// Every declaration needs an initializer.
///
/// Grammar: `varDecl := "misal" IDENTIFIER "=" expression ";"`
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = consume(tokens, &TokenKind::Identifier, "Expect variable name.")?;
    consume(tokens,
            &TokenKind::Equals,
            "Expect '=' after variable name; declarations need an initializer.")?;
    let initializer = parse_expression(tokens)?;
    consume(tokens, &TokenKind::Semicolon, "Expect ';' after variable declaration.")?;

    Ok(Statement::VarDeclaration { name: name.clone(),
                                   initializer })
}

/// Parses `name = value;` when the next two tokens are an identifier and `=`.
///
/// Returns `Ok(None)` without consuming anything otherwise, so `x == 1;` and
/// `f(x);` fall through to expression statements.
///
/// Grammar: `assignment := IDENTIFIER "=" expression ";"`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    let is_assignment = lookahead.next()
                                 .is_some_and(|t| matches!(t.kind, TokenKind::Identifier))
                        && lookahead.peek()
                                    .is_some_and(|t| matches!(t.kind, TokenKind::Equals));
    if !is_assignment {
        return Ok(None);
    }

    let name = consume(tokens, &TokenKind::Identifier, "Expect variable name.")?;
    consume(tokens, &TokenKind::Equals, "Expect '=' after variable name.")?;
    let value = parse_expression(tokens)?;
    consume(tokens, &TokenKind::Semicolon, "Expect ';' after assignment.")?;

    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value }))
}

/// Parses a statement.
///
/// Grammar:
/// ```text
///     statement := printStmt | block | ifStmt | whileStmt | returnStmt
///                | exprStmt
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              errors: &mut Vec<ParseError>)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = peek(tokens);

    match token.kind {
        TokenKind::Print => {
            consume(tokens, &TokenKind::Print, "Expect 'cetak'.")?;
            let expr = parse_expression(tokens)?;
            consume(tokens, &TokenKind::Semicolon, "Expect ';' after value.")?;
            Ok(Statement::Print { keyword: token.clone(),
                                  expr })
        },
        TokenKind::LBrace => {
            consume(tokens, &TokenKind::LBrace, "Expect '{'.")?;
            Ok(Statement::Block { statements: parse_block(tokens, errors)? })
        },
        TokenKind::If => parse_if(tokens, errors),
        TokenKind::Loop => {
            consume(tokens, &TokenKind::Loop, "Expect 'selama'.")?;
            let condition = parse_expression(tokens)?;
            consume(tokens, &TokenKind::LBrace, "Expect '{' after loop condition.")?;
            let body = parse_block(tokens, errors)?;
            Ok(Statement::While { condition, body })
        },
        TokenKind::Return => {
            consume(tokens, &TokenKind::Return, "Expect 'balikin'.")?;
            let value = if check(tokens, &TokenKind::Semicolon) {
                None
            } else {
                Some(parse_expression(tokens)?)
            };
            consume(tokens, &TokenKind::Semicolon, "Expect ';' after return value.")?;
            Ok(Statement::Return { keyword: token.clone(),
                                   value })
        },
        _ => {
            let expr = parse_expression(tokens)?;
            consume(tokens, &TokenKind::Semicolon, "Expect ';' after expression.")?;
            Ok(Statement::Expression { expr })
        },
    }
}

/// Parses `jika cond { ... }` with an optional `lain { ... }` or
/// `lain jika ...` tail.
///
/// A missing else branch becomes an empty statement list. `lain jika` nests a
/// single `If` inside the else branch.
///
/// Grammar:
/// ```text
///     ifStmt := "jika" expression block ("lain" (ifStmt | block))?
/// ```
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   errors: &mut Vec<ParseError>)
                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    consume(tokens, &TokenKind::If, "Expect 'jika'.")?;
    let condition = parse_expression(tokens)?;
    consume(tokens, &TokenKind::LBrace, "Expect '{' after condition.")?;
    let then_branch = parse_block(tokens, errors)?;

    let else_branch = if match_kind(tokens, &TokenKind::Else).is_none() {
        Vec::new()
    } else if check(tokens, &TokenKind::If) {
        vec![parse_if(tokens, errors)?]
    } else {
        consume(tokens, &TokenKind::LBrace, "Expect '{' after 'lain'.")?;
        parse_block(tokens, errors)?
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{BinaryOperator, Expr, Statement},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::core::parse},
    };

    fn parse_ok(source: &str) -> Vec<Statement> {
        let (tokens, lex_errors) = tokenize(source);
        assert!(lex_errors.is_empty(), "{lex_errors:?}");
        let (statements, errors) = parse(&tokens);
        assert!(errors.is_empty(), "{errors:?}");
        statements
    }

    fn parse_errors(source: &str) -> Vec<String> {
        let (tokens, _) = tokenize(source);
        parse(&tokens).1.iter().map(ParseError::to_string).collect()
    }

    #[test]
    fn subtraction_is_left_associative() {
        let statements = parse_ok("8 - 3 - 2;");
        let Statement::Expression { expr: Expr::Binary { left, op, .. } } = &statements[0] else {
            panic!("expected a binary expression statement, got {statements:?}");
        };
        assert_eq!(*op, BinaryOperator::Sub);
        assert!(matches!(**left, Expr::Binary { op: BinaryOperator::Sub, .. }));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let statements = parse_ok("1 + 2 * 3;");
        let Statement::Expression { expr: Expr::Binary { op, right, .. } } = &statements[0] else {
            panic!("expected a binary expression statement, got {statements:?}");
        };
        assert_eq!(*op, BinaryOperator::Add);
        assert!(matches!(**right, Expr::Binary { op: BinaryOperator::Mul, .. }));
    }

    #[test]
    fn assignment_and_equality_are_told_apart() {
        let statements = parse_ok("x = 1; x == 1;");
        assert!(matches!(statements[0], Statement::Assignment { .. }));
        assert!(matches!(statements[1], Statement::Expression { .. }));
    }

    #[test]
    fn else_if_nests_a_single_if() {
        let statements = parse_ok("jika a { cetak 1; } lain jika b { cetak 2; } lain { cetak 3; }");
        let Statement::If { else_branch, .. } = &statements[0] else {
            panic!("expected an if statement, got {statements:?}");
        };
        assert_eq!(else_branch.len(), 1);
        let Statement::If { else_branch: inner_else, .. } = &else_branch[0] else {
            panic!("expected a nested if, got {else_branch:?}");
        };
        assert_eq!(inner_else.len(), 1);
    }

    #[test]
    fn function_declarations_keep_their_parameters() {
        let statements = parse_ok("fungsi tambah(a, b) { balikin a + b; }");
        let Statement::Function(def) = &statements[0] else {
            panic!("expected a function declaration, got {statements:?}");
        };
        assert_eq!(def.name.lexeme, "tambah");
        assert_eq!(def.params.iter().map(|p| p.lexeme.as_str()).collect::<Vec<_>>(),
                   vec!["a", "b"]);
        assert!(matches!(def.body[0], Statement::Return { value: Some(_), .. }));
    }

    #[test]
    fn bare_return_has_no_value() {
        let statements = parse_ok("fungsi f() { balikin; }");
        let Statement::Function(def) = &statements[0] else {
            panic!("expected a function declaration, got {statements:?}");
        };
        assert!(matches!(def.body[0], Statement::Return { value: None, .. }));
    }

    #[test]
    fn declarations_require_an_initializer() {
        assert_eq!(parse_errors("misal x;"),
                   vec!["[line 1] Error at ';': Expect '=' after variable name; declarations \
                         need an initializer."]);
    }

    #[test]
    fn errors_at_the_end_say_so() {
        assert_eq!(parse_errors("cetak 1"),
                   vec!["[line 1] Error at end: Expect ';' after value."]);
    }

    #[test]
    fn recovery_reports_every_independent_error() {
        let errors = parse_errors("misal = 1;\ncetak 2;\ncetak (3;\n1 +;");
        assert_eq!(errors,
                   vec!["[line 1] Error at '=': Expect variable name.",
                        "[line 3] Error at ';': Expect ')' after expression.",
                        "[line 4] Error at ';': Expect expression."]);
    }

    #[test]
    fn recovery_inside_a_block_keeps_the_block() {
        let (tokens, _) = tokenize("{ misal = 1; cetak 2; }\ncetak 3;");
        let (statements, errors) = parse(&tokens);
        assert_eq!(errors.len(), 1);
        assert_eq!(statements.len(), 2);
        let Statement::Block { statements: inner } = &statements[0] else {
            panic!("expected a block, got {statements:?}");
        };
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn missing_semicolon_before_a_closing_brace_is_one_error() {
        let (tokens, _) = tokenize("fungsi f() { cetak 1 }\ncetak 2;");
        let (statements, errors) = parse(&tokens);
        assert_eq!(errors.iter().map(ParseError::to_string).collect::<Vec<_>>(),
                   vec!["[line 1] Error at '}': Expect ';' after value."]);
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn stray_closing_brace_is_reported_once() {
        assert_eq!(parse_errors("cetak 1;
}
cetak 2;"),
                   vec!["[line 2] Error at '}': Unmatched '}'."]);
    }

    #[test]
    fn calls_chain() {
        let statements = parse_ok("f(1)(2, 3);");
        let Statement::Expression { expr: Expr::Call { callee, arguments, .. } } = &statements[0]
        else {
            panic!("expected a call, got {statements:?}");
        };
        assert_eq!(arguments.len(), 2);
        assert!(matches!(**callee, Expr::Call { .. }));
    }
}
