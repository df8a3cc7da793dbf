use std::fmt;

use logos::Logos;

use crate::{ast::LiteralValue, error::ParseError};

/// The kind of a lexical token.
///
/// A token kind is a minimal but meaningful unit of text produced by the
/// lexer. Literal payloads (numbers and strings) live inside the kind, so a
/// number token always carries its value and a string token its text.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// `misal`
    #[token("misal")]
    Let,
    /// `jika`
    #[token("jika")]
    If,
    /// `lain`
    #[token("lain")]
    Else,
    /// `fungsi`
    #[token("fungsi")]
    Function,
    /// `balikin`
    #[token("balikin")]
    Return,
    /// `kosong`
    #[token("kosong")]
    Nil,
    /// `benar`
    #[token("benar")]
    True,
    /// `salah`
    #[token("salah")]
    False,
    /// `selama`
    #[token("selama")]
    Loop,
    /// `cetak`
    #[token("cetak")]
    Print,
    /// `dan`
    #[token("dan")]
    And,
    /// `atau`
    #[token("atau")]
    Or,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens such as `x` or `hitung_luas`. The name is the
    /// token's lexeme.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    Number(f64),
    /// String literal tokens such as `"halo"`. The payload excludes the
    /// surrounding quotes.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// A string that reaches the end of the line or input without a closing
    /// quote. Reported by [`tokenize`] and never handed to the parser.
    #[regex(r#""[^"\n]*"#)]
    UnterminatedString,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// End of the token stream. Always the last token produced by
    /// [`tokenize`].
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token together with its source text and line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is, including any literal payload.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    /// 1-based source line the token appeared on.
    pub line:   usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// Returns the literal value this token denotes, if it is a literal.
    ///
    /// Numbers and strings carry their payload; the keywords `benar`, `salah`
    /// and `kosong` denote the boolean and nil literals.
    ///
    /// # Example
    /// ```
    /// use indoscript::{
    ///     ast::LiteralValue,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let token = Token::new(TokenKind::Number(2.5), "2.5", 1);
    /// assert_eq!(token.literal(), Some(LiteralValue::Number(2.5)));
    ///
    /// let token = Token::new(TokenKind::Plus, "+", 1);
    /// assert_eq!(token.literal(), None);
    /// ```
    #[must_use]
    pub fn literal(&self) -> Option<LiteralValue> {
        match &self.kind {
            TokenKind::Number(n) => Some(LiteralValue::Number(*n)),
            TokenKind::Str(s) => Some(LiteralValue::Str(s.clone())),
            TokenKind::True => Some(LiteralValue::Bool(true)),
            TokenKind::False => Some(LiteralValue::Bool(false)),
            TokenKind::Nil => Some(LiteralValue::Nil),
            _ => None,
        }
    }

    /// Whether this is the end-of-stream token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            write!(f, "end")
        } else {
            write!(f, "'{}'", self.lexeme)
        }
    }
}

/// Converts source text into a token stream.
///
/// The returned stream always ends with a [`TokenKind::Eof`] token carrying
/// the last line number. Lexical problems (unexpected characters and
/// unterminated strings) do not stop scanning: they are collected and returned
/// next to the best-effort token stream.
///
/// # Example
/// ```
/// use indoscript::interpreter::lexer::{TokenKind, tokenize};
///
/// let (tokens, errors) = tokenize("misal x = 1;\ncetak x;");
///
/// assert!(errors.is_empty());
/// assert_eq!(tokens[0].kind, TokenKind::Let);
/// assert_eq!(tokens[5].line, 2);
/// assert!(tokens.last().is_some_and(|t| t.kind == TokenKind::Eof));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<ParseError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(TokenKind::UnterminatedString) => {
                errors.push(ParseError::UnterminatedString { line });
            },
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(()) => errors.push(ParseError::UnexpectedCharacter { lexeme: lexer.slice()
                                                                               .to_string(),
                                                                     line }),
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", lexer.extras.line));
    (tokens, errors)
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<TokenKind>) -> Option<String> {
    let slice = lex.slice();
    slice.get(1..slice.len() - 1).map(str::to_string)
}
