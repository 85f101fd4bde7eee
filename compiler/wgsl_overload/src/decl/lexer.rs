//! Tokenizer for declaration text.

use std::fmt;

use logos::Logos;

use super::Span;

/// Raw token from logos (before trivia filtering).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    // Operator names are quoted either way: type('+', ...) or type("+", ...)
    #[regex(r#""[^"\n]*""#)]
    #[regex(r"'[^'\n]*'")]
    Str,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum TokenKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Str,
    Int,
    Ident,
    /// Input logos could not tokenize.
    Error,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::Comma => "`,`",
            Self::Str => "string",
            Self::Int => "integer",
            Self::Ident => "identifier",
            Self::Error => "invalid character",
            Self::Eof => "end of input",
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenize `source`, dropping comments. Always ends with an `Eof` token.
pub(super) fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match result {
            Ok(RawToken::LineComment) => continue,
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::LBracket) => TokenKind::LBracket,
            Ok(RawToken::RBracket) => TokenKind::RBracket,
            Ok(RawToken::Comma) => TokenKind::Comma,
            Ok(RawToken::Str) => TokenKind::Str,
            Ok(RawToken::Int) => TokenKind::Int,
            Ok(RawToken::Ident) => TokenKind::Ident,
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token { kind, span });
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::point(eof),
    });
    tokens
}
