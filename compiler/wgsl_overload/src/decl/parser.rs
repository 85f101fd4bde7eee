//! Recursive-descent parser for declaration text.
//!
//! # Grammar
//!
//! ```text
//! file        := declaration*
//! declaration := 'type' '(' STRING ',' '[' quantifiers ']' ','
//!                '[' patterns ']' ',' pattern ')'
//! quantifier  := CLASS '(' IDENT ')' | IDENT
//! pattern     := 'Vector' '(' pattern ',' dim ')'
//!              | 'Matrix' '(' pattern ',' dim ',' dim ')'
//!              | IDENT
//! dim         := IDENT | INTEGER
//! ```
//!
//! Lists may be empty and may end with a trailing comma. The parser only
//! checks syntax; names are resolved when the table validates a declaration.

use wgsl_types::KindClass;

use super::lexer::{lex, Token, TokenKind};
use super::{Declaration, DimDecl, PatternDecl, QuantifierDecl, Span};
use crate::DeclarationError;

/// Parse every declaration in `source`, in order.
pub fn parse_declarations(source: &str) -> Result<Vec<Declaration>, DeclarationError> {
    check_source_len(source.len())?;
    let mut parser = Parser::new(source);
    let mut declarations = Vec::new();
    while !parser.at(TokenKind::Eof) {
        declarations.push(parser.declaration()?);
    }
    Ok(declarations)
}

/// Spans hold `u32` byte offsets, so longer text cannot be addressed.
pub(super) fn check_source_len(len: usize) -> Result<(), DeclarationError> {
    if u32::try_from(len).is_ok() {
        return Ok(());
    }
    Err(DeclarationError::Syntax {
        message: format!("declaration text is {len} bytes, the limit is {}", u32::MAX),
        span: Span::point(u32::MAX),
    })
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
        }
    }

    fn current(&self) -> Token {
        // `lex` always ends with Eof and `bump` never moves past it.
        self.tokens[self.pos]
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn bump(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn text(&self, token: Token) -> &'src str {
        &self.source[token.span.range()]
    }

    fn error(&self, token: Token, message: impl Into<String>) -> DeclarationError {
        DeclarationError::Syntax {
            message: message.into(),
            span: token.span,
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, DeclarationError> {
        let token = self.current();
        if token.kind == kind {
            Ok(self.bump())
        } else {
            Err(self.error(token, format!("expected {kind}, found {}", token.kind)))
        }
    }

    fn ident(&mut self) -> Result<&'src str, DeclarationError> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(self.text(token))
    }

    /// Parse `item (',' item)* ','?` up to (and including) `close`.
    fn list<T>(
        &mut self,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, DeclarationError>,
    ) -> Result<Vec<T>, DeclarationError> {
        let mut items = Vec::new();
        while !self.at(close) {
            items.push(item(self)?);
            if !self.at(close) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(close)?;
        Ok(items)
    }

    fn declaration(&mut self) -> Result<Declaration, DeclarationError> {
        let keyword = self.current();
        if self.ident()? != "type" {
            return Err(self.error(keyword, "expected `type`"));
        }
        self.expect(TokenKind::LParen)?;

        let operator = self.string()?;
        self.expect(TokenKind::Comma)?;

        self.expect(TokenKind::LBracket)?;
        let quantifiers = self.list(TokenKind::RBracket, Self::quantifier)?;
        self.expect(TokenKind::Comma)?;

        self.expect(TokenKind::LBracket)?;
        let params = self.list(TokenKind::RBracket, Self::pattern)?;
        self.expect(TokenKind::Comma)?;

        let result = self.pattern()?;
        self.expect(TokenKind::RParen)?;

        Ok(Declaration {
            operator,
            quantifiers,
            params,
            result,
        })
    }

    fn string(&mut self) -> Result<String, DeclarationError> {
        let token = self.expect(TokenKind::Str)?;
        let quoted = self.text(token);
        // Both quote characters are one byte.
        let inner = &quoted[1..quoted.len() - 1];
        if inner.is_empty() {
            return Err(self.error(token, "operator name is empty"));
        }
        Ok(inner.to_owned())
    }

    fn quantifier(&mut self) -> Result<QuantifierDecl, DeclarationError> {
        let head = self.current();
        let name = self.ident()?;
        if !self.at(TokenKind::LParen) {
            return Ok(QuantifierDecl::Dim {
                name: name.to_owned(),
            });
        }

        let Some(class) = KindClass::from_name(name) else {
            return Err(self.error(head, format!("unknown kind class `{name}`")));
        };
        self.bump();
        let var = self.ident()?;
        self.expect(TokenKind::RParen)?;
        Ok(QuantifierDecl::Kind {
            name: var.to_owned(),
            class,
        })
    }

    fn pattern(&mut self) -> Result<PatternDecl, DeclarationError> {
        let name = self.ident()?;
        if !self.at(TokenKind::LParen) {
            return Ok(PatternDecl::Name(name.to_owned()));
        }

        let open = self.bump();
        let pattern = match name {
            "Vector" => {
                let element = self.pattern()?;
                self.expect(TokenKind::Comma)?;
                let size = self.dim()?;
                PatternDecl::Vector(Box::new(element), size)
            }
            "Matrix" => {
                let element = self.pattern()?;
                self.expect(TokenKind::Comma)?;
                let cols = self.dim()?;
                self.expect(TokenKind::Comma)?;
                let rows = self.dim()?;
                PatternDecl::Matrix(Box::new(element), cols, rows)
            }
            _ => {
                return Err(self.error(
                    open,
                    format!("`{name}` is not a type constructor, expected `Vector` or `Matrix`"),
                ));
            }
        };
        self.expect(TokenKind::RParen)?;
        Ok(pattern)
    }

    fn dim(&mut self) -> Result<DimDecl, DeclarationError> {
        let token = self.current();
        match token.kind {
            TokenKind::Ident => {
                self.bump();
                Ok(DimDecl::Name(self.text(token).to_owned()))
            }
            TokenKind::Int => {
                self.bump();
                let value = self
                    .text(token)
                    .parse::<u32>()
                    .map_err(|_| self.error(token, "dimension literal is too large"))?;
                Ok(DimDecl::Fixed(value))
            }
            other => Err(self.error(
                token,
                format!("expected dimension name or integer, found {other}"),
            )),
        }
    }
}

