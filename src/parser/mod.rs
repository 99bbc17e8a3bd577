//! Parser for symbol table scripts
//!
//! A recursive descent parser that turns tokens into a [`Script`].

mod error;

pub use error::{ParseError, ParseErrorKind, ParseResult};

use crate::ast::{Command, Script, Span, Spanned};
use crate::lexer::{SpannedToken, Token};
use crate::table::ValueType;

/// The script parser
pub struct Parser<'a> {
    tokens: &'a [SpannedToken],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [SpannedToken]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse a complete script
    pub fn parse(tokens: &'a [SpannedToken]) -> ParseResult<Script> {
        let mut parser = Parser::new(tokens);
        parser.parse_script()
    }

    fn parse_script(&mut self) -> ParseResult<Script> {
        let mut commands = Vec::new();
        while !self.is_at_end() {
            commands.push(self.parse_command()?);
        }
        Ok(Script { commands })
    }

    fn parse_command(&mut self) -> ParseResult<Spanned<Command>> {
        let start = self.current_span();
        let command = match self.peek().cloned() {
            Some(Token::Var) => {
                self.advance();
                let name = self.expect_ident()?;
                self.expect(&Token::Colon)?;
                let value_type = self.expect_value_type()?;
                Command::Var { name, value_type }
            }
            Some(Token::Const) => {
                self.advance();
                let name = self.expect_ident()?;
                self.expect(&Token::Eq)?;
                let value = self.expect_constant()?;
                Command::Const { name, value }
            }
            Some(Token::Routine) => {
                self.advance();
                let name = self.expect_ident()?;
                self.expect(&Token::Colon)?;
                let result_type = self.expect_value_type()?;
                Command::Routine { name, result_type }
            }
            Some(Token::Declare) => {
                self.advance();
                Command::Declare {
                    name: self.expect_ident()?,
                }
            }
            Some(Token::Lookup) => {
                self.advance();
                Command::Lookup {
                    name: self.expect_ident()?,
                }
            }
            Some(Token::Clear) => {
                self.advance();
                Command::Clear
            }
            Some(Token::Stats) => {
                self.advance();
                Command::Stats
            }
            tok => return Err(ParseError::unexpected_token(start, "command", tok)),
        };
        self.expect(&Token::Semi)?;

        let span = Span::new(start.start, self.previous_span().end);
        Ok(Spanned::new(command, span))
    }

    // === Token navigation ===

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn check(&self, expected: &Token) -> bool {
        self.peek() == Some(expected)
    }

    /// Expect a specific token or return an error
    fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        if self.check(expected) {
            self.advance();
            return Ok(());
        }
        let expected = error::format_token(expected);
        match self.peek().cloned() {
            Some(tok) => Err(ParseError::unexpected_token(self.current_span(), expected, Some(tok))),
            None => Err(ParseError::unexpected_eof(self.current_span(), expected)),
        }
    }

    /// Expect an identifier and return it
    fn expect_ident(&mut self) -> ParseResult<Spanned<String>> {
        let span = self.current_span();
        match self.peek().cloned() {
            Some(Token::Ident(name)) => {
                self.advance();
                Ok(Spanned::new(name, span))
            }
            Some(tok) => Err(ParseError::unexpected_token(span, "identifier", Some(tok))),
            None => Err(ParseError::unexpected_eof(span, "identifier")),
        }
    }

    /// Expect one of the value type names (`integer`, `string`, ...)
    fn expect_value_type(&mut self) -> ParseResult<ValueType> {
        let name = self.expect_ident()?;
        name.node.parse().map_err(|_| ParseError {
            span: name.span,
            kind: ParseErrorKind::InvalidType(name.node.clone()),
        })
    }

    /// Expect an optionally negated integer that fits in an `i32`
    fn expect_constant(&mut self) -> ParseResult<i32> {
        let start = self.current_span();
        let negative = self.check(&Token::Minus);
        if negative {
            self.advance();
        }

        let span = self.current_span();
        let digits = match self.peek().cloned() {
            Some(Token::Integer(digits)) => {
                self.advance();
                digits
            }
            Some(tok) => return Err(ParseError::unexpected_token(span, "integer", Some(tok))),
            None => return Err(ParseError::unexpected_eof(span, "integer")),
        };

        let text = if negative { format!("-{}", digits) } else { digits };
        text.parse::<i32>().map_err(|_| ParseError {
            span: Span::new(start.start, span.end),
            kind: ParseErrorKind::InvalidInteger(text.clone()),
        })
    }

    /// Span of the current token, or an empty span at end of input
    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map(|t| Span::from(t.span.clone()))
            .unwrap_or_else(|| {
                self.tokens
                    .last()
                    .map(|t| Span::new(t.span.end, t.span.end))
                    .unwrap_or_default()
            })
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            Span::from(self.tokens[self.pos - 1].span.clone())
        } else {
            Span::default()
        }
    }
}
