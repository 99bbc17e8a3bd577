//! Parse error types for the script parser

use crate::ast::Span;
use crate::lexer::Token;

/// A parse error
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

/// The kind of parse error
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken {
        expected: String,
        found: Option<Token>,
    },
    /// Unexpected end of input
    UnexpectedEof { expected: String },
    /// Constant outside the 32-bit signed range
    InvalidInteger(String),
    /// Unknown value type name
    InvalidType(String),
}

impl ParseError {
    pub fn unexpected_token(span: Span, expected: impl Into<String>, found: Option<Token>) -> Self {
        Self {
            span,
            kind: ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found,
            },
        }
    }

    pub fn unexpected_eof(span: Span, expected: impl Into<String>) -> Self {
        Self {
            span,
            kind: ParseErrorKind::UnexpectedEof {
                expected: expected.into(),
            },
        }
    }

    /// Format error with source code context (line:col instead of byte offsets)
    pub fn format_with_source(&self, source: &str) -> String {
        self.format_with_source_and_file(source, None)
    }

    /// Format error with source code context and filename
    pub fn format_with_source_and_file(&self, source: &str, filename: Option<&str>) -> String {
        let position = match filename {
            Some(file) => format!("{}:{}", file, self.span.format_position(source)),
            None => self.span.format_position(source),
        };
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of file".to_string(),
                };
                format!("error: expected {}, found {} at {}", expected, found_str, position)
            }
            ParseErrorKind::UnexpectedEof { expected } => {
                format!("error: unexpected end of file, expected {} at {}", expected, position)
            }
            ParseErrorKind::InvalidInteger(s) => {
                format!("error: invalid integer: {} at {}", s, position)
            }
            ParseErrorKind::InvalidType(s) => {
                format!("error: invalid type: {} at {}", s, position)
            }
        }
    }
}

/// Format a token for display in error messages
pub(crate) fn format_token(token: &Token) -> String {
    match token {
        Token::Ident(name) => format!("identifier '{}'", name),
        Token::Integer(digits) => format!("integer {}", digits),
        Token::Colon => "':'".to_string(),
        Token::Semi => "';'".to_string(),
        Token::Eq => "'='".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Var => "keyword 'var'".to_string(),
        Token::Const => "keyword 'const'".to_string(),
        Token::Routine => "keyword 'routine'".to_string(),
        Token::Declare => "keyword 'declare'".to_string(),
        Token::Lookup => "keyword 'lookup'".to_string(),
        Token::Clear => "keyword 'clear'".to_string(),
        Token::Stats => "keyword 'stats'".to_string(),
        Token::Comment => "comment".to_string(),
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of file".to_string(),
                };
                write!(
                    f,
                    "expected {}, found {} at {}..{}",
                    expected, found_str, self.span.start, self.span.end
                )
            }
            ParseErrorKind::UnexpectedEof { expected } => {
                write!(f, "unexpected end of file, expected {}", expected)
            }
            ParseErrorKind::InvalidInteger(s) => {
                write!(f, "invalid integer: {}", s)
            }
            ParseErrorKind::InvalidType(s) => {
                write!(f, "invalid type: {}", s)
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;
