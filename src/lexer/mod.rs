//! Lexer for symbol table scripts
//!
//! Uses logos for tokenization.

use logos::Logos;

/// Tokens of the script language
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // === Commands ===
    #[token("var")]
    Var,
    #[token("const")]
    Const,
    #[token("routine")]
    Routine,
    #[token("declare")]
    Declare,
    #[token("lookup")]
    Lookup,
    #[token("clear")]
    Clear,
    #[token("stats")]
    Stats,

    // === Punctuation ===
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token("=")]
    Eq,
    #[token("-")]
    Minus,

    // === Literals ===
    /// Digits as written; range checking is left to the parser
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),

    // === Identifier ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // === Comments (skipped) ===
    #[regex(r"//[^\n]*?", logos::skip)]
    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    Comment,
}

/// A token with its span in the source
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: std::ops::Range<usize>,
}

/// Lex a script into tokens
pub fn lex(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                tokens.push(SpannedToken {
                    token,
                    span: lexer.span(),
                });
            }
            Err(()) => {
                return Err(LexError {
                    span: lexer.span(),
                    message: format!("unexpected character: {:?}", &source[lexer.span()]),
                });
            }
        }
    }

    Ok(tokens)
}

/// An error that occurred during lexing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} at {}..{}", .span.start, .span.end)]
pub struct LexError {
    pub span: std::ops::Range<usize>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        lex(source).unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            kinds("var const routine declare lookup clear stats"),
            vec![
                Token::Var,
                Token::Const,
                Token::Routine,
                Token::Declare,
                Token::Lookup,
                Token::Clear,
                Token::Stats,
            ]
        );
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            kinds("var apple: string;"),
            vec![
                Token::Var,
                Token::Ident("apple".to_string()),
                Token::Colon,
                Token::Ident("string".to_string()),
                Token::Semi,
            ]
        );
    }

    #[test]
    fn test_negative_constant() {
        assert_eq!(
            kinds("const x = -42;"),
            vec![
                Token::Const,
                Token::Ident("x".to_string()),
                Token::Eq,
                Token::Minus,
                Token::Integer("42".to_string()),
                Token::Semi,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(kinds("variable"), vec![Token::Ident("variable".to_string())]);
        assert_eq!(kinds("Var"), vec![Token::Ident("Var".to_string())]);
    }

    #[test]
    fn test_comments_skipped() {
        let tokens = kinds("lookup a; // trailing\n/* block */ stats;");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[3], Token::Stats);
    }

    #[test]
    fn test_spans() {
        let tokens = lex("  clear;").unwrap();
        assert_eq!(tokens[0].span, 2..7);
        assert_eq!(tokens[1].span, 7..8);
    }

    #[test]
    fn test_oversized_integer_keeps_digits() {
        assert_eq!(
            kinds("99999999999999999999"),
            vec![Token::Integer("99999999999999999999".to_string())]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("lookup @;").unwrap_err();
        assert_eq!(err.span, 7..8);
        assert!(err.message.contains("@"));
    }
}
