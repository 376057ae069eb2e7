use logos::Logos;

/// Represents a lexical token of a matrix expression.
///
/// The scanner gives most tokens different meanings depending on whether a
/// matrix literal is open. A `-`, for instance, is subtraction outside `[ ]`
/// and the sign of the next number inside.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A run of lowercase letters, such as `transpose`.
    #[regex(r"[a-z]+", |lex| lex.slice().to_string())]
    Word(String),
    /// A run of digits and decimal points, such as `3.25`. Validated as a
    /// number only when the literal row is flushed.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Digits(String),
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+")]
    Whitespace,
}

/// A token together with the byte offset where it starts.
pub type Spanned = (Token, usize);

/// Splits an expression into tokens.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` for the first character that does
/// not start any token.
///
/// # Example
/// ```
/// use matrica::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("rref([1 -2])").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds,
///            vec![Token::Word("rref".into()),
///                 Token::LParen,
///                 Token::LBracket,
///                 Token::Digits("1".into()),
///                 Token::Whitespace,
///                 Token::Minus,
///                 Token::Digits("2".into()),
///                 Token::RBracket,
///                 Token::RParen]);
///
/// assert!(tokenize("[1 2] / [3 4]").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, crate::error::ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            return Err(crate::error::ParseError::InvalidCharacter { character:
                                                                        lexer.slice().to_string(),
                                                                    column });
        }
    }

    Ok(tokens)
}
