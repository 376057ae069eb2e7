use log::trace;

use crate::{
    error::{Error, ParseError},
    interpreter::{lexer::Token, parser::literal::LiteralBuilder, value::core::Matrix},
    operator::Operator,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// What the scanner hands to the evaluator after a step.
#[derive(Debug, Clone, PartialEq)]
pub enum Emit {
    /// An operator or bracket.
    Operator(Operator),
    /// A finished matrix literal.
    Operand(Matrix),
}

/// Scanner state between two tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScanState {
    /// Outside any matrix literal.
    #[default]
    Idle,
    /// Inside `[ ... ]`.
    InLiteral(LiteralBuilder),
}

impl ScanState {
    /// Advances the scanner by one token.
    ///
    /// Returns the next state and, when the token completes something, the
    /// operator or matrix to hand to the evaluator.
    ///
    /// # Errors
    /// - `ParseError::UnknownOperation` for a word that is not a unary
    ///   operation.
    /// - `ParseError::InconsistentBrackets` for an operator or bracket inside
    ///   a literal, or a row separator outside one.
    /// - `ParseError::NumberOutsideMatrix` for digits outside a literal.
    /// - Any literal error raised while closing a row or the literal.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::{
    ///     lexer::Token,
    ///     parser::core::{Emit, ScanState},
    /// };
    ///
    /// let (state, emit) = ScanState::Idle.step(Token::LBracket, 0).unwrap();
    /// assert!(emit.is_none());
    /// let (state, _) = state.step(Token::Digits("4".into()), 1).unwrap();
    /// let (state, emit) = state.step(Token::RBracket, 2).unwrap();
    ///
    /// assert_eq!(state, ScanState::Idle);
    /// assert!(matches!(emit, Some(Emit::Operand(_))));
    /// ```
    pub fn step(self, token: Token, column: usize) -> Result<(Self, Option<Emit>), Error> {
        match self {
            Self::Idle => Self::step_idle(token, column),
            Self::InLiteral(literal) => Self::step_literal(literal, token, column),
        }
    }

    /// Checks that no literal is left open once the input ends.
    ///
    /// # Errors
    /// `ParseError::InconsistentBrackets` if a `[` was never closed.
    pub fn finish(self, column: usize) -> ParseResult<()> {
        match self {
            Self::Idle => Ok(()),
            Self::InLiteral(_) => Err(ParseError::InconsistentBrackets { column }),
        }
    }

    fn step_idle(token: Token, column: usize) -> Result<(Self, Option<Emit>), Error> {
        let emit = match token {
            Token::Word(word) => Emit::Operator(resolve_keyword(&word, column)?),
            Token::Digits(text) => {
                return Err(ParseError::NumberOutsideMatrix { text, column }.into());
            },
            Token::Minus => Emit::Operator(Operator::Subtraction),
            Token::Plus => Emit::Operator(Operator::Addition),
            Token::Star => Emit::Operator(Operator::Multiplication),
            Token::LParen => Emit::Operator(Operator::OpenBracket),
            Token::RParen => Emit::Operator(Operator::ClosedBracket),
            Token::LBracket => {
                trace!("scanner: literal opened at column {column}");
                return Ok((Self::InLiteral(LiteralBuilder::open()), None));
            },
            Token::RBracket | Token::Semicolon => {
                return Err(ParseError::InconsistentBrackets { column }.into());
            },
            Token::Whitespace => return Ok((Self::Idle, None)),
        };
        Ok((Self::Idle, Some(emit)))
    }

    fn step_literal(mut literal: LiteralBuilder,
                    token: Token,
                    column: usize)
                    -> Result<(Self, Option<Emit>), Error> {
        match token {
            Token::Digits(text) => literal.push_text(&text, column)?,
            Token::Minus => literal.push_text("-", column)?,
            Token::Whitespace => literal.mark_space(),
            Token::Semicolon => literal.end_row(column)?,
            Token::RBracket => {
                let (rows, cols, values) = literal.close(column)?;
                let matrix = Matrix::from_flat(rows, cols, values)?;
                trace!("scanner: literal closed at column {column}");
                return Ok((Self::Idle, Some(Emit::Operand(matrix))));
            },
            Token::Word(word) => {
                resolve_keyword(&word, column)?;
                return Err(ParseError::InconsistentBrackets { column }.into());
            },
            Token::Plus | Token::Star | Token::LParen | Token::RParen | Token::LBracket => {
                return Err(ParseError::InconsistentBrackets { column }.into());
            },
        }
        Ok((Self::InLiteral(literal), None))
    }
}

/// Maps a lowercase word to its unary operator.
///
/// # Errors
/// `ParseError::UnknownOperation` if the word names no unary operation.
pub fn resolve_keyword(word: &str, column: usize) -> ParseResult<Operator> {
    Operator::from_keyword(word).ok_or_else(|| ParseError::UnknownOperation { name:
                                                                                  word.to_string(),
                                                                              column })
}
