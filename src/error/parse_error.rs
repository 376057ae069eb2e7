use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while scanning an expression.
pub enum ParseError {
    /// A bracket, operator or row separator appeared while a matrix literal
    /// was in the wrong open/closed state.
    #[error("Inconsistent matrix brackets at column {column}.")]
    InconsistentBrackets {
        /// Byte offset of the offending character.
        column: usize,
    },
    /// A row of a matrix literal has a different length than the first row.
    #[error("Matrix has inconsistent size: expected {expected} values per row, found {found} (column {column}).")]
    InconsistentRowSize {
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found:    usize,
        /// Byte offset of the separator closing the row.
        column:   usize,
    },
    /// A matrix literal row without values, such as `[]` or `[1;]`.
    #[error("Matrix row without values at column {column}.")]
    EmptyRow {
        /// Byte offset of the separator closing the row.
        column: usize,
    },
    /// A numeric token inside a matrix literal is not a valid number.
    #[error("Invalid number '{text}' at column {column}.")]
    InvalidNumber {
        /// The buffered text.
        text:   String,
        /// Byte offset where the number started.
        column: usize,
    },
    /// Numbers are only allowed inside matrix brackets.
    #[error("Number '{text}' outside of matrix brackets at column {column}.")]
    NumberOutsideMatrix {
        /// The numeric text.
        text:   String,
        /// Byte offset of the number.
        column: usize,
    },
    /// A character the scanner does not recognise.
    #[error("Invalid character '{character}' at column {column}.")]
    InvalidCharacter {
        /// The character.
        character: String,
        /// Byte offset of the character.
        column:    usize,
    },
    /// A lowercase word that is not a unary operation.
    #[error("'{name}' is not a defined unary operation.")]
    UnknownOperation {
        /// The word as written.
        name:   String,
        /// Byte offset where the word started.
        column: usize,
    },
}

impl ParseError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InconsistentBrackets { .. } | Self::NumberOutsideMatrix { .. } => {
                ErrorKind::Syntax
            },
            Self::InconsistentRowSize { .. }
            | Self::EmptyRow { .. }
            | Self::InvalidNumber { .. }
            | Self::InvalidCharacter { .. } => ErrorKind::MalformedLiteral,
            Self::UnknownOperation { .. } => ErrorKind::UnsupportedOperation,
        }
    }
}
