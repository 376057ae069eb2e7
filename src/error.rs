/// Parsing errors.
///
/// Raised while the scanner walks the expression text: malformed matrix
/// literals, misplaced brackets and unknown keywords.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while the evaluator reduces operators: shape mismatches, missing
/// operands and unbalanced operator stacks.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The four failure categories an evaluation can end with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Misplaced or unbalanced brackets, or an expression that does not reduce
    /// to a single matrix.
    Syntax,
    /// Operands whose shapes do not fit the operation.
    DimensionMismatch,
    /// A matrix literal with ragged rows or an unparsable number.
    MalformedLiteral,
    /// An unknown keyword or an operator without a reduction.
    UnsupportedOperation,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Syntax => "Syntax",
            Self::DimensionMismatch => "DimensionMismatch",
            Self::MalformedLiteral => "MalformedLiteral",
            Self::UnsupportedOperation => "UnsupportedOperation",
        };
        write!(f, "{kind}")
    }
}

/// Any failure produced by [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The expression text could not be scanned.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An operator could not be reduced.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use matrica::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("[1 2;3]").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::MalformedLiteral);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
