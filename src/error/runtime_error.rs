use crate::{error::ErrorKind, operator::Operator};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while reducing the operator stack or
/// computing matrix operations.
pub enum RuntimeError {
    /// The operands of a binary operation have incompatible shapes.
    #[error("Matrices do not have appropriate dimensions for '{operator}': {left_rows}x{left_cols} and {right_rows}x{right_cols}.")]
    DimensionMismatch {
        /// The operation attempted.
        operator:   Operator,
        /// Row count of the left operand.
        left_rows:  usize,
        /// Column count of the left operand.
        left_cols:  usize,
        /// Row count of the right operand.
        right_rows: usize,
        /// Column count of the right operand.
        right_cols: usize,
    },
    /// `inverse` was applied to a non-square matrix.
    #[error("Matrix is not a square matrix: {rows}x{cols}.")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
    /// A matrix was built from rows of different lengths.
    #[error("The input matrix does not have appropriate dimensions: row {row} has {found} values, expected {expected}.")]
    RaggedRows {
        /// Index of the offending row.
        row:      usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found:    usize,
    },
    /// A matrix with no rows or no columns.
    #[error("A matrix needs at least one row and one column.")]
    EmptyMatrix,
    /// An operator found fewer operands than it consumes.
    #[error("Invalid expression: '{operator}' is missing an operand.")]
    MissingOperand {
        /// The operator being reduced.
        operator: Operator,
    },
    /// An opening bracket was never closed, or a closing bracket was never
    /// opened.
    #[error("Invalid expression: unbalanced brackets.")]
    UnbalancedBrackets,
    /// More than one operand was left once every operator was reduced.
    #[error("Invalid expression: {count} operands left without an operator.")]
    LeftoverOperands {
        /// Number of operands on the stack.
        count: usize,
    },
    /// Nothing to evaluate.
    #[error("Invalid expression: nothing to evaluate.")]
    EmptyExpression,
    /// An operator tag without a reduction.
    #[error("Invalid operator: {operator}.")]
    UnsupportedOperator {
        /// The operator.
        operator: Operator,
    },
}

impl RuntimeError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DimensionMismatch { .. } | Self::NotSquare { .. } => {
                ErrorKind::DimensionMismatch
            },
            Self::RaggedRows { .. } | Self::EmptyMatrix => ErrorKind::MalformedLiteral,
            Self::MissingOperand { .. }
            | Self::UnbalancedBrackets
            | Self::LeftoverOperands { .. }
            | Self::EmptyExpression => ErrorKind::Syntax,
            Self::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperation,
        }
    }
}
