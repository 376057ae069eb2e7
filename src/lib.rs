//! # matrica
//!
//! matrica evaluates arithmetic expressions over matrices typed as flat text,
//! such as `[1 2;3 4] * transpose([1 2])`. Matrix literals are written in
//! brackets with spaces between values and `;` between rows. The operators
//! are `+`, `-`, `*` and the prefix operations `transpose`, `ref`, `rref` and
//! `inverse`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use log::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::tokenize,
        parser::core::{Emit, ScanState},
        value::core::Matrix,
    },
};

/// Provides unified error types for scanning and evaluation.
///
/// Every failure carries one of four kinds: syntax, dimension mismatch,
/// malformed literal or unsupported operation. Scanning failures and
/// reduction failures live in separate enums wrapped by a single `Error`.
pub mod error;
/// Orchestrates expression evaluation.
///
/// Ties together the lexer, the scanner state machine, the precedence
/// evaluator and the matrix value type.
pub mod interpreter;
/// Operator tags and the precedence table.
///
/// Defines the closed set of operators with their explicit ranks, arities and
/// keyword spellings.
pub mod operator;

pub use crate::interpreter::value::core::OutputStyle;

/// Evaluates one expression and returns the resulting matrix.
///
/// Each call owns its scanner state and evaluator stacks, so independent
/// calls share nothing.
///
/// # Errors
/// Returns an error if the text is malformed, the operands do not fit an
/// operation, or the expression does not reduce to exactly one matrix.
///
/// # Examples
/// ```
/// use matrica::{evaluate, interpreter::value::core::Matrix};
///
/// let result = evaluate("[1 2;3 4] + [5 6;7 8]").unwrap();
/// assert_eq!(result, Matrix::new(vec![vec![6.0, 8.0], vec![10.0, 12.0]]).unwrap());
///
/// // Rows of different lengths.
/// assert!(evaluate("[1 2;3]").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Matrix, Error> {
    debug!("evaluating {source:?}");

    let mut evaluator = Evaluator::new();
    let mut state = ScanState::Idle;

    for (token, column) in tokenize(source)? {
        let (next, emit) = state.step(token, column)?;
        state = next;
        match emit {
            Some(Emit::Operator(op)) => evaluator.push_operator(op)?,
            Some(Emit::Operand(matrix)) => evaluator.push_operand(matrix),
            None => {},
        }
    }

    state.finish(source.len())?;
    Ok(evaluator.finish()?)
}

/// Evaluates one expression and renders the result in the given style.
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Examples
/// ```
/// use matrica::{OutputStyle, evaluate_to_string};
///
/// let text = evaluate_to_string("inverse([1 2;3 4])", OutputStyle::Brackets).unwrap();
/// assert_eq!(text, "[ -2.0 1.0 ; 1.5 -0.5 ]");
/// ```
pub fn evaluate_to_string(source: &str, style: OutputStyle) -> Result<String, Error> {
    evaluate(source).map(|matrix| matrix.render(style))
}

/// Tells whether a line is the read loop's termination command.
#[must_use]
pub fn is_quit_command(line: &str) -> bool {
    matches!(line.trim(), "^Q" | "^q")
}

