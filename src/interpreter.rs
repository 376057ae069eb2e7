/// The evaluator module reduces operators over a stack of matrices.
///
/// The evaluator receives operators and operands in source order, resolves
/// precedence and brackets with two stacks and produces the final matrix.
///
/// # Responsibilities
/// - Holds the operator and operand stacks for one expression.
/// - Decides when an incoming operator forces a pending one to reduce.
/// - Reports malformed stack states such as unbalanced brackets.
pub mod evaluator;
/// The lexer module tokenizes an expression.
///
/// Splits the raw text into words, digit runs, operator symbols, brackets,
/// row separators and whitespace, each tagged with its byte offset.
pub mod lexer;
/// The parser module interprets the token stream.
///
/// A small state machine tracks whether a matrix literal is open, assembles
/// literals into matrices and turns keywords and symbols into operators.
///
/// # Responsibilities
/// - Validates literal shape and numeric text.
/// - Rejects operators and brackets inside literals.
/// - Emits operators and operands for the evaluator.
pub mod parser;
/// The value module defines the matrix type and its algebra.
///
/// # Responsibilities
/// - Defines `Matrix` with exact element-wise equality and text forms.
/// - Implements addition, subtraction, multiplication and transposition.
/// - Implements row echelon form, reduced row echelon form and inverse.
pub mod value;
