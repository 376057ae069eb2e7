/// The two-stack precedence machine.
///
/// Holds the operator and operand stacks, decides when an incoming operator
/// forces a reduction and drains both stacks at the end of an expression.
pub mod core;

/// Operator reduction.
///
/// Pops operands for one operator, dispatches to the matrix operation and
/// pushes the result.
pub mod reduce;
