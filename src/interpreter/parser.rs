/// The scanner state machine.
///
/// Walks the token stream, switching between the idle state and the
/// matrix-literal state, and emits operators and finished matrices.
pub mod core;

/// Matrix literal assembly.
///
/// Buffers numeric text, splits it on whitespace, checks that every row has
/// the same length and builds the matrix once the literal closes.
pub mod literal;
