use log::debug;

use crate::{
    error::RuntimeError,
    interpreter::value::core::Matrix,
    operator::Operator,
};

/// Result type used by the evaluator and the algebra engine.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Operator-precedence stack machine.
///
/// The scanner feeds operators and operands in the order they appear. An
/// operator that binds looser than the one on top of the stack forces that
/// top operator to reduce first. A closing bracket reduces everything back to
/// its opening bracket. No syntax tree is built.
///
/// ## Usage
///
/// One `Evaluator` serves one expression. Feed it with
/// [`Evaluator::push_operator`] and [`Evaluator::push_operand`], then call
/// [`Evaluator::finish`].
///
/// # Example
/// ```
/// use matrica::{
///     interpreter::{evaluator::core::Evaluator, value::core::Matrix},
///     operator::Operator,
/// };
///
/// let mut evaluator = Evaluator::new();
/// evaluator.push_operand(Matrix::new(vec![vec![1.0]]).unwrap());
/// evaluator.push_operator(Operator::Addition).unwrap();
/// evaluator.push_operand(Matrix::new(vec![vec![2.0]]).unwrap());
/// evaluator.push_operator(Operator::Multiplication).unwrap();
/// evaluator.push_operand(Matrix::new(vec![vec![3.0]]).unwrap());
///
/// // 1 + 2 * 3
/// assert_eq!(evaluator.finish().unwrap(), Matrix::new(vec![vec![7.0]]).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    pub(crate) operators: Vec<Operator>,
    pub(crate) operands:  Vec<Matrix>,
}

impl Evaluator {
    /// Creates an evaluator with both stacks empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a matrix onto the operand stack.
    pub fn push_operand(&mut self, matrix: Matrix) {
        debug!("operand {}x{}", matrix.rows(), matrix.cols());
        self.operands.push(matrix);
    }

    /// Feeds an operator, reducing whatever it forces to reduce first.
    ///
    /// # Errors
    /// - `RuntimeError::UnbalancedBrackets` for a `)` with no matching `(`.
    /// - Any error raised by the reductions it triggers.
    pub fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        debug!("operator {op}");

        if op == Operator::ClosedBracket {
            return self.close_bracket();
        }

        let Some(&top) = self.operators.last() else {
            self.operators.push(op);
            return Ok(());
        };

        if op == Operator::OpenBracket || top == Operator::OpenBracket || op.binds_tighter_than(top)
        {
            self.operators.push(op);
            return Ok(());
        }

        self.operators.pop();
        self.reduce(top)?;
        self.operators.push(op);
        Ok(())
    }

    /// Drains the operator stack and returns the single remaining operand.
    ///
    /// # Errors
    /// - `RuntimeError::UnbalancedBrackets` if a `(` was never closed.
    /// - `RuntimeError::LeftoverOperands` if more than one operand remains.
    /// - `RuntimeError::EmptyExpression` if no operand was ever pushed.
    pub fn finish(mut self) -> EvalResult<Matrix> {
        while let Some(op) = self.operators.pop() {
            if op == Operator::OpenBracket {
                return Err(RuntimeError::UnbalancedBrackets);
            }
            self.reduce(op)?;
        }

        match self.operands.len() {
            0 => Err(RuntimeError::EmptyExpression),
            1 => self.operands.pop().ok_or(RuntimeError::EmptyExpression),
            count => Err(RuntimeError::LeftoverOperands { count }),
        }
    }

    /// Number of operators currently stacked.
    #[must_use]
    pub fn pending_operators(&self) -> usize {
        self.operators.len()
    }

    /// Number of operands currently stacked.
    #[must_use]
    pub fn pending_operands(&self) -> usize {
        self.operands.len()
    }

    fn close_bracket(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.last().copied() {
                None => return Err(RuntimeError::UnbalancedBrackets),
                Some(Operator::OpenBracket) => {
                    self.operators.pop();
                    return Ok(());
                },
                Some(top) if Operator::ClosedBracket.rank() >= top.rank() => {
                    self.operators.pop();
                    self.reduce(top)?;
                },
                Some(_) => return Err(RuntimeError::UnbalancedBrackets),
            }
        }
    }
}
