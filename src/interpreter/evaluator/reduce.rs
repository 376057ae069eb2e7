use log::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Matrix,
    },
    operator::Operator,
};

impl Evaluator {
    /// Applies `op` to the operands on top of the stack and pushes the result.
    ///
    /// Binary operators pop the right operand first, since it was pushed
    /// last. `(` hands the top operand back unchanged. `)` has no reduction.
    ///
    /// # Errors
    /// - `RuntimeError::MissingOperand` if the stack holds fewer operands than
    ///   `op` consumes.
    /// - `RuntimeError::UnsupportedOperator` for `)`.
    /// - Any error raised by the matrix operation itself.
    pub(crate) fn reduce(&mut self, op: Operator) -> EvalResult<()> {
        if self.operands.len() < op.arity() {
            return Err(RuntimeError::MissingOperand { operator: op });
        }

        let result = match op {
            Operator::Addition => {
                let (left, right) = self.pop_pair(op)?;
                left.addition(&right)?
            },
            Operator::Subtraction => {
                let (left, right) = self.pop_pair(op)?;
                left.subtraction(&right)?
            },
            Operator::Multiplication => {
                let (left, right) = self.pop_pair(op)?;
                left.multiplication(&right)?
            },
            Operator::Transpose => self.pop_one(op)?.transpose(),
            Operator::Ref => self.pop_one(op)?.row_echelon(),
            Operator::Rref => self.pop_one(op)?.reduced_row_echelon(),
            Operator::Inverse => self.pop_one(op)?.inverse()?,
            Operator::OpenBracket => self.pop_one(op)?,
            Operator::ClosedBracket => {
                return Err(RuntimeError::UnsupportedOperator { operator: op });
            },
        };

        debug!("reduced {op} into {}x{}", result.rows(), result.cols());
        self.operands.push(result);
        Ok(())
    }

    fn pop_one(&mut self, operator: Operator) -> EvalResult<Matrix> {
        self.operands
            .pop()
            .ok_or(RuntimeError::MissingOperand { operator })
    }

    /// Pops `(left, right)`, right first.
    fn pop_pair(&mut self, operator: Operator) -> EvalResult<(Matrix, Matrix)> {
        let right = self.pop_one(operator)?;
        let left = self.pop_one(operator)?;
        Ok((left, right))
    }
}
