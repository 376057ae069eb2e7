use matrica::{
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::core::Matrix},
    operator::Operator,
};
use rstest::rstest;

fn scalar(value: f64) -> Matrix {
    Matrix::new(vec![vec![value]]).unwrap()
}

#[rstest]
#[case(Operator::OpenBracket, 0)]
#[case(Operator::Transpose, 1)]
#[case(Operator::Ref, 2)]
#[case(Operator::Inverse, 3)]
#[case(Operator::Rref, 4)]
#[case(Operator::Multiplication, 5)]
#[case(Operator::Subtraction, 6)]
#[case(Operator::Addition, 7)]
#[case(Operator::ClosedBracket, 8)]
fn precedence_ranks(#[case] op: Operator, #[case] rank: u8) {
    assert_eq!(op.rank(), rank);
}

#[rstest]
#[case("transpose", Some(Operator::Transpose))]
#[case("ref", Some(Operator::Ref))]
#[case("rref", Some(Operator::Rref))]
#[case("inverse", Some(Operator::Inverse))]
#[case("trans", None)]
#[case("", None)]
fn keywords(#[case] word: &str, #[case] expected: Option<Operator>) {
    assert_eq!(Operator::from_keyword(word), expected);
}

#[test]
fn tighter_operator_waits_on_the_stack() {
    let mut evaluator = Evaluator::new();
    evaluator.push_operand(scalar(1.0));
    evaluator.push_operator(Operator::Addition).unwrap();
    evaluator.push_operand(scalar(2.0));
    evaluator.push_operator(Operator::Multiplication).unwrap();

    assert_eq!(evaluator.pending_operators(), 2);
    assert_eq!(evaluator.pending_operands(), 2);
}

#[test]
fn looser_operator_forces_a_reduction() {
    let mut evaluator = Evaluator::new();
    evaluator.push_operand(scalar(2.0));
    evaluator.push_operator(Operator::Multiplication).unwrap();
    evaluator.push_operand(scalar(3.0));
    evaluator.push_operator(Operator::Addition).unwrap();

    assert_eq!(evaluator.pending_operators(), 1);
    assert_eq!(evaluator.pending_operands(), 1);

    evaluator.push_operand(scalar(1.0));
    assert_eq!(evaluator.finish().unwrap(), scalar(7.0));
}

#[test]
fn closing_bracket_reduces_the_group() {
    let mut evaluator = Evaluator::new();
    evaluator.push_operator(Operator::OpenBracket).unwrap();
    evaluator.push_operand(scalar(4.0));
    evaluator.push_operator(Operator::Subtraction).unwrap();
    evaluator.push_operand(scalar(1.0));
    evaluator.push_operator(Operator::ClosedBracket).unwrap();

    assert_eq!(evaluator.pending_operators(), 0);
    assert_eq!(evaluator.finish().unwrap(), scalar(3.0));
}

#[test]
fn unmatched_closing_bracket_fails() {
    let mut evaluator = Evaluator::new();
    evaluator.push_operand(scalar(1.0));
    assert_eq!(evaluator.push_operator(Operator::ClosedBracket),
               Err(RuntimeError::UnbalancedBrackets));
}

#[test]
fn unmatched_opening_bracket_fails() {
    let mut evaluator = Evaluator::new();
    evaluator.push_operator(Operator::OpenBracket).unwrap();
    evaluator.push_operand(scalar(1.0));
    assert_eq!(evaluator.finish(), Err(RuntimeError::UnbalancedBrackets));
}

#[test]
fn leftover_operands_fail() {
    let mut evaluator = Evaluator::new();
    evaluator.push_operand(scalar(1.0));
    evaluator.push_operand(scalar(2.0));
    assert_eq!(evaluator.finish(), Err(RuntimeError::LeftoverOperands { count: 2 }));
}

#[test]
fn missing_operand_fails() {
    let mut evaluator = Evaluator::new();
    evaluator.push_operand(scalar(1.0));
    evaluator.push_operator(Operator::Multiplication).unwrap();
    assert_eq!(evaluator.finish(),
               Err(RuntimeError::MissingOperand { operator: Operator::Multiplication }));
}

#[test]
fn empty_evaluator_fails() {
    assert_eq!(Evaluator::new().finish(), Err(RuntimeError::EmptyExpression));
}
