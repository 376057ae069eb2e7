//! Property-based tests for the matrix algebra.
//!
//! Entries are small integers so that every property can be checked with
//! exact equality.

use matrica::{error::RuntimeError, interpreter::value::core::Matrix};
use proptest::prelude::*;

fn matrix_with_shape(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-9i32..=9, rows * cols).prop_map(move |values| {
        Matrix::from_flat(rows, cols, values.into_iter().map(f64::from).collect())
            .expect("shape matches the generated values")
    })
}

fn any_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| matrix_with_shape(rows, cols))
}

fn same_shape_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
        (matrix_with_shape(rows, cols), matrix_with_shape(rows, cols))
    })
}

/// Unit lower triangular times unit upper triangular. Every elimination
/// pivot of such a product is exactly 1, so its inverse is computed without
/// rounding.
fn unimodular() -> impl Strategy<Value = Matrix> {
    (1usize..=4).prop_flat_map(|n| {
        (prop::collection::vec(-3i32..=3, n * n), prop::collection::vec(-3i32..=3, n * n))
            .prop_map(move |(l, u)| {
                let lower = triangular(n, &l, |r, c| r > c);
                let upper = triangular(n, &u, |r, c| r < c);
                lower.multiplication(&upper).expect("square factors")
            })
    })
}

fn triangular(n: usize, values: &[i32], keep: impl Fn(usize, usize) -> bool) -> Matrix {
    let entries = (0..n * n).map(|i| {
                                let (r, c) = (i / n, i % n);
                                if r == c {
                                    1.0
                                } else if keep(r, c) {
                                    f64::from(values[i])
                                } else {
                                    0.0
                                }
                            })
                            .collect();
    Matrix::from_flat(n, n, entries).expect("square shape")
}

proptest! {
    #[test]
    fn addition_commutes((a, b) in same_shape_pair()) {
        prop_assert_eq!(a.addition(&b).unwrap(), b.addition(&a).unwrap());
    }

    #[test]
    fn subtraction_round_trips((a, b) in same_shape_pair()) {
        let difference = a.subtraction(&b).unwrap();
        prop_assert_eq!(difference.addition(&b).unwrap(), a);
    }

    #[test]
    fn transpose_is_an_involution(a in any_matrix()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn transpose_swaps_shape(a in any_matrix()) {
        let (rows, cols) = a.size();
        prop_assert_eq!(a.transpose().size(), (cols, rows));
    }

    #[test]
    fn rref_is_idempotent(a in any_matrix()) {
        let reduced = a.reduced_row_echelon();
        prop_assert_eq!(reduced.reduced_row_echelon(), reduced);
    }

    #[test]
    fn ref_leaves_zeros_below_the_first_column_pivot(a in any_matrix()) {
        let echelon = a.row_echelon();
        if let Some(col) = (0..echelon.cols()).find(|c| echelon.get(0, *c) != Some(0.0)) {
            for row in 1..echelon.rows() {
                prop_assert_eq!(echelon.get(row, col), Some(0.0));
            }
        }
    }

    #[test]
    fn inverse_is_a_two_sided_inverse(a in unimodular()) {
        let inverse = a.inverse().unwrap();
        let identity = Matrix::identity(a.rows()).unwrap();
        prop_assert_eq!(a.multiplication(&inverse).unwrap(), identity.clone());
        prop_assert_eq!(inverse.multiplication(&a).unwrap(), identity);
    }

    #[test]
    fn operations_never_mutate_inputs(a in any_matrix()) {
        let before = a.clone();
        let _ = a.row_echelon();
        let _ = a.reduced_row_echelon();
        let _ = a.inverse();
        let _ = a.transpose();
        prop_assert_eq!(a, before);
    }

    #[test]
    fn mismatched_shapes_fail(a in any_matrix(), b in any_matrix()) {
        if a.size() != b.size() {
            let is_mismatch = matches!(a.addition(&b), Err(RuntimeError::DimensionMismatch { .. }));
            prop_assert!(is_mismatch);
            let is_mismatch = matches!(a.subtraction(&b), Err(RuntimeError::DimensionMismatch { .. }));
            prop_assert!(is_mismatch);
        }
        if a.cols() != b.rows() {
            let is_mismatch =
                matches!(a.multiplication(&b), Err(RuntimeError::DimensionMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }

    #[test]
    fn non_square_inverse_fails(a in any_matrix()) {
        if !a.is_square() {
            let is_not_square = matches!(a.inverse(), Err(RuntimeError::NotSquare { .. }));
            prop_assert!(is_not_square);
        }
    }
}
