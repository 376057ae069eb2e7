use log::{trace, warn};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Matrix},
};

impl Matrix {
    /// Row echelon form.
    ///
    /// Gaussian elimination on a private copy: each pivot is swapped into the
    /// current row and every entry below it is cleared. Pivots are not
    /// normalised.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::value::core::Matrix;
    ///
    /// let a = Matrix::new(vec![vec![2.0, 4.0], vec![1.0, 3.0]]).unwrap();
    /// let r = a.row_echelon();
    /// assert_eq!(r, Matrix::new(vec![vec![2.0, 4.0], vec![0.0, 1.0]]).unwrap());
    /// ```
    #[must_use]
    pub fn row_echelon(&self) -> Self {
        let mut work = self.clone();
        let mut row = 0;
        let mut col = 0;

        while row < work.rows() && col < work.cols() {
            let Some((pivot_row, pivot_col)) = work.find_pivot(row, col) else {
                break;
            };
            trace!("ref: pivot at ({pivot_row}, {pivot_col}) for row {row}");

            work.swap_rows(row, pivot_row);
            let pivot = work.at(row, pivot_col);

            for k in row + 1..work.rows() {
                let factor = work.at(k, pivot_col) / pivot;
                if factor != 0.0 {
                    work.subtract_scaled_row(k, row, factor);
                    // (a / p) * p can miss a by one ulp
                    work.set(k, pivot_col, 0.0);
                }
            }

            row += 1;
            col = pivot_col + 1;
        }

        work
    }

    /// Reduced row echelon form: unit pivots with zeros above and below.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::value::core::Matrix;
    ///
    /// let a = Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 8.0]]).unwrap();
    /// let r = a.reduced_row_echelon();
    /// assert_eq!(r,
    ///            Matrix::new(vec![vec![1.0, 2.0, 0.0], vec![0.0, 0.0, 1.0]]).unwrap());
    /// ```
    #[must_use]
    pub fn reduced_row_echelon(&self) -> Self {
        self.gauss_jordan().0
    }

    /// Inverse of a square matrix.
    ///
    /// Computed by the same Gauss-Jordan pass as
    /// [`Matrix::reduced_row_echelon`], replaying every row operation on an
    /// identity matrix. A singular input yields the accumulated matrix, which
    /// is not an inverse; this is logged as a warning.
    ///
    /// # Errors
    /// `RuntimeError::NotSquare` if the row and column counts differ.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::value::core::Matrix;
    ///
    /// let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert_eq!(inv, Matrix::new(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]).unwrap());
    ///
    /// let wide = Matrix::new(vec![vec![1.0, 2.0]]).unwrap();
    /// assert!(wide.inverse().is_err());
    /// ```
    pub fn inverse(&self) -> EvalResult<Self> {
        if !self.is_square() {
            return Err(RuntimeError::NotSquare { rows: self.rows(),
                                                 cols: self.cols(), });
        }

        let (reduced, shadow) = self.gauss_jordan();
        if reduced != Self::unit(self.rows()) {
            warn!("inverse requested for a singular {0}x{0} matrix", self.rows());
        }
        Ok(shadow)
    }

    /// Runs Gauss-Jordan elimination and returns the reduced working copy
    /// together with the identity matrix that received the same row
    /// operations.
    fn gauss_jordan(&self) -> (Self, Self) {
        let mut work = self.clone();
        let mut shadow = Self::unit(self.rows());
        let mut row = 0;
        let mut col = 0;

        while row < work.rows() && col < work.cols() {
            let Some((pivot_row, pivot_col)) = work.find_pivot(row, col) else {
                break;
            };
            trace!("rref: pivot at ({pivot_row}, {pivot_col}) for row {row}");

            work.swap_rows(row, pivot_row);
            shadow.swap_rows(row, pivot_row);

            let pivot = work.at(row, pivot_col);
            work.divide_row(row, pivot);
            shadow.divide_row(row, pivot);

            for k in (0..work.rows()).filter(|k| *k != row) {
                let factor = work.at(k, pivot_col);
                if factor != 0.0 {
                    work.subtract_scaled_row(k, row, factor);
                    shadow.subtract_scaled_row(k, row, factor);
                }
            }

            row += 1;
            col = pivot_col + 1;
        }

        (work, shadow)
    }

    /// Finds the leftmost column at or after `col` holding a nonzero entry in
    /// rows `row..`, and returns the topmost such entry.
    ///
    /// Searching column by column, rather than row by row, keeps
    /// `a * inverse(a)` equal to the identity for every invertible `a`; a
    /// row-major scan leaves `[0 1;1 0]` unreduced. As a consequence
    /// `ref([0 1;1 0])` swaps the rows into the identity.
    fn find_pivot(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        (col..self.cols()).find_map(|c| {
                              (row..self.rows()).find(|r| self.at(*r, c) != 0.0)
                                                .map(|r| (r, c))
                          })
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols() {
            let tmp = self.at(a, c);
            self.set(a, c, self.at(b, c));
            self.set(b, c, tmp);
        }
    }

    fn divide_row(&mut self, row: usize, divisor: f64) {
        for c in 0..self.cols() {
            self.set(row, c, self.at(row, c) / divisor);
        }
    }

    /// `target -= factor * source`
    fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        for c in 0..self.cols() {
            let value = self.at(target, c) - factor * self.at(source, c);
            self.set(target, c, value);
        }
    }
}
