use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A rectangular grid of floating-point numbers.
///
/// Every matrix has at least one row and one column and all rows share the
/// same length. Values are stored row-major. Operations never mutate their
/// inputs; each returns a fresh matrix.
///
/// Equality is exact and element-wise. Matrices of different shapes are never
/// equal. No tolerance is applied, so results of elimination should be
/// compared against values that are exactly representable.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows:   usize,
    cols:   usize,
    values: Vec<f64>,
}

/// How a matrix is rendered as text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Space separated values, one row per line.
    #[default]
    Plain,
    /// The literal syntax accepted as input: `[ 1.0 2.0 ; 3.0 4.0 ]`.
    Brackets,
}

impl Matrix {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    /// - `RuntimeError::EmptyMatrix` if there are no rows or the rows are
    ///   empty.
    /// - `RuntimeError::RaggedRows` if a row length differs from the first.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::value::core::Matrix;
    ///
    /// let m = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.size(), (2, 2));
    /// assert_eq!(m.get(1, 0), Some(3.0));
    ///
    /// assert!(Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<f64>>) -> EvalResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(RuntimeError::EmptyMatrix);
        }

        if let Some((row, found)) = rows.iter()
                                        .map(Vec::len)
                                        .enumerate()
                                        .find(|(_, len)| *len != cols)
        {
            return Err(RuntimeError::RaggedRows { row,
                                                  expected: cols,
                                                  found });
        }

        let row_count = rows.len();
        Ok(Self { rows:   row_count,
                  cols,
                  values: rows.into_iter().flatten().collect(), })
    }

    /// Builds a matrix from row-major values, where the entry at `(row, col)`
    /// is `values[row * cols + col]`.
    ///
    /// # Errors
    /// - `RuntimeError::EmptyMatrix` if either dimension is zero.
    /// - `RuntimeError::RaggedRows` if `values` does not hold exactly
    ///   `rows * cols` entries.
    pub fn from_flat(rows: usize, cols: usize, values: Vec<f64>) -> EvalResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(RuntimeError::EmptyMatrix);
        }
        if values.len() != rows * cols {
            return Err(RuntimeError::RaggedRows { row:      values.len() / cols,
                                                  expected: cols,
                                                  found:    values.len() % cols, });
        }
        Ok(Self { rows, cols, values })
    }

    /// A `rows` x `cols` matrix of zeros.
    ///
    /// # Errors
    /// `RuntimeError::EmptyMatrix` if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> EvalResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(RuntimeError::EmptyMatrix);
        }
        Ok(Self::zeroed(rows, cols))
    }

    /// The `size` x `size` identity matrix.
    ///
    /// # Errors
    /// `RuntimeError::EmptyMatrix` if `size` is zero.
    ///
    /// # Example
    /// ```
    /// use matrica::{error::RuntimeError, interpreter::value::core::Matrix};
    ///
    /// let id = Matrix::identity(2).unwrap();
    /// assert_eq!(id, Matrix::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap());
    /// assert_eq!(Matrix::identity(0), Err(RuntimeError::EmptyMatrix));
    /// ```
    pub fn identity(size: usize) -> EvalResult<Self> {
        if size == 0 {
            return Err(RuntimeError::EmptyMatrix);
        }
        Ok(Self::unit(size))
    }

    /// Zero matrix for dimensions already known to be nonzero.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self { rows,
               cols,
               values: vec![0.0; rows * cols] }
    }

    /// Identity matrix for a size already known to be nonzero.
    pub(crate) fn unit(size: usize) -> Self {
        let mut matrix = Self::zeroed(size, size);
        for i in 0..size {
            matrix.values[i * size + i] = 1.0;
        }
        matrix
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub const fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// `true` when the row and column counts agree.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The entry at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }

    /// The values of one row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.values.get(start..start + self.cols)
    }

    /// Iterates over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.cols)
    }

    /// Row-major view of every entry.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    // Callers inside the algebra engine guarantee the indices are in bounds.
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.cols + col] = value;
    }

    /// Renders the matrix in the requested style.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::value::core::{Matrix, OutputStyle};
    ///
    /// let m = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.5]]).unwrap();
    /// assert_eq!(m.render(OutputStyle::Plain), "1.0 2.0\n3.0 4.5\n");
    /// assert_eq!(m.render(OutputStyle::Brackets), "[ 1.0 2.0 ; 3.0 4.5 ]");
    /// ```
    #[must_use]
    pub fn render(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Plain => self.to_string(),
            OutputStyle::Brackets => self.bracketed(),
        }
    }

    fn bracketed(&self) -> String {
        let rows: Vec<String> = self.iter_rows()
                                    .map(|row| {
                                        row.iter()
                                           .map(|v| format_entry(*v))
                                           .collect::<Vec<_>>()
                                           .join(" ")
                                    })
                                    .collect();
        format!("[ {} ]", rows.join(" ; "))
    }
}

/// Formats one entry the way results are printed: always with a decimal
/// point, and without a sign on zero.
#[must_use]
pub fn format_entry(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:?}")
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.iter_rows() {
            let line = row.iter()
                          .map(|v| format_entry(*v))
                          .collect::<Vec<_>>()
                          .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
