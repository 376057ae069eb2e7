use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Matrix},
    operator::Operator,
};

impl Matrix {
    /// Element-wise sum.
    ///
    /// # Errors
    /// `RuntimeError::DimensionMismatch` unless both matrices have the same
    /// shape.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::value::core::Matrix;
    ///
    /// let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let b = Matrix::new(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
    ///
    /// let sum = a.addition(&b).unwrap();
    /// assert_eq!(sum, Matrix::new(vec![vec![6.0, 8.0], vec![10.0, 12.0]]).unwrap());
    /// ```
    pub fn addition(&self, other: &Self) -> EvalResult<Self> {
        self.elementwise(other, Operator::Addition, |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    /// `RuntimeError::DimensionMismatch` unless both matrices have the same
    /// shape.
    pub fn subtraction(&self, other: &Self) -> EvalResult<Self> {
        self.elementwise(other, Operator::Subtraction, |a, b| a - b)
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    /// `RuntimeError::DimensionMismatch` unless `self.cols() == other.rows()`.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::value::core::Matrix;
    ///
    /// let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let v = Matrix::new(vec![vec![1.0], vec![2.0]]).unwrap();
    ///
    /// let r = a.multiplication(&v).unwrap();
    /// assert_eq!(r, Matrix::new(vec![vec![5.0], vec![11.0]]).unwrap());
    ///
    /// assert!(v.multiplication(&a).is_err());
    /// ```
    pub fn multiplication(&self, other: &Self) -> EvalResult<Self> {
        if self.cols() != other.rows() {
            return Err(dim_mismatch(Operator::Multiplication, self, other));
        }

        let (m, k, n) = (self.rows(), self.cols(), other.cols());
        let mut values = Vec::with_capacity(m * n);

        for i in 0..m {
            for j in 0..n {
                let sum: f64 = (0..k).map(|l| self.at(i, l) * other.at(l, j)).sum();
                values.push(sum);
            }
        }

        Self::from_flat(m, n, values)
    }

    /// Swaps rows and columns: entry `(i, j)` moves to `(j, i)`.
    ///
    /// # Example
    /// ```
    /// use matrica::interpreter::value::core::Matrix;
    ///
    /// let a = Matrix::new(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.size(), (3, 1));
    /// assert_eq!(t.get(2, 0), Some(3.0));
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeroed(self.cols(), self.rows());
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                result.set(j, i, self.at(i, j));
            }
        }
        result
    }

    fn elementwise<F>(&self, other: &Self, operator: Operator, f: F) -> EvalResult<Self>
        where F: Fn(f64, f64) -> f64
    {
        if self.size() != other.size() {
            return Err(dim_mismatch(operator, self, other));
        }

        let values = self.as_slice()
                         .iter()
                         .zip(other.as_slice())
                         .map(|(a, b)| f(*a, *b))
                         .collect();

        Self::from_flat(self.rows(), self.cols(), values)
    }
}

/// Creates a dimension-mismatch error for the operands of `operator`.
#[must_use]
pub fn dim_mismatch(operator: Operator, left: &Matrix, right: &Matrix) -> RuntimeError {
    RuntimeError::DimensionMismatch { operator,
                                      left_rows: left.rows(),
                                      left_cols: left.cols(),
                                      right_rows: right.rows(),
                                      right_cols: right.cols() }
}

/// Operator forms of [`Matrix::addition`], [`Matrix::subtraction`] and
/// [`Matrix::multiplication`]. Each yields an `EvalResult` since shapes are
/// only checked at run time.
///
/// # Example
/// ```
/// use matrica::interpreter::value::core::Matrix;
///
/// let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::new(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
///
/// assert_eq!((&a + &b).unwrap(), Matrix::new(vec![vec![2.0, 3.0], vec![4.0, 5.0]]).unwrap());
/// assert_eq!((&a - &b).unwrap(), Matrix::new(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap());
/// assert_eq!((&a * &b).unwrap(), Matrix::new(vec![vec![3.0, 3.0], vec![7.0, 7.0]]).unwrap());
/// assert!((&a + &Matrix::new(vec![vec![1.0]]).unwrap()).is_err());
/// ```
impl std::ops::Add for &Matrix {
    type Output = EvalResult<Matrix>;

    fn add(self, rhs: Self) -> Self::Output {
        self.addition(rhs)
    }
}

impl std::ops::Sub for &Matrix {
    type Output = EvalResult<Matrix>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtraction(rhs)
    }
}

impl std::ops::Mul for &Matrix {
    type Output = EvalResult<Matrix>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiplication(rhs)
    }
}
