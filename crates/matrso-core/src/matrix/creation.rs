//! Matrix creation and initialization helpers
//!
//! Numeric constructors (zeros, ones, identity, random) and conversions to and
//! from `scirs2_core::ndarray_ext::Array2`.

use super::types::Matrix;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::{NumCast, One, Zero};

impl<T> Matrix<T> {
    /// Create a matrix by evaluating `f(i, j)` for every cell in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let m = Matrix::from_fn(2, 3, |i, j| i * 10 + j);
    /// assert_eq!(m.to_vec(), vec![0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self::from_shape_vec(rows, cols, data)
    }

    /// Create a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Clone + Zero,
    {
        Self::filled(rows, cols, T::zero())
    }

    /// Create a matrix filled with ones
    pub fn ones(rows: usize, cols: usize) -> Self
    where
        T: Clone + One,
    {
        Self::filled(rows, cols, T::one())
    }

    /// Create an `n x n` identity matrix
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let eye = Matrix::<f64>::identity(3);
    /// assert_eq!(eye.at(1, 1), 1.0);
    /// assert_eq!(eye.at(1, 2), 0.0);
    /// ```
    pub fn identity(n: usize) -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Create a matrix with values drawn uniformly from `[low, high)`
    ///
    /// Samples that cannot be represented in `T` become zero.
    pub fn random_uniform(rows: usize, cols: usize, low: f64, high: f64) -> Self
    where
        T: NumCast + Zero,
    {
        use scirs2_core::random::quick::random_f64;
        let range = high - low;
        Self::from_fn(rows, cols, |_, _| {
            let sample = low + random_f64() * range;
            <T as NumCast>::from(sample).unwrap_or_else(T::zero)
        })
    }

    /// Copy a 2-D ndarray into a fresh matrix
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::array;
    /// use matrso_core::Matrix;
    ///
    /// let a = array![[1, 2], [3, 4]];
    /// let m = Matrix::from_array2(a.view());
    /// assert_eq!(m.at(1, 0), 3);
    /// ```
    pub fn from_array2(array: ArrayView2<'_, T>) -> Self
    where
        T: Clone,
    {
        let (rows, cols) = array.dim();
        Self::from_shape_vec(rows, cols, array.iter().cloned().collect())
    }

    /// Copy the logical contents into a 2-D ndarray
    pub fn to_array2(&self) -> Array2<T>
    where
        T: Clone,
    {
        Array2::from_shape_fn(self.shape(), |(i, j)| self.at(i, j))
    }
}
