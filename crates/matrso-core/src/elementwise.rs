//! Generic element-wise engine
//!
//! [`element_wise`] applies a caller-supplied operator cell by cell across a
//! tuple of operands. Each operand is either a matrix reference, broadcast
//! cell by cell, or a scalar, repeated for every cell. Every arithmetic,
//! bitwise, comparison and min/max operation on [`Matrix`] is a thin adapter
//! over this engine.
//!
//! The operator receives one tuple holding the operands' values for the
//! current cell, in operand order, and its return type becomes the result's
//! element type:
//!
//! ```
//! use matrso_core::{element_wise, Matrix};
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
//! let b = Matrix::from_vec(2, 2, vec![4, 3, 2, 1]);
//!
//! let sum = element_wise(|(x, y, s)| x + y + s, (&a, &b, 10));
//! assert_eq!(sum.to_vec(), vec![15, 15, 15, 15]);
//!
//! let bigger: Matrix<bool> = element_wise(|(x, y)| x > y, (&a, &b));
//! assert_eq!(bigger.to_vec(), vec![false, false, true, true]);
//! ```
//!
//! # Contract
//!
//! At least one operand must be a matrix and all matrix operands must share
//! one logical shape. The unchecked engine does not report violations:
//! without a matrix operand it returns the empty matrix, and a mismatched
//! shape trips a debug assertion (release builds read out of range or panic).
//! [`try_element_wise`] checks both and returns a [`MatrixError`].

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

/// One argument of an element-wise operation
pub trait Operand {
    /// Value contributed to each cell
    type Elem;

    /// Logical shape for matrix operands, `None` for scalars
    fn dims(&self) -> Option<(usize, usize)>;

    /// Value at logical `(i, j)`
    fn elem(&self, i: usize, j: usize) -> Self::Elem;
}

impl<T: Clone> Operand for &Matrix<T> {
    type Elem = T;

    fn dims(&self) -> Option<(usize, usize)> {
        Some(self.shape())
    }

    #[inline]
    fn elem(&self, i: usize, j: usize) -> T {
        self.at(i, j)
    }
}

/// Wrapper broadcasting any cloneable value as a scalar operand
///
/// Primitive numbers, `bool` and `char` are operands by themselves; use
/// `Scalar` for other element types.
///
/// ```
/// use matrso_core::{element_wise, Matrix, Scalar};
///
/// let names = Matrix::filled(1, 2, String::from("x"));
/// let tagged = element_wise(|(n, t): (String, String)| n + &t, (&names, Scalar("!".to_string())));
/// assert_eq!(tagged.at(0, 1), "x!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar<T>(pub T);

impl<T: Clone> Operand for Scalar<T> {
    type Elem = T;

    fn dims(&self) -> Option<(usize, usize)> {
        None
    }

    #[inline]
    fn elem(&self, _i: usize, _j: usize) -> T {
        self.0.clone()
    }
}

macro_rules! scalar_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl Operand for $t {
                type Elem = $t;

                fn dims(&self) -> Option<(usize, usize)> {
                    None
                }

                #[inline]
                fn elem(&self, _i: usize, _j: usize) -> $t {
                    *self
                }
            }
        )*
    };
}

scalar_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// A tuple of [`Operand`]s
///
/// Implemented for tuples of one to six operands.
pub trait Operands {
    /// Tuple of per-cell values handed to the operator
    type Elems;

    /// Shape of the first matrix operand
    fn dims(&self) -> Option<(usize, usize)>;

    /// Shape of the first matrix operand whose shape differs from `shape`
    fn mismatch(&self, shape: (usize, usize)) -> Option<(usize, usize)>;

    /// Per-cell values at logical `(i, j)`
    fn elems(&self, i: usize, j: usize) -> Self::Elems;
}

macro_rules! tuple_operands {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Operand),+> Operands for ($($name,)+) {
            type Elems = ($($name::Elem,)+);

            fn dims(&self) -> Option<(usize, usize)> {
                None$(.or_else(|| self.$idx.dims()))+
            }

            fn mismatch(&self, shape: (usize, usize)) -> Option<(usize, usize)> {
                None$(.or_else(|| self.$idx.dims().filter(|d| *d != shape)))+
            }

            #[inline]
            fn elems(&self, i: usize, j: usize) -> Self::Elems {
                ($(self.$idx.elem(i, j),)+)
            }
        }
    };
}

tuple_operands!(A 0);
tuple_operands!(A 0, B 1);
tuple_operands!(A 0, B 1, C 2);
tuple_operands!(A 0, B 1, C 2, D 3);
tuple_operands!(A 0, B 1, C 2, D 3, E 4);
tuple_operands!(A 0, B 1, C 2, D 3, E 4, F 5);

/// Apply `op` cell by cell, producing a fresh matrix
///
/// The result has the shape of the first matrix operand.
pub fn element_wise<L, F, R>(mut op: F, operands: L) -> Matrix<R>
where
    L: Operands,
    F: FnMut(L::Elems) -> R,
{
    let Some((rows, cols)) = operands.dims() else {
        log::warn!("element_wise: no matrix operand, returning the empty matrix");
        return Matrix::default();
    };
    debug_assert!(
        operands.mismatch((rows, cols)).is_none(),
        "element_wise: operand shape {:?} differs from {:?}",
        operands.mismatch((rows, cols)),
        (rows, cols)
    );
    Matrix::from_fn(rows, cols, |i, j| op(operands.elems(i, j)))
}

/// [`element_wise`] with the operand contract checked
///
/// # Examples
///
/// ```
/// use matrso_core::{try_element_wise, Matrix, MatrixError};
///
/// let a = Matrix::<i32>::zeros(2, 2);
/// let b = Matrix::<i32>::zeros(2, 3);
/// assert!(matches!(
///     try_element_wise(|(x, y)| x + y, (&a, &b)),
///     Err(MatrixError::ShapeMismatch { .. })
/// ));
/// ```
pub fn try_element_wise<L, F, R>(op: F, operands: L) -> MatrixResult<Matrix<R>>
where
    L: Operands,
    F: FnMut(L::Elems) -> R,
{
    let shape = operands.dims().ok_or(MatrixError::NoMatrixOperand)?;
    if let Some(actual) = operands.mismatch(shape) {
        log::debug!("try_element_wise: {:?} vs {:?}", shape, actual);
        return Err(MatrixError::shape_mismatch("element_wise", shape, actual));
    }
    Ok(element_wise(op, operands))
}

impl<T> Matrix<T> {
    /// Update every cell in place: `self(i, j) = op(self(i, j), operands(i, j))`
    ///
    /// Cells are visited in logical row-major order and each result is
    /// written before the next cell is read. An operand aliasing this buffer
    /// sees the cells already updated, and a view that repeats a physical
    /// cell applies `op` to it once per occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
    /// let t = m.share_transpose();
    /// m.assign_element_wise(|x, (y, s)| x * s + y, (&t, 10));
    /// assert_eq!(m.to_vec(), vec![11, 23, 53, 44]);
    /// ```
    pub fn assign_element_wise<L, F>(&mut self, mut op: F, operands: L) -> &mut Self
    where
        T: Clone,
        L: Operands,
        F: FnMut(T, L::Elems) -> T,
    {
        debug_assert!(
            operands.mismatch(self.shape()).is_none(),
            "assign_element_wise: operand shape {:?} differs from {:?}",
            operands.mismatch(self.shape()),
            self.shape()
        );
        let (rows, cols) = self.shape();
        for i in 0..rows {
            for j in 0..cols {
                let value = op(self.at(i, j), operands.elems(i, j));
                self.set(i, j, value);
            }
        }
        self
    }

    /// Apply `f` to every cell
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let m = Matrix::from_vec(1, 3, vec![1, -2, 3]);
    /// assert_eq!(m.map(|x| x < 0).to_vec(), vec![false, true, false]);
    /// ```
    pub fn map<R, F>(&self, mut f: F) -> Matrix<R>
    where
        T: Clone,
        F: FnMut(T) -> R,
    {
        element_wise(|(x,)| f(x), (self,))
    }

    /// Combine with another matrix of the same shape cell by cell
    pub fn zip_with<U, R, F>(&self, other: &Matrix<U>, mut f: F) -> Matrix<R>
    where
        T: Clone,
        U: Clone,
        F: FnMut(T, U) -> R,
    {
        element_wise(|(x, y)| f(x, y), (self, other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m1() -> Matrix<i32> {
        Matrix::from_vec(3, 4, (1..=12).collect())
    }

    #[test]
    fn test_scalar_broadcast() {
        let plus = element_wise(|(a, b)| a + b, (&m1(), 5));
        assert_eq!(plus.to_vec(), (6..=17).collect::<Vec<_>>());

        let minus = element_wise(|(a, b)| a - b, (&m1(), 5));
        assert_eq!(minus.to_vec(), (-4..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_shape_from_first_matrix_operand() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let r = element_wise(|(s, a)| s * a, (2, &m));
        assert_eq!(r.shape(), (2, 3));
        assert_eq!(r.to_vec(), vec![2, 4, 6, 8, 10, 12]);
    }

    #[test]
    fn test_cross_type_result() {
        let m = m1();
        let parity: Matrix<bool> = m.map(|x| x % 2 == 0);
        assert_eq!(parity.at(0, 1), true);
        let halves: Matrix<f64> = m.map(|x| x as f64 / 2.0);
        assert_eq!(halves.at(2, 3), 6.0);
    }

    #[test]
    fn test_operates_on_logical_view() {
        let m = m1();
        let t = m.share_transpose();
        let tt = t.share_transpose();
        let r = element_wise(|(a, b)| a - b, (&tt, &m));
        assert!(r.to_vec().iter().all(|&x| x == 0));
        assert_eq!(element_wise(|(a,)| a, (&t,)).shape(), (4, 3));
    }

    #[test]
    fn test_six_operands() {
        let m = Matrix::filled(1, 1, 1u32);
        let r = element_wise(
            |(a, b, c, d, e, f)| a + b + c + d + e + f,
            (&m, 2u32, &m, 3u32, &m, 4u32),
        );
        assert_eq!(r.at(0, 0), 12);
    }

    #[test]
    fn test_all_scalars_yield_empty() {
        let r: Matrix<i32> = element_wise(|(a, b)| a + b, (1, 2));
        assert!(r.is_empty());
        assert_eq!(r.reference_count(), 0);
        assert_eq!(
            try_element_wise(|(a, b)| a + b, (1, 2)).unwrap_err(),
            MatrixError::NoMatrixOperand
        );
    }

    #[test]
    fn test_try_element_wise_reports_mismatch() {
        let a = Matrix::<i32>::zeros(2, 2);
        let b = Matrix::<i32>::zeros(3, 2);
        assert_eq!(
            try_element_wise(|(x, s, y)| x + s + y, (&a, 1, &b)).unwrap_err(),
            MatrixError::shape_mismatch("element_wise", (2, 2), (3, 2))
        );
        assert!(try_element_wise(|(x, y)| x + y, (&a, &a)).is_ok());
    }

    #[test]
    fn test_assign_with_aliased_operand() {
        let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        let snapshot = m.share();
        m.assign_element_wise(|x, (y,)| x + y, (&snapshot,));
        assert_eq!(m.to_vec(), vec![2, 4, 6, 8]);
        assert_eq!(snapshot.to_vec(), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_assign_reads_cells_already_written() {
        let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        let t = m.share_transpose();
        m.assign_element_wise(|x, (y,)| x + y, (&t,));
        assert_eq!(m.to_vec(), vec![2, 5, 8, 8]);
    }

    #[test]
    fn test_assign_repeated_cell_applied_per_occurrence() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        let mut dup = m.share_submatrix_select(&[0, 0], &[0]);
        assert_eq!(dup.shape(), (2, 1));
        dup.assign_element_wise(|x, (s,)| x + s, (1i32,));
        assert_eq!(m.at(0, 0), 3);
        assert_eq!(m.to_vec(), vec![3, 2, 3, 4]);
    }

    #[test]
    fn test_assign_through_view_updates_parent() {
        let parent = m1();
        let mut block = parent.share_submatrix(0, 0, 2, 2);
        block.assign_element_wise(|x, (s,)| x * s, (100,));
        assert_eq!(parent.row(0).to_vec(), vec![100, 200, 3, 4]);
        assert_eq!(parent.row(2).to_vec(), vec![9, 10, 11, 12]);
    }

    #[test]
    fn test_zip_with() {
        let a = Matrix::from_vec(1, 2, vec![1.5f64, 2.0]);
        let b = Matrix::from_vec(1, 2, vec![2i32, 3]);
        let r = a.zip_with(&b, |x, n| x.powi(n));
        assert_eq!(r.to_vec(), vec![2.25, 8.0]);
    }
}
