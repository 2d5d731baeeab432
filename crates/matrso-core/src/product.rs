//! Generalized matrix product
//!
//! `result(i, k) = fold_j add(acc, mul(lhs(i, j), rhs(j, k)))`, starting from a
//! per-cell zero. With `+` and `*` this is the usual product; with `||` and
//! `&&` over `bool` it is boolean matrix multiplication (path composition in
//! adjacency matrices); with `min` and `+` it is the tropical product.
//!
//! # Examples
//!
//! ```
//! use matrso_core::functional::{max, plus};
//! use matrso_core::{mat_mul_from, Matrix};
//!
//! // Longest two-step path in a weighted graph
//! let w = Matrix::from_vec(2, 2, vec![0, 3, 1, 0]);
//! let best = mat_mul_from(i32::MIN, max, plus, &w, &w);
//! assert_eq!(best.to_vec(), vec![4, 3, 1, 4]);
//! ```

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

fn fold_product<T, U, R, Z, A, M>(
    mut zero: Z,
    mut add: A,
    mut mul: M,
    lhs: &Matrix<T>,
    rhs: &Matrix<U>,
) -> Matrix<R>
where
    T: Clone,
    U: Clone,
    Z: FnMut() -> R,
    A: FnMut(R, R) -> R,
    M: FnMut(T, U) -> R,
{
    debug_assert_eq!(
        lhs.cols(),
        rhs.rows(),
        "mat_mul: inner dimensions differ"
    );
    let inner = lhs.cols();
    let mut data = Vec::with_capacity(lhs.rows() * rhs.cols());
    for i in 0..lhs.rows() {
        let lhs_row = lhs.row(i);
        for k in 0..rhs.cols() {
            let rhs_col = rhs.col(k);
            let mut acc = zero();
            for j in 0..inner {
                acc = add(acc, mul(lhs_row[j].clone(), rhs_col[j].clone()));
            }
            data.push(acc);
        }
    }
    Matrix::from_shape_vec(lhs.rows(), rhs.cols(), data)
}

/// Product of `lhs` (`m x n`) and `rhs` (`n x p`) under `add` and `mul`
///
/// Each cell starts from `R::default()`, which must be the identity of
/// `add`. Use [`mat_mul_from`] when it is not.
///
/// ```
/// use matrso_core::functional::{logical_and, logical_or};
/// use matrso_core::{mat_mul, Matrix};
///
/// let edges = Matrix::from_vec(3, 3, vec![
///     false, true, false,
///     false, false, true,
///     false, false, false,
/// ]);
/// let two_steps = mat_mul(logical_or, logical_and, &edges, &edges);
/// assert!(two_steps.at(0, 2));
/// assert_eq!(two_steps.to_vec().iter().filter(|&&b| b).count(), 1);
/// ```
pub fn mat_mul<T, U, R, A, M>(add: A, mul: M, lhs: &Matrix<T>, rhs: &Matrix<U>) -> Matrix<R>
where
    T: Clone,
    U: Clone,
    R: Default,
    A: FnMut(R, R) -> R,
    M: FnMut(T, U) -> R,
{
    fold_product(R::default, add, mul, lhs, rhs)
}

/// [`mat_mul`] with an explicit starting value for every cell
pub fn mat_mul_from<T, U, R, A, M>(
    zero: R,
    add: A,
    mul: M,
    lhs: &Matrix<T>,
    rhs: &Matrix<U>,
) -> Matrix<R>
where
    T: Clone,
    U: Clone,
    R: Clone,
    A: FnMut(R, R) -> R,
    M: FnMut(T, U) -> R,
{
    fold_product(|| zero.clone(), add, mul, lhs, rhs)
}

/// [`mat_mul`] with the inner dimensions checked
pub fn try_mat_mul<T, U, R, A, M>(
    add: A,
    mul: M,
    lhs: &Matrix<T>,
    rhs: &Matrix<U>,
) -> MatrixResult<Matrix<R>>
where
    T: Clone,
    U: Clone,
    R: Default,
    A: FnMut(R, R) -> R,
    M: FnMut(T, U) -> R,
{
    if lhs.cols() != rhs.rows() {
        log::debug!(
            "try_mat_mul: {:?} x {:?} rejected",
            lhs.shape(),
            rhs.shape()
        );
        return Err(MatrixError::InnerDimensionMismatch {
            lhs_cols: lhs.cols(),
            rhs_rows: rhs.rows(),
        });
    }
    Ok(mat_mul(add, mul, lhs, rhs))
}

/// Element types with a natural addition and multiplication
///
/// Numbers use `+` and `*` starting from zero; `bool` uses `||` and `&&`
/// starting from `false`.
pub trait Semiring: Clone {
    fn additive_identity() -> Self;
    fn plus(lhs: Self, rhs: Self) -> Self;
    fn times(lhs: Self, rhs: Self) -> Self;
}

macro_rules! arithmetic_semiring {
    ($($t:ty),* $(,)?) => {
        $(
            impl Semiring for $t {
                #[inline]
                fn additive_identity() -> Self {
                    0 as $t
                }

                #[inline]
                fn plus(lhs: Self, rhs: Self) -> Self {
                    lhs + rhs
                }

                #[inline]
                fn times(lhs: Self, rhs: Self) -> Self {
                    lhs * rhs
                }
            }
        )*
    };
}

arithmetic_semiring!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Semiring for bool {
    fn additive_identity() -> Self {
        false
    }

    fn plus(lhs: Self, rhs: Self) -> Self {
        lhs || rhs
    }

    fn times(lhs: Self, rhs: Self) -> Self {
        lhs && rhs
    }
}

impl<T: Semiring> Matrix<T> {
    /// Product under the element type's [`Semiring`]
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
    /// let b = a.share_transpose();
    /// assert_eq!(a.product(&b).to_vec(), vec![14, 32, 32, 77]);
    /// ```
    pub fn product(&self, rhs: &Matrix<T>) -> Matrix<T> {
        fold_product(T::additive_identity, T::plus, T::times, self, rhs)
    }

    /// [`product`](Self::product) with the inner dimensions checked
    pub fn try_product(&self, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::InnerDimensionMismatch {
                lhs_cols: self.cols(),
                rhs_rows: rhs.rows(),
            });
        }
        Ok(self.product(rhs))
    }
}
