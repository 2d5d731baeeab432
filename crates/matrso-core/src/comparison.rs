//! Element-wise comparisons, min/max and predicate reductions
//!
//! Comparisons take either another matrix of the same shape or a scalar and
//! return a `Matrix<bool>` mask. Shape agreement is the caller's
//! responsibility, as for the arithmetic operators.

use crate::elementwise::{element_wise, Operand};
use crate::functional;
use crate::matrix::Matrix;

impl<T: Clone> Matrix<T> {
    /// Element-wise greater than comparison
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_vec(2, 2, vec![2.0, 2.0, 2.0, 5.0]);
    ///
    /// assert_eq!(a.gt(&b).to_vec(), vec![false, false, true, false]);
    /// assert_eq!(a.gt(2.5).to_vec(), vec![false, false, true, true]);
    /// ```
    pub fn gt<O>(&self, other: O) -> Matrix<bool>
    where
        T: PartialOrd,
        O: Operand<Elem = T>,
    {
        element_wise(|(a, b)| a > b, (self, other))
    }

    /// Element-wise less than comparison
    pub fn lt<O>(&self, other: O) -> Matrix<bool>
    where
        T: PartialOrd,
        O: Operand<Elem = T>,
    {
        element_wise(|(a, b)| a < b, (self, other))
    }

    /// Element-wise greater than or equal comparison
    pub fn gte<O>(&self, other: O) -> Matrix<bool>
    where
        T: PartialOrd,
        O: Operand<Elem = T>,
    {
        element_wise(|(a, b)| a >= b, (self, other))
    }

    /// Element-wise less than or equal comparison
    pub fn lte<O>(&self, other: O) -> Matrix<bool>
    where
        T: PartialOrd,
        O: Operand<Elem = T>,
    {
        element_wise(|(a, b)| a <= b, (self, other))
    }

    /// Element-wise equality
    ///
    /// `==` on matrices compares whole matrices; this returns the per-cell mask.
    pub fn eq_elementwise<O>(&self, other: O) -> Matrix<bool>
    where
        T: PartialEq,
        O: Operand<Elem = T>,
    {
        element_wise(|(a, b)| a == b, (self, other))
    }

    pub fn ne_elementwise<O>(&self, other: O) -> Matrix<bool>
    where
        T: PartialEq,
        O: Operand<Elem = T>,
    {
        element_wise(|(a, b)| a != b, (self, other))
    }

    /// Cell-wise minimum, keeping this matrix's value on ties
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let m = Matrix::from_vec(1, 4, vec![-3, 0, 5, 9]);
    /// assert_eq!(m.minimum(4).to_vec(), vec![-3, 0, 4, 4]);
    /// assert_eq!(m.maximum(0).to_vec(), vec![0, 0, 5, 9]);
    /// ```
    pub fn minimum<O>(&self, other: O) -> Matrix<T>
    where
        T: PartialOrd,
        O: Operand<Elem = T>,
    {
        element_wise(|(a, b)| functional::min(a, b), (self, other))
    }

    /// Cell-wise maximum, keeping this matrix's value on ties
    pub fn maximum<O>(&self, other: O) -> Matrix<T>
    where
        T: PartialOrd,
        O: Operand<Elem = T>,
    {
        element_wise(|(a, b)| functional::max(a, b), (self, other))
    }

    /// Count cells satisfying `predicate`
    pub fn count_if<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter_rows()
            .map(|row| row.iter().filter(|&x| predicate(x)).count())
            .sum()
    }

    /// Whether every cell satisfies `predicate`; `true` when empty
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter_rows().all(|row| row.iter().all(&mut predicate))
    }

    /// Whether any cell satisfies `predicate`
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter_rows().any(|row| row.iter().any(&mut predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elementwise::Scalar;

    #[test]
    fn test_matrix_comparisons() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        let b = Matrix::from_vec(2, 2, vec![2, 2, 2, 5]);
        assert_eq!(a.lt(&b).to_vec(), vec![true, false, false, true]);
        assert_eq!(a.gte(&b).to_vec(), vec![false, true, true, false]);
        assert_eq!(a.lte(&b).to_vec(), vec![true, true, false, true]);
        assert_eq!(a.eq_elementwise(&b).to_vec(), vec![false, true, false, false]);
        assert_eq!(a.ne_elementwise(&b).to_vec(), vec![true, false, true, true]);
    }

    #[test]
    fn test_scalar_comparisons() {
        let m = Matrix::from_vec(3, 4, (1..=12).collect::<Vec<i32>>());
        assert_eq!(m.gt(6).count_if(|&b| b), 6);
        assert_eq!(m.eq_elementwise(7).to_vec().iter().position(|&b| b), Some(6));

        let words = Matrix::from_vec(1, 2, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(words.lt(Scalar("b".to_string())).to_vec(), vec![false, true]);
    }

    #[test]
    fn test_min_max_between_views() {
        let m = Matrix::from_vec(2, 2, vec![1, 9, 4, 3]);
        let t = m.share_transpose();
        assert_eq!(m.minimum(&t).to_vec(), vec![1, 4, 4, 3]);
        assert_eq!(m.maximum(&t).to_vec(), vec![1, 9, 9, 3]);
    }

    #[test]
    fn test_predicate_reductions() {
        let m = Matrix::from_vec(2, 3, vec![2, 4, 6, 8, 10, 11]);
        assert!(m.any(|&x| x % 2 == 1));
        assert!(!m.all(|&x| x % 2 == 0));
        assert!(m.copy_submatrix(0, 0, 2, 2).all(|&x| x % 2 == 0));
        assert_eq!(m.count_if(|&x| x > 5), 4);
        assert!(Matrix::<i32>::default().all(|_| false));
    }
}
