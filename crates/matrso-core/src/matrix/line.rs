//! Row and column accessors
//!
//! [`Line`] and [`LineMut`] borrow one logical row or column of a matrix.
//! They hold the buffer borrow for as long as they live, so keep them short.

use super::types::Matrix;
use crate::index_map::IndexMap;
use std::cell::{Ref, RefMut};
use std::ops::{Index, IndexMut};

/// Read-only view of one logical row or column
///
/// Element `k` lives at physical offset `base + map[k] * stride`.
///
/// # Examples
///
/// ```
/// use matrso_core::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
/// let row = m.row(1);
/// assert_eq!(row[2], 6);
/// assert_eq!(m.col(1).to_vec(), vec![2, 5]);
/// ```
pub struct Line<'a, T> {
    cells: Ref<'a, [T]>,
    base: usize,
    stride: usize,
    map: &'a IndexMap,
}

/// Mutable view of one logical row or column
pub struct LineMut<'a, T> {
    cells: RefMut<'a, [T]>,
    base: usize,
    stride: usize,
    map: &'a IndexMap,
}

impl<'a, T> Line<'a, T> {
    /// Number of elements along the line
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn get(&self, k: usize) -> &T {
        &self.cells[self.base + self.map.get(k) * self.stride]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len()).map(move |k| self.get(k))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T> LineMut<'a, T> {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    fn physical(&self, k: usize) -> usize {
        self.base + self.map.get(k) * self.stride
    }

    #[inline]
    pub fn get(&self, k: usize) -> &T {
        &self.cells[self.physical(k)]
    }

    #[inline]
    pub fn get_mut(&mut self, k: usize) -> &mut T {
        let p = self.physical(k);
        &mut self.cells[p]
    }

    pub fn set(&mut self, k: usize, value: T) {
        *self.get_mut(k) = value;
    }

    /// Set every element of the line to `value`
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for k in 0..self.len() {
            self.set(k, value.clone());
        }
    }
}

impl<T> Index<usize> for Line<'_, T> {
    type Output = T;

    fn index(&self, k: usize) -> &T {
        self.get(k)
    }
}

impl<T> Index<usize> for LineMut<'_, T> {
    type Output = T;

    fn index(&self, k: usize) -> &T {
        self.get(k)
    }
}

impl<T> IndexMut<usize> for LineMut<'_, T> {
    fn index_mut(&mut self, k: usize) -> &mut T {
        self.get_mut(k)
    }
}

impl<T> Matrix<T> {
    /// Borrow logical row `i`
    pub fn row(&self, i: usize) -> Line<'_, T> {
        Line {
            cells: self.storage().borrow(),
            base: self.row_map().get(i) * self.row_stride(),
            stride: self.col_stride(),
            map: self.col_map(),
        }
    }

    /// Borrow logical column `j`
    pub fn col(&self, j: usize) -> Line<'_, T> {
        Line {
            cells: self.storage().borrow(),
            base: self.col_map().get(j) * self.col_stride(),
            stride: self.row_stride(),
            map: self.row_map(),
        }
    }

    /// Mutably borrow logical row `i`
    ///
    /// # Panics
    ///
    /// Panics if any alias currently borrows the buffer.
    pub fn row_mut(&mut self, i: usize) -> LineMut<'_, T> {
        let this: &Self = self;
        LineMut {
            cells: this.storage().borrow_mut(),
            base: this.row_map().get(i) * this.row_stride(),
            stride: this.col_stride(),
            map: this.col_map(),
        }
    }

    /// Mutably borrow logical column `j`
    pub fn col_mut(&mut self, j: usize) -> LineMut<'_, T> {
        let this: &Self = self;
        LineMut {
            cells: this.storage().borrow_mut(),
            base: this.col_map().get(j) * this.col_stride(),
            stride: this.row_stride(),
            map: this.row_map(),
        }
    }

    /// Iterate over the logical rows
    pub fn iter_rows(&self) -> impl Iterator<Item = Line<'_, T>> + '_ {
        (0..self.rows()).map(move |i| self.row(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_col_follow_maps() {
        let mut m = Matrix::from_vec(3, 3, (1..=9).collect());
        m.swap_rows(0, 2).swap_cols(0, 1);
        assert_eq!(m.row(0).to_vec(), vec![8, 7, 9]);
        assert_eq!(m.col(0).to_vec(), vec![8, 5, 2]);
    }

    #[test]
    fn test_row_mut_writes_through() {
        let mut m = Matrix::<i32>::new(2, 3);
        {
            let mut row = m.row_mut(1);
            row[0] = 4;
            row.set(2, 6);
        }
        m.col_mut(1).fill(9);
        assert_eq!(m.to_vec(), vec![0, 9, 0, 4, 9, 6]);
    }

    #[test]
    fn test_line_over_transposed_view() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let t = m.share_transpose();
        assert_eq!(t.row(2).to_vec(), vec![3, 6]);
        assert_eq!(t.col(1).len(), 3);
        assert_eq!(t.iter_rows().map(|r| r[0]).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_write_while_alias_reads_panics() {
        let mut m = Matrix::from_vec(1, 2, vec![1, 2]);
        let view = m.share();
        let _row = view.row(0);
        m.set(0, 0, 5);
    }
}
