//! Submatrix, transpose and permutation operations
//!
//! Three flavors of each reshaping operation are provided:
//!
//! - **In place** (`submatrix`, `submatrix_select`, `transpose`): rewrite this
//!   matrix's own maps. O(1) apart from map copying; the buffer is kept whole
//!   even though part of it becomes unreachable through this matrix.
//! - **Copy** (`copy_submatrix`, `copy_submatrix_select`, `copy_transpose`):
//!   element-by-element copy into fresh storage.
//! - **Share** (`share_submatrix`, `share_submatrix_select`,
//!   `share_transpose`): a new matrix over the same buffer with maps derived
//!   from this matrix's maps. Writes through either are visible to both.
//!
//! The `*_select` variants take retain lists: `row_retain[k]` is the logical
//! row of this matrix that becomes row `k` of the result. Unsorted lists
//! reorder rows and repeated entries duplicate them.

use super::types::Matrix;
use crate::error::{MatrixError, MatrixResult};

impl<T> Matrix<T> {
    /// Restrict this matrix to `rows x cols` cells starting at `(i, j)`
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let mut m = Matrix::from_vec(3, 3, (1..=9).collect());
    /// m.submatrix(1, 1, 2, 2);
    /// assert_eq!(m.to_vec(), vec![5, 6, 8, 9]);
    /// assert_eq!(m.size(), 9);
    /// ```
    pub fn submatrix(&mut self, i: usize, j: usize, rows: usize, cols: usize) -> &mut Self {
        let row_map = self.row_map().window(i, rows);
        let col_map = self.col_map().window(j, cols);
        self.set_layout(rows, cols, row_map, col_map);
        self
    }

    /// Restrict and reorder this matrix through retain lists
    pub fn submatrix_select(&mut self, row_retain: &[usize], col_retain: &[usize]) -> &mut Self {
        let row_map = self.row_map().select(row_retain);
        let col_map = self.col_map().select(col_retain);
        self.set_layout(row_retain.len(), col_retain.len(), row_map, col_map);
        self
    }

    /// Swap rows and columns in place, O(1)
    pub fn transpose(&mut self) -> &mut Self {
        self.swap_axes();
        self
    }

    /// Independent copy of the `rows x cols` block at `(i, j)`
    pub fn copy_submatrix(&self, i: usize, j: usize, rows: usize, cols: usize) -> Self
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for k in 0..rows {
            let row = self.row(i + k);
            data.extend((0..cols).map(|l| row[j + l].clone()));
        }
        Self::from_shape_vec(rows, cols, data)
    }

    /// Independent copy of the cells picked by the retain lists
    pub fn copy_submatrix_select(&self, row_retain: &[usize], col_retain: &[usize]) -> Self
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(row_retain.len() * col_retain.len());
        for &r in row_retain {
            let row = self.row(r);
            data.extend(col_retain.iter().map(|&c| row[c].clone()));
        }
        Self::from_shape_vec(row_retain.len(), col_retain.len(), data)
    }

    /// Independent, row-major copy of the transpose
    pub fn copy_transpose(&self) -> Self
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.rows() * self.cols());
        for j in 0..self.cols() {
            data.extend(self.col(j).iter().cloned());
        }
        Self::from_shape_vec(self.cols(), self.rows(), data)
    }

    /// View of the `rows x cols` block at `(i, j)` over the same buffer
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let m = Matrix::from_vec(3, 4, (1..=12).collect());
    /// let mut block = m.share_submatrix(1, 2, 2, 2);
    /// assert_eq!(block.to_vec(), vec![7, 8, 11, 12]);
    ///
    /// block.set(0, 0, 70);
    /// assert_eq!(m.at(1, 2), 70);
    /// assert_eq!(m.reference_count(), 2);
    /// ```
    pub fn share_submatrix(&self, i: usize, j: usize, rows: usize, cols: usize) -> Self {
        self.alias(
            rows,
            cols,
            self.row_stride(),
            self.col_stride(),
            self.row_map().window(i, rows),
            self.col_map().window(j, cols),
        )
    }

    /// [`share_submatrix`](Self::share_submatrix) with the region validated
    /// against the logical shape
    pub fn try_share_submatrix(
        &self,
        i: usize,
        j: usize,
        rows: usize,
        cols: usize,
    ) -> MatrixResult<Self> {
        MatrixError::check_range("row", i, rows, self.rows())
            .and_then(|_| MatrixError::check_range("column", j, cols, self.cols()))
            .inspect_err(|e| log::debug!("try_share_submatrix rejected: {e}"))?;
        Ok(self.share_submatrix(i, j, rows, cols))
    }

    /// View through retain lists over the same buffer
    pub fn share_submatrix_select(&self, row_retain: &[usize], col_retain: &[usize]) -> Self {
        self.alias(
            row_retain.len(),
            col_retain.len(),
            self.row_stride(),
            self.col_stride(),
            self.row_map().select(row_retain),
            self.col_map().select(col_retain),
        )
    }

    /// Transposed view over the same buffer
    pub fn share_transpose(&self) -> Self {
        self.alias(
            self.cols(),
            self.rows(),
            self.col_stride(),
            self.row_stride(),
            self.col_map().clone(),
            self.row_map().clone(),
        )
    }

    /// Exchange two logical rows of this matrix only
    pub fn swap_rows(&mut self, i1: usize, i2: usize) -> &mut Self {
        self.row_map_mut().swap(i1, i2);
        self
    }

    /// Exchange two logical columns of this matrix only
    pub fn swap_cols(&mut self, j1: usize, j2: usize) -> &mut Self {
        self.col_map_mut().swap(j1, j2);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m1() -> Matrix<i32> {
        Matrix::from_vec(3, 4, (1..=12).collect())
    }

    #[test]
    fn test_submatrix_in_place_uses_column_map() {
        let mut m = m1();
        m.submatrix(1, 2, 2, 2);
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.to_vec(), vec![7, 8, 11, 12]);
        assert_eq!(m.reference_count(), 1);
        assert_eq!(m.size(), 12);
    }

    #[test]
    fn test_submatrix_select_reorders() {
        let mut m = m1();
        m.submatrix_select(&[2, 0], &[3, 3, 1]);
        assert_eq!(m.to_vec(), vec![12, 12, 10, 4, 4, 2]);
    }

    #[test]
    fn test_transpose_in_place() {
        let mut m = m1();
        m.transpose();
        assert_eq!(m.shape(), (4, 3));
        assert_eq!(m.row(0).to_vec(), vec![1, 5, 9]);
        m.transpose();
        assert_eq!(m, m1());
    }

    #[test]
    fn test_copy_variants_are_independent() {
        let mut m = m1();
        let block = m.copy_submatrix(0, 1, 2, 2);
        let picked = m.copy_submatrix_select(&[1], &[0, 3]);
        let t = m.copy_transpose();
        m.set(0, 1, -1);

        assert_eq!(block.to_vec(), vec![2, 3, 6, 7]);
        assert_eq!(picked.to_vec(), vec![5, 8]);
        assert_eq!(t.shape(), (4, 3));
        assert_eq!(t.at(1, 0), 2);
        assert_eq!(t.row_stride(), 3);
        assert!(!t.shares_buffer_with(&m));
    }

    #[test]
    fn test_share_transpose_aliases() {
        let mut m = m1();
        let t = m.share_transpose();
        m.set(2, 3, 0);
        assert_eq!(t.at(3, 2), 0);
        assert_eq!(t.reference_count(), 2);
    }

    #[test]
    fn test_nested_views_share_one_buffer() {
        let m = m1();
        let outer = m.share_submatrix(1, 1, 2, 3);
        let mut inner = outer.share_submatrix_select(&[1], &[2, 0]);
        assert_eq!(inner.to_vec(), vec![12, 10]);
        inner.set(0, 1, 100);
        assert_eq!(m.at(2, 1), 100);
        assert_eq!(outer.at(1, 0), 100);
        assert_eq!(m.reference_count(), 3);
    }

    #[test]
    fn test_swap_rows_is_local_to_view() {
        let m = m1();
        let mut view = m.share();
        view.swap_rows(0, 1);
        assert_eq!(view.row(0).to_vec(), vec![5, 6, 7, 8]);
        assert_eq!(m.row(0).to_vec(), vec![1, 2, 3, 4]);
        view.swap_cols(0, 3);
        assert_eq!(view.at(0, 0), 8);
        assert_eq!(m.at(0, 0), 1);
    }

    #[test]
    fn test_try_share_submatrix_checks_region() {
        let m = m1();
        assert!(m.try_share_submatrix(1, 1, 2, 3).is_ok());
        assert!(matches!(
            m.try_share_submatrix(2, 0, 2, 1),
            Err(MatrixError::IndexOutOfBounds { axis: "row", .. })
        ));
        assert!(matches!(
            m.try_share_submatrix(0, 3, 1, 2),
            Err(MatrixError::IndexOutOfBounds { axis: "column", .. })
        ));
        assert_eq!(m.reference_count(), 1);
    }
}
