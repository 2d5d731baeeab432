//! Matrix type definition, construction and element access
//!
//! This module defines the core `Matrix<T>` type: two owned [`IndexMap`]s and
//! two physical strides layered over a reference-counted [`SharedBuffer`].
//! View, creation and formatting operations live in sibling modules.

use crate::buffer::SharedBuffer;
use crate::index_map::IndexMap;
use std::cell::{Ref, RefMut};
use std::fmt;
use std::rc::Rc;

/// Dense matrix over a shared, reference-counted buffer
///
/// The element at logical `(i, j)` lives at physical offset
/// `row_map[i] * row_stride + col_map[j] * col_stride`. Several matrices may
/// address the same buffer (see [`share_submatrix`](Matrix::share_submatrix)
/// and [`share_transpose`](Matrix::share_transpose)); each keeps its own
/// index maps, so reshaping one view never affects another.
///
/// # Copy and share
///
/// [`Clone`] is a deep copy: the result owns a fresh buffer with identity
/// maps. [`share`](Matrix::share) is the aliasing counterpart: same buffer,
/// copied maps, incremented reference count.
///
/// # Bounds
///
/// Logical indices are not validated against [`rows`](Matrix::rows) and
/// [`cols`](Matrix::cols). An index outside the index map panics; an index
/// that happens to land inside the buffer reads whatever cell it reaches.
///
/// # Examples
///
/// ```
/// use matrso_core::Matrix;
///
/// let mut m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
/// let mut view = m.share_transpose();
/// assert_eq!(view.shape(), (3, 2));
///
/// view.set(2, 0, 30);
/// assert_eq!(m.at(0, 2), 30);
/// assert_eq!(m.reference_count(), 2);
///
/// m.clear();
/// assert_eq!(view.reference_count(), 1);
/// ```
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
    size: usize,
    row_map: IndexMap,
    col_map: IndexMap,
    buffer: Option<Rc<SharedBuffer<T>>>,
}

impl<T> Matrix<T> {
    /// Row-major matrix owning `data`, which must hold `rows * cols` elements
    pub(crate) fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        let size = data.len();
        Self {
            rows,
            cols,
            row_stride: cols,
            col_stride: 1,
            size,
            row_map: IndexMap::identity(rows),
            col_map: IndexMap::identity(cols),
            buffer: Some(SharedBuffer::new(data)),
        }
    }

    /// A view over this matrix's buffer with the given logical layout
    pub(crate) fn alias(
        &self,
        rows: usize,
        cols: usize,
        row_stride: usize,
        col_stride: usize,
        row_map: IndexMap,
        col_map: IndexMap,
    ) -> Self {
        debug_assert_eq!(row_map.len(), rows);
        debug_assert_eq!(col_map.len(), cols);
        Self {
            rows,
            cols,
            row_stride,
            col_stride,
            size: self.size,
            row_map,
            col_map,
            buffer: self.buffer.clone(),
        }
    }

    /// Replace the logical shape and maps, keeping buffer and strides
    pub(crate) fn set_layout(
        &mut self,
        rows: usize,
        cols: usize,
        row_map: IndexMap,
        col_map: IndexMap,
    ) {
        debug_assert_eq!(row_map.len(), rows);
        debug_assert_eq!(col_map.len(), cols);
        self.rows = rows;
        self.cols = cols;
        self.row_map = row_map;
        self.col_map = col_map;
    }

    pub(crate) fn swap_axes(&mut self) {
        std::mem::swap(&mut self.rows, &mut self.cols);
        std::mem::swap(&mut self.row_stride, &mut self.col_stride);
        std::mem::swap(&mut self.row_map, &mut self.col_map);
    }

    pub(crate) fn row_map_mut(&mut self) -> &mut IndexMap {
        &mut self.row_map
    }

    pub(crate) fn col_map_mut(&mut self) -> &mut IndexMap {
        &mut self.col_map
    }

    /// Create a `rows x cols` matrix of `T::default()`
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let m = Matrix::<i32>::new(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.at(1, 2), 0);
    /// ```
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default,
    {
        Self::from_shape_vec(rows, cols, (0..rows * cols).map(|_| T::default()).collect())
    }

    /// Create a `rows x cols` matrix with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_shape_vec(rows, cols, vec![value; rows * cols])
    }

    /// Create a matrix from values in row-major order
    ///
    /// Missing trailing values are filled with `T::default()` and surplus
    /// values are dropped; neither is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::Matrix;
    ///
    /// let short = Matrix::from_vec(2, 2, vec![1, 2, 3]);
    /// assert_eq!(short.to_vec(), vec![1, 2, 3, 0]);
    ///
    /// let long = Matrix::from_vec(1, 2, vec![1, 2, 3]);
    /// assert_eq!(long.to_vec(), vec![1, 2]);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, mut values: Vec<T>) -> Self
    where
        T: Default,
    {
        let total = rows * cols;
        if values.len() != total {
            log::debug!(
                "from_vec: {} values for a {}x{} matrix, {}",
                values.len(),
                rows,
                cols,
                if values.len() > total {
                    "truncating"
                } else {
                    "filling with defaults"
                }
            );
            values.resize_with(total, T::default);
        }
        Self::from_shape_vec(rows, cols, values)
    }

    /// Number of logical rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Physical distance between consecutive row coordinates
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Physical distance between consecutive column coordinates
    pub fn col_stride(&self) -> usize {
        self.col_stride
    }

    /// Number of physical elements in the underlying buffer
    ///
    /// Views keep the whole buffer alive, so this can exceed
    /// `rows() * cols()`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the logical shape has no cells
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn row_map(&self) -> &IndexMap {
        &self.row_map
    }

    pub fn col_map(&self) -> &IndexMap {
        &self.col_map
    }

    /// Number of live matrices addressing this matrix's buffer, 0 when cleared
    pub fn reference_count(&self) -> usize {
        self.buffer.as_ref().map_or(0, Rc::strong_count)
    }

    /// Whether both matrices address the same physical buffer
    pub fn shares_buffer_with<U>(&self, other: &Matrix<U>) -> bool {
        match (&self.buffer, &other.buffer) {
            (Some(a), Some(b)) => std::ptr::eq(Rc::as_ptr(a).cast::<()>(), Rc::as_ptr(b).cast()),
            _ => false,
        }
    }

    /// A new handle on the same buffer with copies of this matrix's maps
    ///
    /// The source stays valid and the reference count grows by one. This is
    /// the non-destructive counterpart of moving a matrix.
    pub fn share(&self) -> Self {
        self.alias(
            self.rows,
            self.cols,
            self.row_stride,
            self.col_stride,
            self.row_map.clone(),
            self.col_map.clone(),
        )
    }

    /// Release this matrix's handle and maps, leaving the empty matrix
    ///
    /// The buffer is freed when this was its last handle.
    pub fn clear(&mut self) {
        if self.reference_count() == 1 {
            log::trace!("clear: dropping last handle on {} elements", self.size);
        }
        *self = Self::default();
    }

    pub(crate) fn storage(&self) -> &SharedBuffer<T> {
        match &self.buffer {
            Some(buffer) => buffer,
            None => panic!("element access on an empty matrix"),
        }
    }

    /// Physical offset of logical `(i, j)`
    #[inline]
    pub(crate) fn offset(&self, i: usize, j: usize) -> usize {
        self.row_map.get(i) * self.row_stride + self.col_map.get(j) * self.col_stride
    }

    /// Clone of the element at `(i, j)`
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T
    where
        T: Clone,
    {
        self.storage().borrow()[self.offset(i, j)].clone()
    }

    /// Borrow the element at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if an alias currently holds a mutable borrow of the buffer.
    pub fn get(&self, i: usize, j: usize) -> Ref<'_, T> {
        let offset = self.offset(i, j);
        Ref::map(self.storage().borrow(), |cells| &cells[offset])
    }

    /// Mutably borrow the element at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if any alias currently borrows the buffer.
    pub fn get_mut(&mut self, i: usize, j: usize) -> RefMut<'_, T> {
        let offset = self.offset(i, j);
        RefMut::map(self.storage().borrow_mut(), |cells| &mut cells[offset])
    }

    /// Overwrite the element at `(i, j)`
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        let offset = self.offset(i, j);
        self.storage().borrow_mut()[offset] = value;
    }

    /// Bounds-checked read, `None` outside the logical shape
    pub fn get_checked(&self, i: usize, j: usize) -> Option<T>
    where
        T: Clone,
    {
        (i < self.rows && j < self.cols).then(|| self.at(i, j))
    }

    /// Logical contents in row-major order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.rows * self.cols);
        if self.is_empty() {
            return out;
        }
        let cells = self.storage().borrow();
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.push(cells[self.offset(i, j)].clone());
            }
        }
        out
    }

    /// Overwrite the logical cells in row-major order
    ///
    /// Cells past the end of `values` are set to `T::default()`. Writes go
    /// through this matrix's maps, so aliases observe them.
    pub fn assign_from_slice(&mut self, values: &[T]) -> &mut Self
    where
        T: Clone + Default,
    {
        self.write_row_major(values.iter().cloned().chain(std::iter::repeat_with(T::default)));
        self
    }

    /// Write `values` into the logical cells in row-major order, stopping
    /// early if the iterator runs dry
    pub(crate) fn write_row_major<I>(&mut self, mut values: I)
    where
        I: Iterator<Item = T>,
    {
        if self.is_empty() {
            return;
        }
        let mut cells = self.storage().borrow_mut();
        for i in 0..self.rows {
            for j in 0..self.cols {
                match values.next() {
                    Some(value) => cells[self.offset(i, j)] = value,
                    None => return,
                }
            }
        }
    }
}

impl<T> Default for Matrix<T> {
    /// The empty matrix: no cells, no buffer, reference count 0
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            row_stride: 0,
            col_stride: 1,
            size: 0,
            row_map: IndexMap::default(),
            col_map: IndexMap::default(),
            buffer: None,
        }
    }
}

impl<T: Clone> Clone for Matrix<T> {
    /// Deep copy into a fresh buffer with identity maps
    fn clone(&self) -> Self {
        if self.buffer.is_none() {
            return Self::default();
        }
        Self::from_shape_vec(self.rows, self.cols, self.to_vec())
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    /// Logical equality: same shape and equal cells, regardless of layout
    fn eq(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        let lhs = self.storage().borrow();
        let rhs = other.storage().borrow();
        (0..self.rows).all(|i| {
            (0..self.cols).all(|j| lhs[self.offset(i, j)] == rhs[other.offset(i, j)])
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Matrix");
        s.field("shape", &self.shape())
            .field("reference_count", &self.reference_count());
        if self.is_empty() {
            return s.field("data", &(&[] as &[T])).finish();
        }
        let cells = self.storage().borrow();
        let data: Vec<Vec<&T>> = (0..self.rows)
            .map(|i| (0..self.cols).map(|j| &cells[self.offset(i, j)]).collect())
            .collect();
        s.field("data", &data).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_new_and_filled() {
        let m = Matrix::<f64>::new(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.size(), 6);
        assert_eq!(m.row_stride(), 3);
        assert_eq!(m.col_stride(), 1);
        assert_eq!(m.reference_count(), 1);
        assert!(m.to_vec().iter().all(|&x| x == 0.0));

        let f = Matrix::filled(2, 2, 7u8);
        assert_eq!(f.to_vec(), vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_default_is_empty() {
        let m = Matrix::<i32>::default();
        assert!(m.is_empty());
        assert_eq!(m.size(), 0);
        assert_eq!(m.reference_count(), 0);
        assert_eq!(m.to_vec(), Vec::<i32>::new());
        assert_eq!(m.clone().reference_count(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        let b = a.clone();
        assert!(!a.shares_buffer_with(&b));
        a.set(0, 0, 100);
        assert_eq!(b.at(0, 0), 1);
        assert_eq!(b.reference_count(), 1);
    }

    #[test]
    fn test_share_keeps_source_valid() {
        let mut a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        let b = a.share();
        assert!(a.shares_buffer_with(&b));
        assert_eq!(a.reference_count(), 2);
        a.set(1, 1, 40);
        assert_eq!(b.at(1, 1), 40);
        assert_eq!(b, a);
    }

    #[test]
    fn test_clear_releases_reference() {
        let mut a = Matrix::from_vec(1, 3, vec![1, 2, 3]);
        let b = a.share();
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.reference_count(), 0);
        assert_eq!(b.reference_count(), 1);
        assert_eq!(b.to_vec(), vec![1, 2, 3]);
    }

    struct DropCounter<'a>(&'a Cell<usize>);

    impl Drop for DropCounter<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_buffer_freed_once_after_last_view() {
        let drops = Cell::new(0);
        let a = Matrix::from_shape_vec(
            2,
            2,
            (0..4).map(|_| DropCounter(&drops)).collect::<Vec<_>>(),
        );
        let views: Vec<_> = (0..5).map(|_| a.share()).collect();
        assert_eq!(a.reference_count(), 6);

        drop(a);
        assert_eq!(drops.get(), 0);
        let mut views = views;
        views.truncate(1);
        assert_eq!(drops.get(), 0);
        assert_eq!(views[0].reference_count(), 1);

        drop(views);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_get_checked() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(m.get_checked(1, 0), Some(3));
        assert_eq!(m.get_checked(2, 0), None);
        assert_eq!(m.get_checked(0, 2), None);
    }

    #[test]
    fn test_get_mut_and_ref() {
        let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        *m.get_mut(0, 1) += 10;
        assert_eq!(*m.get(0, 1), 12);
    }

    #[test]
    fn test_assign_from_slice_fills_defaults() {
        let mut m = Matrix::from_vec(2, 2, vec![9, 9, 9, 9]);
        m.assign_from_slice(&[1, 2, 3]);
        assert_eq!(m.to_vec(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_debug_output() {
        let m = Matrix::from_vec(1, 2, vec![1, 2]);
        let text = format!("{:?}", m);
        assert!(text.contains("shape: (1, 2)"));
        assert!(text.contains("[[1, 2]]"));
    }

    #[test]
    fn test_debug_output_empty() {
        let text = format!("{:?}", Matrix::<i32>::default());
        assert!(text.contains("shape: (0, 0)"));
        assert!(text.contains("reference_count: 0"));
        assert!(text.contains("data: []"));
    }
}
