//! Reference-counted physical storage shared by matrix views
//!
//! A [`SharedBuffer`] is a flat allocation of elements. Matrices hold it
//! through an `Rc`, so the strong count is exactly the number of live
//! matrices addressing the buffer, and the storage is released when the last
//! of them is dropped or cleared.
//!
//! Element access goes through a `RefCell`: any alias may write, and a write
//! that overlaps a live borrow from another alias panics instead of racing.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Flat element storage jointly owned by every view derived from it
pub struct SharedBuffer<T> {
    cells: RefCell<Box<[T]>>,
    len: usize,
}

impl<T> SharedBuffer<T> {
    /// Wrap `data` in a fresh buffer with a reference count of one
    pub fn new(data: Vec<T>) -> Rc<Self> {
        let len = data.len();
        Rc::new(Self {
            cells: RefCell::new(data.into_boxed_slice()),
            len,
        })
    }

    /// Number of physical elements, readable while the cells are borrowed
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared borrow of the whole physical storage
    ///
    /// # Panics
    ///
    /// Panics if a mutable borrow is live.
    pub fn borrow(&self) -> Ref<'_, [T]> {
        Ref::map(self.cells.borrow(), |cells| &**cells)
    }

    /// Exclusive borrow of the whole physical storage
    ///
    /// # Panics
    ///
    /// Panics if any other borrow is live.
    pub fn borrow_mut(&self) -> RefMut<'_, [T]> {
        RefMut::map(self.cells.borrow_mut(), |cells| &mut **cells)
    }
}

impl<T> Drop for SharedBuffer<T> {
    fn drop(&mut self) {
        log::trace!("releasing shared buffer of {} elements", self.len);
    }
}

impl<T> fmt::Debug for SharedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBuffer")
            .field("len", &self.len)
            .field("borrowed", &self.cells.try_borrow_mut().is_err())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_writes_visible() {
        let a = SharedBuffer::new(vec![1, 2, 3]);
        let b = Rc::clone(&a);
        assert_eq!(Rc::strong_count(&a), 2);

        b.borrow_mut()[1] = 20;
        assert_eq!(&*a.borrow(), &[1, 20, 3]);

        drop(b);
        assert_eq!(Rc::strong_count(&a), 1);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_len_during_mutable_borrow() {
        let a = SharedBuffer::new(vec![0i32; 6]);
        let mut cells = a.borrow_mut();
        cells[0] = 1;
        assert_eq!(a.len(), 6);
        assert!(!a.is_empty());
        assert!(format!("{:?}", a).contains("borrowed: true"));
        drop(cells);
        assert!(format!("{:?}", a).contains("borrowed: false"));
    }

    #[test]
    #[should_panic]
    fn test_conflicting_borrow_panics() {
        let a = SharedBuffer::new(vec![0u8; 4]);
        let _read = a.borrow();
        let _write = a.borrow_mut();
    }
}
