//! Logical-to-physical index translation for one matrix axis
//!
//! Every [`Matrix`](crate::Matrix) owns one [`IndexMap`] per axis. Entry `k`
//! is the physical coordinate (before stride multiplication) of logical
//! position `k`. Maps are never shared between matrices, even when the
//! matrices alias the same buffer, so reordering one view never disturbs
//! another.

use std::ops::Index;

/// An owned translation table from logical to physical positions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexMap {
    map: Vec<usize>,
}

impl IndexMap {
    /// Identity map of length `len`: `map[k] == k`
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::IndexMap;
    ///
    /// let map = IndexMap::identity(3);
    /// assert_eq!(map.as_slice(), &[0, 1, 2]);
    /// ```
    pub fn identity(len: usize) -> Self {
        Self {
            map: (0..len).collect(),
        }
    }

    /// Contiguous window `self[offset..offset + len]`
    ///
    /// # Panics
    ///
    /// Panics if the window extends past the end of this map.
    pub fn window(&self, offset: usize, len: usize) -> Self {
        Self {
            map: self.map[offset..offset + len].to_vec(),
        }
    }

    /// Re-index through `retain`: `result[k] == self[retain[k]]`
    ///
    /// Selection may subset, reorder and duplicate positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrso_core::IndexMap;
    ///
    /// let map = IndexMap::identity(4).window(1, 3);
    /// let picked = map.select(&[2, 0, 0]);
    /// assert_eq!(picked.as_slice(), &[3, 1, 1]);
    /// ```
    pub fn select(&self, retain: &[usize]) -> Self {
        Self {
            map: retain.iter().map(|&k| self.map[k]).collect(),
        }
    }

    /// Swap two logical positions
    pub fn swap(&mut self, a: usize, b: usize) {
        self.map.swap(a, b);
    }

    /// Physical coordinate of logical position `k`
    #[inline]
    pub fn get(&self, k: usize) -> usize {
        self.map[k]
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    /// Whether `map[k] == k` for every position
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(k, &p)| k == p)
    }
}

impl Index<usize> for IndexMap {
    type Output = usize;

    #[inline]
    fn index(&self, k: usize) -> &usize {
        &self.map[k]
    }
}

impl From<Vec<usize>> for IndexMap {
    fn from(map: Vec<usize>) -> Self {
        Self { map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let map = IndexMap::identity(5);
        assert_eq!(map.len(), 5);
        assert!(map.is_identity());
        assert_eq!(map[3], 3);
        assert!(IndexMap::identity(0).is_empty());
    }

    #[test]
    fn test_window_of_window() {
        let outer = IndexMap::identity(10).window(2, 6);
        assert_eq!(outer.as_slice(), &[2, 3, 4, 5, 6, 7]);
        let inner = outer.window(1, 3);
        assert_eq!(inner.as_slice(), &[3, 4, 5]);
        assert!(!inner.is_identity());
    }

    #[test]
    fn test_select_reorders_and_duplicates() {
        let map = IndexMap::from(vec![7, 8, 9]);
        assert_eq!(map.select(&[2, 1, 0]).as_slice(), &[9, 8, 7]);
        assert_eq!(map.select(&[1, 1]).as_slice(), &[8, 8]);
        assert!(map.select(&[]).is_empty());
    }

    #[test]
    fn test_swap_is_local() {
        let original = IndexMap::identity(3);
        let mut copy = original.clone();
        copy.swap(0, 2);
        assert_eq!(copy.as_slice(), &[2, 1, 0]);
        assert_eq!(original.as_slice(), &[0, 1, 2]);
    }

    #[test]
    #[should_panic]
    fn test_window_out_of_range_panics() {
        IndexMap::identity(3).window(2, 2);
    }
}
