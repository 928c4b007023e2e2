//! Fenwick tree (Binary Indexed Tree) for prefix sums.
//!
//! Standalone companion to the BWT index: point updates and prefix/range
//! sums in O(log n). Indices are 1-based, `index ∈ [1, n]`.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, Sub};

use crate::error::{BwtError, Result};

/// `T` must be `Copy + Default + Add + Sub`; `T::default()` is the zero.
#[derive(Debug, Clone)]
pub struct FenwickTree<T> {
    /// tree[0] is unused
    tree: Vec<T>,
}

impl<T: Copy + Default + Add<Output = T> + Sub<Output = T>> FenwickTree<T> {
    /// Tree of `n` zeros.
    pub fn new(n: usize) -> Self {
        Self {
            tree: vec![T::default(); n + 1],
        }
    }

    /// Build from `values` in O(n); `values[0]` lands at index 1.
    pub fn from_values(values: &[T]) -> Self {
        let n = values.len();
        let mut tree = Vec::with_capacity(n + 1);
        tree.push(T::default());
        tree.extend_from_slice(values);

        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                tree[parent] = tree[parent] + tree[i];
            }
        }

        Self { tree }
    }

    /// Add `delta` at `index`.
    pub fn update(&mut self, index: usize, delta: T) -> Result<()> {
        self.check(index)?;
        let n = self.len();
        let mut idx = index;
        while idx <= n {
            self.tree[idx] = self.tree[idx] + delta;
            idx += lowbit(idx);
        }
        Ok(())
    }

    /// Sum of `[1, index]`.
    pub fn prefix_sum(&self, index: usize) -> Result<T> {
        self.check(index)?;
        Ok(self.prefix(index))
    }

    /// Sum of `[left, right]`, both inclusive.
    pub fn range_sum(&self, left: usize, right: usize) -> Result<T> {
        self.check(left)?;
        self.check(right)?;
        if left > right {
            return Err(BwtError::InvalidRange { left, right });
        }
        Ok(self.prefix(right) - self.prefix(left - 1))
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn check(&self, index: usize) -> Result<()> {
        if index == 0 || index > self.len() {
            return Err(BwtError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Unchecked prefix; index 0 is the empty sum.
    fn prefix(&self, mut idx: usize) -> T {
        let mut sum = T::default();
        while idx > 0 {
            sum = sum + self.tree[idx];
            idx -= lowbit(idx);
        }
        sum
    }
}

/// Lowest set bit of `i` (i.e., `i & -i`).
#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}
