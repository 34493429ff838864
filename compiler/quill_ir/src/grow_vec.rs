//! Growable sequence with an explicit doubling/halving capacity policy.
//!
//! Every buffer in the front end (text bytes, tokens, identifier names) is a
//! `GrowVec`, so they all share one growth and shrink rule:
//!
//! - grow (multiply by [`GROWTH_FACTOR`]) when `len + 1 >= capacity`
//! - shrink (divide by [`SHRINK_DIVISOR`]) when `len - 1 <= capacity / 2`
//! - capacity never drops below [`MIN_CAPACITY`]
//!
//! The logical capacity is tracked separately from the backing `Vec` so the
//! policy is observable and testable. The backing allocation always holds at
//! least the logical capacity.
//!
//! # Allocation Failure
//!
//! Running out of memory is not recoverable here. The failure is logged and
//! the process aborts through [`std::alloc::handle_alloc_error`], so no caller
//! ever observes a half-built sequence.

use std::alloc::Layout;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Smallest logical capacity. A zero capacity would turn a reallocation into
/// a deallocation.
pub const MIN_CAPACITY: usize = 1;

/// Capacity multiplier applied on growth.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity divisor applied on shrink.
pub const SHRINK_DIVISOR: usize = 2;

/// Returns `true` if appending one element to a sequence of `len` elements
/// requires growing `capacity` first.
#[inline]
pub const fn should_grow(len: usize, capacity: usize) -> bool {
    len + 1 >= capacity
}

/// Returns `true` if removing one element from a sequence of `len` elements
/// should halve `capacity`.
#[inline]
pub const fn should_shrink(len: usize, capacity: usize) -> bool {
    len.saturating_sub(1) <= capacity / SHRINK_DIVISOR
}

/// Insertion-ordered, index-addressable growable sequence.
///
/// Reads go through `Deref<Target = [T]>`, so slice methods (`len`, `get`,
/// `iter`, `last`, indexing) are available directly.
pub struct GrowVec<T> {
    items: Vec<T>,
    /// Logical capacity. Invariant: `MIN_CAPACITY <= capacity` and
    /// `items.len() <= capacity <= items.capacity()`.
    capacity: usize,
}

impl<T> GrowVec<T> {
    /// Create an empty sequence with the minimum capacity.
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Create an empty sequence with room for `capacity` elements.
    ///
    /// A requested capacity of zero is clamped to [`MIN_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let mut seq = GrowVec {
            items: Vec::new(),
            capacity: capacity.max(MIN_CAPACITY),
        };
        seq.reserve_backing();
        seq
    }

    /// Current logical capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.grow_for(self.items.len() + 1);
        self.items.push(value);
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        self.shrink_for_removal();
        self.items.pop()
    }

    /// Insert an element at `index`, shifting later elements right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.items.len(),
            "insertion index {index} out of bounds (len {})",
            self.items.len()
        );
        self.grow_for(self.items.len() + 1);
        self.items.insert(index, value);
    }

    /// Remove and return the element at `index`, shifting later elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.items.len(),
            "removal index {index} out of bounds (len {})",
            self.items.len()
        );
        self.shrink_for_removal();
        self.items.remove(index)
    }

    /// Drop every element and return to the minimum capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.capacity = MIN_CAPACITY;
        self.items.shrink_to(MIN_CAPACITY);
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the sequence, returning the elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Grow the logical capacity until `new_len` elements fit under the
    /// growth threshold.
    fn grow_for(&mut self, new_len: usize) {
        if !should_grow(new_len - 1, self.capacity) {
            return;
        }
        let mut capacity = self.capacity;
        while should_grow(new_len - 1, capacity) {
            capacity = match capacity.checked_mul(GROWTH_FACTOR) {
                Some(next) => next,
                None => allocation_failed::<T>(usize::MAX),
            };
        }
        self.capacity = capacity;
        self.reserve_backing();
    }

    fn shrink_for_removal(&mut self) {
        if should_shrink(self.items.len(), self.capacity) {
            self.capacity = (self.capacity / SHRINK_DIVISOR).max(MIN_CAPACITY);
            self.items.shrink_to(self.capacity);
        }
    }

    /// Make the backing allocation hold at least the logical capacity.
    fn reserve_backing(&mut self) {
        let additional = self.capacity.saturating_sub(self.items.len());
        if self.items.try_reserve_exact(additional).is_err() {
            allocation_failed::<T>(self.capacity);
        }
    }
}

impl<T: Copy> GrowVec<T> {
    /// Append every element of `values`, growing once up front.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        if values.is_empty() {
            return;
        }
        self.grow_for(self.items.len() + values.len());
        self.items.extend_from_slice(values);
    }
}

#[cold]
#[inline(never)]
fn allocation_failed<T>(capacity: usize) -> ! {
    tracing::error!(
        capacity,
        element = std::any::type_name::<T>(),
        "allocation failed while growing sequence"
    );
    match Layout::array::<T>(capacity) {
        Ok(layout) => std::alloc::handle_alloc_error(layout),
        Err(_) => panic!("capacity overflow: {capacity} elements"),
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        GrowVec {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for GrowVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

// Capacity is a storage detail, not part of the value.
impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = GrowVec::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
