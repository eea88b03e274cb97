//! The growable array backing JSON arrays, the map's node arena, and the
//! encoder's traversal stack.
//!
//! Capacity is managed explicitly: it starts at `INITIAL_CAPACITY` and
//! doubles whenever a push finds the array full. Growth is fallible, so an
//! allocation failure is reported to the caller (together with the element
//! that could not be stored) instead of aborting the process. Capacity never
//! shrinks when elements are removed.

use crate::error::{AllocError, InsertError, InsertErrorKind};
use std::fmt;
use std::ops::Index;
use std::slice;

/// Capacity of the first allocation.
pub const INITIAL_CAPACITY: usize = 8;
/// Multiplier applied to the capacity each time the array fills up.
const GROWTH_FACTOR: usize = 2;

/// A contiguous, doubling-capacity sequence.
///
/// Elements `[0, len)` are live and contiguous. Dropping the array drops
/// every live element.
pub struct Array<T> {
    buf: Vec<T>,
    /// Logical capacity. `buf.capacity()` is always at least this large.
    capacity: usize,
}

impl<T> Array<T> {
    /// Creates an empty array without allocating.
    pub const fn new() -> Self {
        Array {
            buf: Vec::new(),
            capacity: 0,
        }
    }

    /// Creates an empty array with room for at least `capacity` elements.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut array = Array::new();
        if capacity > 0 {
            array.buf.try_reserve_exact(capacity)?;
            array.capacity = capacity;
        }
        Ok(array)
    }

    /// The number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The number of elements the array can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Makes room for one more element, doubling the capacity if full.
    /// Leaves the array untouched on failure.
    fn expand(&mut self) -> Result<(), AllocError> {
        if self.buf.len() < self.capacity {
            return Ok(());
        }
        let new_capacity = match self.capacity.checked_mul(GROWTH_FACTOR) {
            Some(0) => INITIAL_CAPACITY,
            Some(cap) => cap,
            None => return Err(AllocError),
        };
        self.buf.try_reserve_exact(new_capacity - self.buf.len())?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Appends an element.
    ///
    /// # Errors
    /// `OutOfMemory` if the array is full and cannot grow. The element is
    /// handed back inside the error.
    pub fn push_back(&mut self, value: T) -> Result<(), InsertError<T>> {
        if self.expand().is_err() {
            return Err(InsertError::new(InsertErrorKind::OutOfMemory, value));
        }
        self.buf.push(value);
        Ok(())
    }

    /// Inserts an element at `pos`, shifting the tail right by one slot.
    /// `pos == len()` behaves like [`Array::push_back`].
    ///
    /// # Errors
    /// `OutOfBounds` if `pos > len()`, `OutOfMemory` if the array cannot grow.
    pub fn insert_at(&mut self, pos: usize, value: T) -> Result<(), InsertError<T>> {
        if pos > self.buf.len() {
            return Err(InsertError::new(InsertErrorKind::OutOfBounds, value));
        }
        if self.expand().is_err() {
            return Err(InsertError::new(InsertErrorKind::OutOfMemory, value));
        }
        self.buf.insert(pos, value);
        Ok(())
    }

    /// Removes the element at `pos`, shifting the tail left by one slot.
    /// Returns `None` when `pos` is out of bounds.
    pub fn erase_at(&mut self, pos: usize) -> Option<T> {
        if pos < self.buf.len() {
            Some(self.buf.remove(pos))
        } else {
            None
        }
    }

    /// Removes and returns the last element.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.buf.pop()
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.buf.get(pos)
    }

    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.buf.get_mut(pos)
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend_from_slice(&self.buf);
        Array {
            buf,
            capacity: self.capacity,
        }
    }
}

/// Two arrays are equal when their live elements are; capacity is ignored.
impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, pos: usize) -> &T {
        &self.buf[pos]
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}
