use crate::buffer::HeapBuffer;
use crate::error::{IndexOutOfRangeError, OutOfMemoryError};



/// Growable, contiguous sequence over an exclusively owned [`HeapBuffer`].
///
/// Tracks the number of live elements ([`len`](Self::len)) separately from the number of allocated slots
/// ([`capacity`](Self::capacity)).  Slots `[len, capacity)` hold leftover values: they're always initialized (so they can
/// be overwritten or dropped), but never exposed through the slice view.
///
/// Growth never reallocates in place: a new, larger [`HeapBuffer`] is allocated (with every slot `T::default()`), the live
/// elements are moved into it, and the old buffer is dropped.  If the allocation fails, nothing has changed yet.
///
/// ## Capacity policy
/// | Operation                         | New capacity when out of room         |
/// | ----------------------------------| --------------------------------------|
/// | [`push_back`](Self::push_back), [`insert`](Self::insert) | `1` if empty, otherwise `2 * capacity` |
/// | [`resize`](Self::resize)          | `max(new_size, 2 * capacity)`         |
/// | [`reserve`](Self::reserve)        | exactly `new_capacity`                |
/// | [`Extend`]                         | `max(len + size_hint, 2 * capacity)`  |
/// | [`Clone`]                         | exactly `len` (spare capacity is not cloned) |
/// | [`clear`](Self::clear), [`pop_back`](Self::pop_back), [`erase`](Self::erase) | unchanged, never shrinks |
///
/// ## Examples
/// ```
/// use growvec::{growvec, GrowVec};
/// let mut v = growvec![1, 2, 3];
/// assert_eq!(v.erase(1), 1);
/// assert_eq!(v[..], [1, 3]);
///
/// v.push_back(4);
/// assert_eq!(v[..], [1, 3, 4]);
/// assert!(v.at(5).is_err());
///
/// v.insert(0, 0);
/// assert_eq!(v[..], [0, 1, 3, 4]);
/// ```
pub struct GrowVec<T> {
    buffer: HeapBuffer<T>,
    size:   usize,
}

impl<T> GrowVec<T> {
    /// An empty vector.  Doesn't allocate.
    pub const fn new() -> Self { Self { buffer: HeapBuffer::new(), size: 0 } }

    #[inline(always)] pub fn as_ptr(&self) -> *const T { self.buffer.as_ptr() }
    #[inline(always)] pub fn as_mut_ptr(&mut self) -> *mut T { self.buffer.as_mut_ptr() }
    #[inline(always)] pub fn as_slice(&self) -> &[T] { &self.buffer[..self.size] }
    #[inline(always)] pub fn as_slice_mut(&mut self) -> &mut [T] { &mut self.buffer[..self.size] }
    #[inline(always)] pub fn capacity(&self) -> usize { self.buffer.len() }
    #[inline(always)] pub fn is_empty(&self) -> bool { self.size == 0 }
    #[inline(always)] pub fn len(&self) -> usize { self.size }

    /// Borrow the element at `index`, or <code>[Err]\([IndexOutOfRangeError]\)</code> if `index >= len`.
    ///
    /// ## Examples
    /// ```
    /// use growvec::{growvec, error::IndexOutOfRangeError};
    /// let v = growvec![10, 20];
    /// assert_eq!(v.at(1), Ok(&20));
    /// assert_eq!(v.at(2), Err(IndexOutOfRangeError { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfRangeError> {
        let len = self.size;
        self.as_slice().get(index).ok_or(IndexOutOfRangeError { index, len })
    }

    /// Mutably borrow the element at `index`, or <code>[Err]\([IndexOutOfRangeError]\)</code> if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRangeError> {
        let len = self.size;
        self.as_slice_mut().get_mut(index).ok_or(IndexOutOfRangeError { index, len })
    }

    /// Set `len` to `0`.  Capacity and allocation are untouched, and no element is dropped until its slot is reused or the vector is.
    pub fn clear(&mut self) { self.size = 0 }

    /// Forget the last element, if any.  A no-op on an empty vector.
    pub fn pop_back(&mut self) { self.size = self.size.saturating_sub(1) }

    /// Remove the element at `index`, shifting everything after it one slot to the left.
    ///
    /// Returns `index`: the new position of the element that followed the erased one, or `len()` if the last element was erased.
    /// The erased value lingers in the spare capacity until that slot is reused or the vector is dropped.
    ///
    /// ## Panics
    /// *   If `index >= len`
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.size;
        if index >= len { panic!("erase index (is {index}) should be < len (is {len})") }
        self.buffer[index .. len].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Exchange the contents of `a` and `b`.  Never allocates and never moves any element.
    pub fn swap(a: &mut Self, b: &mut Self) {
        HeapBuffer::swap(&mut a.buffer, &mut b.buffer);
        core::mem::swap(&mut a.size, &mut b.size);
    }

    /// Move the contents out of `this`, leaving it empty with `len() == capacity() == 0`.
    ///
    /// ## Examples
    /// ```
    /// use growvec::{growvec, GrowVec};
    /// let mut a = growvec![1, 2, 3];
    /// let b = GrowVec::take(&mut a);
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// assert_eq!(b[..], [1, 2, 3]);
    /// ```
    pub fn take(this: &mut Self) -> Self { core::mem::replace(this, Self::new()) }

    /// `size` must not exceed `buffer.len()`.
    pub(crate) fn from_parts(buffer: HeapBuffer<T>, size: usize) -> Self {
        debug_assert!(size <= buffer.len(), "bug: GrowVec size {size} exceeds capacity {}", buffer.len());
        Self { buffer, size }
    }

    pub(crate) fn into_parts(self) -> (HeapBuffer<T>, usize) { (self.buffer, self.size) }
}

impl<T: Default> GrowVec<T> {
    pub fn try_with_size(size: usize) -> Result<Self, OutOfMemoryError> { Ok(Self { buffer: HeapBuffer::try_with_len(size)?, size }) }

    /// A vector of `size` elements, each `T::default()`.  `capacity() == size`.
    #[cfg(feature = "panicy-memory")] #[track_caller] pub fn with_size(size: usize) -> Self { Self::try_with_size(size).expect("out of memory") }

    /// Move every live element into a fresh buffer of `new_capacity` default slots, then drop the old buffer.
    ///
    /// All-or-nothing: if the allocation (or a `T::default()`) fails, `self` is untouched.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), OutOfMemoryError> {
        let size = self.size;
        debug_assert!(size <= new_capacity, "bug: relocating {size} elements into {new_capacity} slots");
        let mut buffer = HeapBuffer::try_with_len(new_capacity)?;
        log::trace!("growvec: relocating {size} elements from capacity {} to {new_capacity}", self.capacity());
        buffer[.. size].swap_with_slice(&mut self.buffer[.. size]);
        HeapBuffer::swap(&mut self.buffer, &mut buffer);
        Ok(())
    }

    /// Make room for one more element: capacity `0 → 1`, or doubled when full.
    fn grow_for_one(&mut self) -> Result<(), OutOfMemoryError> {
        let capacity = self.capacity();
        if capacity == 0 {
            self.relocate(1)
        } else if self.size == capacity {
            let doubled = capacity.checked_mul(2).ok_or(OutOfMemoryError { requested: usize::MAX, layout: None })?;
            self.relocate(doubled)
        } else {
            Ok(())
        }
    }

    pub fn try_push_back(&mut self, value: T) -> Result<(), (T, OutOfMemoryError)> {
        if let Err(err) = self.grow_for_one() { return Err((value, err)) }
        self.buffer[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Append `value`, doubling capacity if full (or growing to `1` if empty).
    ///
    /// ## Examples
    /// ```
    /// use growvec::GrowVec;
    /// let mut v = GrowVec::new();
    /// let mut capacities = Vec::new();
    /// for i in 0 .. 9 {
    ///     v.push_back(i);
    ///     capacities.push(v.capacity());
    /// }
    /// assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    /// ```
    #[cfg(feature = "panicy-memory")] #[track_caller] pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).map_err(|(_, err)| err).expect("out of memory")
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// Returns the position of the inserted element.  Grows exactly like [`try_push_back`](Self::try_push_back); on failure
    /// `value` is handed back and `self` is untouched.
    ///
    /// ## Panics
    /// *   If `index > len`
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, (T, OutOfMemoryError)> {
        let len = self.size;
        if index > len { panic!("insertion index (is {index}) should be <= len (is {len})") }
        if let Err(err) = self.grow_for_one() { return Err((value, err)) }
        self.buffer[len] = value;
        self.buffer[index ..= len].rotate_right(1);
        self.size += 1;
        Ok(index)
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot to the right.  Returns `index`.
    ///
    /// ## Panics
    /// *   If `index > len`
    /// *   If out of memory
    #[cfg(feature = "panicy-memory")] #[track_caller] pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).map_err(|(_, err)| err).expect("out of memory")
    }

    pub fn try_resize(&mut self, new_size: usize) -> Result<(), OutOfMemoryError> {
        let capacity = self.capacity();
        if new_size > capacity {
            // fresh slots of the new buffer are already `T::default()`
            self.relocate(new_size.max(capacity.saturating_mul(2)))?;
        } else if new_size > self.size {
            self.buffer[self.size .. new_size].fill_with(T::default);
        }
        self.size = new_size;
        Ok(())
    }

    /// Set `len` to `new_size`.  Any newly exposed elements are `T::default()`.
    ///
    /// If `new_size` exceeds capacity, the vector relocates to a capacity of `max(new_size, 2 * capacity)`.
    ///
    /// ## Examples
    /// ```
    /// use growvec::growvec;
    /// let mut v = growvec![1, 2, 3];
    /// v.resize(1);
    /// v.resize(4);
    /// assert_eq!(v[..], [1, 0, 0, 0]);
    /// assert_eq!(v.capacity(), 6);
    /// ```
    #[cfg(feature = "panicy-memory")] #[track_caller] pub fn resize(&mut self, new_size: usize) { self.try_resize(new_size).expect("out of memory") }

    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), OutOfMemoryError> {
        if new_capacity <= self.capacity() { return Ok(()) }
        self.relocate(new_capacity)
    }

    /// Grow capacity to exactly `new_capacity`, if it's currently smaller.  Never changes `len`.
    #[cfg(feature = "panicy-memory")] #[track_caller] pub fn reserve(&mut self, new_capacity: usize) { self.try_reserve(new_capacity).expect("out of memory") }

    /// Make room for `additional` more elements, growing to `max(len + additional, 2 * capacity)` when out of room.
    pub(crate) fn try_reserve_additional(&mut self, additional: usize) -> Result<(), OutOfMemoryError> {
        let needed = self.size.checked_add(additional).ok_or(OutOfMemoryError { requested: usize::MAX, layout: None })?;
        if needed <= self.capacity() { return Ok(()) }
        self.relocate(needed.max(self.capacity().saturating_mul(2)))
    }
}

impl<T: Clone> GrowVec<T> {
    pub fn try_from_elem(size: usize, value: T) -> Result<Self, OutOfMemoryError> {
        Ok(Self { buffer: HeapBuffer::try_from_fn(size, |_| value.clone())?, size })
    }

    /// A vector of `size` clones of `value`.  `capacity() == size`.
    #[cfg(feature = "panicy-memory")] #[track_caller] pub fn from_elem(size: usize, value: T) -> Self { Self::try_from_elem(size, value).expect("out of memory") }
}




#[cfg(test)] mod try_tests {
    use crate::*;

    #[test] fn growth_without_panicking_apis() {
        let mut v = GrowVec::<u32>::try_from_array([1, 2]).unwrap();
        v.try_push_back(3).unwrap();
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.try_insert(0, 0).unwrap(), 0);
        assert_eq!(v.capacity(), 4);
        v.try_resize(5).unwrap();
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_slice(), [0, 1, 2, 3, 0]);
        v.try_reserve(20).unwrap();
        assert_eq!((v.len(), v.capacity()), (5, 20));
    }

    #[test] fn reserve_additional_amortizes() {
        let mut v = GrowVec::<u8>::try_with_size(3).unwrap();
        v.try_reserve_additional(0).unwrap();
        assert_eq!(v.capacity(), 3);
        v.try_reserve_additional(1).unwrap();
        assert_eq!(v.capacity(), 6);
        v.try_reserve_additional(10).unwrap();
        assert_eq!(v.capacity(), 13);
        assert_eq!(v.try_reserve_additional(usize::MAX).unwrap_err().requested, usize::MAX);
        assert_eq!((v.len(), v.capacity()), (3, 13));
    }
}
