use crate::buffer::HeapBuffer;
use crate::heap;
use crate::util;
use crate::vec::GrowVec;

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;



#[cfg(feature = "panicy-memory")] impl<T: Default> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        let (buffer, size) = self.into_parts();
        let (data, cap) = util::nn::slice_into_raw_parts(HeapBuffer::into_raw(buffer));
        IntoIter { data, front: 0, back: size, size, cap, _phantom: PhantomData }
    }
}

/// [`GrowVec`] converted into an iterator (e.g. the result of <code>v.[into_iter](GrowVec::into_iter)\(\)</code>)
///
/// Yields the live elements by value.  Leftovers in the spare capacity, and any elements not yet yielded, are dropped with the iterator.
pub struct IntoIter<T> {
    data:       NonNull<T>,
    front:      usize, // next index to yield from the front
    back:       usize, // one past the next index to yield from the back
    size:       usize, // live elements end here, leftovers start here
    cap:        usize,
    _phantom:   PhantomData<T>,
}

// SAFETY: ✔️ unique owner of its `T`s, like `HeapBuffer<T>`
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: ✔️ unique owner of its `T`s, like `HeapBuffer<T>`
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: ✔️ `[front, back)` were never yielded, `[size, cap)` are leftovers: both still initialized and owned by us
        let unyielded = unsafe { core::ptr::slice_from_raw_parts_mut(self.data.as_ptr().add(self.front), self.back - self.front) };
        // SAFETY: ✔️ see above
        let leftovers = unsafe { core::ptr::slice_from_raw_parts_mut(self.data.as_ptr().add(self.size), self.cap - self.size) };
        // SAFETY: ✔️ see above, and nothing reads these slots again
        unsafe { unyielded.drop_in_place() };
        // SAFETY: ✔️ see above, and nothing reads these slots again
        unsafe { leftovers.drop_in_place() };
        // SAFETY: ✔️ `data` came from a `HeapBuffer<T>` of `cap` slots, which allocates with `heap::alloc_array*::<T>(cap)`
        unsafe { heap::free_array(self.data, self.cap) };
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back { return None }
        // SAFETY: ✔️ `front < back <= size`: an initialized slot we haven't yielded, and won't touch again
        let item = unsafe { core::ptr::read(self.data.as_ptr().add(self.front)) };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back { return None }
        self.back -= 1;
        // SAFETY: ✔️ `front <= back < size`: an initialized slot we haven't yielded, and won't touch again
        Some(unsafe { core::ptr::read(self.data.as_ptr().add(self.back)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
