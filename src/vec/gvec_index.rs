use crate::vec::GrowVec;

use core::ops::{Index, IndexMut};
use core::slice::SliceIndex;



// Bounds checked against `len`, never `capacity`.  See `at` for the fallible form.

impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
    type Output = I::Output;
    #[track_caller] fn index(&self, index: I) -> &I::Output { &self.as_slice()[index] }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T> {
    #[track_caller] fn index_mut(&mut self, index: I) -> &mut I::Output { &mut self.as_slice_mut()[index] }
}



#[cfg(feature = "panicy-memory")] #[test] #[should_panic] fn index_past_len_panics_even_within_capacity() {
    let mut v = crate::GrowVec::<u8>::from(crate::reserve(4));
    v.push_back(1);
    let _ = v[1];
}
