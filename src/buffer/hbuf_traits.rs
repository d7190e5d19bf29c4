use crate::buffer::HeapBuffer;

use core::borrow::{Borrow, BorrowMut};
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::slice::SliceIndex;



impl<T> Default for HeapBuffer<T> { fn default() -> Self { Self::new() } }



// (Auto)Derefs

impl<T> Deref for HeapBuffer<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        // SAFETY: ✔️ `data` points at `len` initialized `T`s (or dangles, aligned, for `len == 0` / ZSTs) that we have exclusive access to
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len()) }
    }
}

impl<T> DerefMut for HeapBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        let len = self.len();
        // SAFETY: ✔️ `data` points at `len` initialized `T`s (or dangles, aligned, for `len == 0` / ZSTs) that we have exclusive access to
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }
}

impl<T> AsMut<[T]>      for HeapBuffer<T> { fn as_mut(&mut self)       -> &mut [T] { self } }
impl<T> AsRef<[T]>      for HeapBuffer<T> { fn as_ref(&self)           -> &[T]     { self } }
impl<T> Borrow<[T]>     for HeapBuffer<T> { fn borrow(&self)           -> &[T]     { self } }
impl<T> BorrowMut<[T]>  for HeapBuffer<T> { fn borrow_mut(&mut self)   -> &mut [T] { self } }



// Indexing

impl<T, I: SliceIndex<[T]>> Index<I> for HeapBuffer<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &I::Output { self.as_slice().index(index) }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for HeapBuffer<T> {
    fn index_mut(&mut self, index: I) -> &mut I::Output { self.as_mut_slice().index_mut(index) }
}
