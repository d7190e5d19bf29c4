use crate::vec::GrowVec;

use core::borrow::{Borrow, BorrowMut};
use core::ops::{Deref, DerefMut};



// Every view is `[0, len)`: spare capacity and leftovers are never exposed.  Borrows end before any growth can happen.

impl<T> Deref for GrowVec<T> {
    type Target = [T];
    fn deref(&self) -> &[T] { self.as_slice() }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut [T] { self.as_slice_mut() }
}

impl<T> AsRef<[T]> for GrowVec<T> { fn as_ref(&self) -> &[T] { self.as_slice() } }
impl<T> AsMut<[T]> for GrowVec<T> { fn as_mut(&mut self) -> &mut [T] { self.as_slice_mut() } }
impl<T> Borrow<[T]> for GrowVec<T> { fn borrow(&self) -> &[T] { self.as_slice() } }
impl<T> BorrowMut<[T]> for GrowVec<T> { fn borrow_mut(&mut self) -> &mut [T] { self.as_slice_mut() } }



#[cfg(feature = "panicy-memory")] #[test] fn slice_view_excludes_spare_capacity() {
    let mut v = crate::growvec![1, 2, 3];
    v.reserve(8);
    v.erase(0);
    assert_eq!(v.iter().count(), 2);
    assert_eq!(v.first(), Some(&2));
    assert_eq!(v.last(), Some(&3));
    v.iter_mut().for_each(|x| *x *= 10);
    assert_eq!(v[..], [20, 30]);
    v.sort_by(|a, b| b.cmp(a));
    assert_eq!(v[..], [30, 20]);
}
