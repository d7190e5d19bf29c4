use crate::vec::GrowVec;

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};



// Capacity never participates: only the live elements are compared.

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.as_slice().partial_cmp(other.as_slice()) }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> Ordering { self.as_slice().cmp(other.as_slice()) }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_slice().hash(state) }
}

// Comparisons against literals, e.g. `assert_eq!(v, [1, 2, 3])`.
impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowVec<T> { fn eq(&self, other: &[T; N]) -> bool { self.as_slice() == other.as_slice() } }
impl<T: PartialEq> PartialEq<[T]> for GrowVec<T> { fn eq(&self, other: &[T]) -> bool { self.as_slice() == other } }
