/// Like [`panic!`], but meant for undefined behavior which might be worth using [`core::hint::unreachable_unchecked`] on in the future.
macro_rules! ub {
    ( $($tt:tt)* ) => {{
        $crate::_macros::maybe_eventually_sometimes_unreachable();
        panic!($($tt)*);
    }};
}

/// In the future, this may be a hint that the calling path is unreachable in some builds.
#[inline(always)] pub fn maybe_eventually_sometimes_unreachable() {}



/// Construct a [`GrowVec`](crate::GrowVec) from a literal list of values, like [`alloc::vec!`].
///
/// *   `growvec![a, b, c]` moves each value in, in order.  `capacity() == len() == 3`.
/// *   `growvec![value; n]` clones `value` into `n` slots.  `capacity() == len() == n`.
/// *   `growvec![]` is an empty, unallocated vector.
///
/// Panics if out of memory.
///
/// ## Examples
/// ```
/// use growvec::growvec;
/// let v = growvec![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let v = growvec![7u8; 4];
/// assert_eq!(v[..], [7, 7, 7, 7]);
/// ```
#[cfg(feature = "panicy-memory")]
#[macro_export]
macro_rules! growvec {
    () => { $crate::GrowVec::new() };
    ( $value:expr ; $n:expr ) => { $crate::GrowVec::from_elem($n, $value) };
    ( $($value:expr),+ $(,)? ) => { $crate::GrowVec::from([$($value),+]) };
}
