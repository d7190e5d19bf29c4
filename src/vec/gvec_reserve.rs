use crate::buffer::HeapBuffer;
use crate::error::OutOfMemoryError;
use crate::vec::GrowVec;



/// A request for a [`GrowVec`] with `capacity` slots and no elements.  See [`reserve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)] pub struct ReserveRequest {
    pub capacity: usize,
}

/// Request a [`GrowVec`] pre-sized to `capacity`, with `len() == 0`.
///
/// ## Examples
/// ```
/// use growvec::{reserve, GrowVec};
/// let mut v = GrowVec::<u32>::from(reserve(10));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 10);
///
/// for i in 0 .. 10 { v.push_back(i) }
/// assert_eq!(v.capacity(), 10);
/// ```
pub const fn reserve(capacity: usize) -> ReserveRequest { ReserveRequest { capacity } }

impl<T: Default> GrowVec<T> {
    pub fn try_from_reserve(request: ReserveRequest) -> Result<Self, OutOfMemoryError> {
        Ok(Self::from_parts(HeapBuffer::try_with_len(request.capacity)?, 0))
    }
}

#[cfg(feature = "panicy-memory")] impl<T: Default> From<ReserveRequest> for GrowVec<T> {
    #[track_caller] fn from(request: ReserveRequest) -> Self { Self::try_from_reserve(request).expect("out of memory") }
}



#[cfg(feature = "panicy-memory")] #[test] fn from_reserve() {
    let v = GrowVec::<u8>::try_from_reserve(reserve(0)).unwrap();
    assert_eq!((v.len(), v.capacity()), (0, 0));

    let v = GrowVec::<u8>::from(reserve(5));
    assert_eq!((v.len(), v.capacity()), (0, 5));
    assert!(v.is_empty());

    let err = GrowVec::<u64>::try_from_reserve(reserve(usize::MAX)).err().unwrap();
    assert_eq!(err.requested, usize::MAX);
}
