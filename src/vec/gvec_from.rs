use crate::buffer::HeapBuffer;
use crate::error::OutOfMemoryError;
use crate::vec::GrowVec;



impl<T> GrowVec<T> {
    /// Move `values` in, in order.  `capacity() == len() == N`.  No `T::default()` is constructed.
    pub fn try_from_array<const N: usize>(values: [T; N]) -> Result<Self, OutOfMemoryError> {
        Ok(Self::from_parts(HeapBuffer::try_from_array(values)?, N))
    }
}

#[cfg(feature = "panicy-memory")] impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    #[track_caller] fn from(values: [T; N]) -> Self { Self::try_from_array(values).expect("out of memory") }
}

/// Adopt every slot of `buffer` as a live element.  Never allocates.
impl<T> From<HeapBuffer<T>> for GrowVec<T> {
    fn from(buffer: HeapBuffer<T>) -> Self {
        let size = buffer.len();
        Self::from_parts(buffer, size)
    }
}
