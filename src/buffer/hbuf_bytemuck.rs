use crate::buffer::HeapBuffer;
use crate::error::OutOfMemoryError;
use crate::heap;

use bytemuck::*;



impl<T: Zeroable> HeapBuffer<T> {
    /// Allocate a buffer of `len` slots initialized to `0`, without running any per-slot constructor.
    ///
    /// ## Failure Modes
    /// *   Returns <code>[Err]\(...\)</code> when excessively large allocations are requested
    /// *   Returns <code>[Err]\(...\)</code> when out of memory
    ///
    /// ## Examples
    /// ```
    /// use growvec::HeapBuffer;
    /// let a = HeapBuffer::<u32>::try_with_len_zeroed(0).unwrap();
    /// assert!(!a.is_allocated());
    /// let a = HeapBuffer::<u32>::try_with_len_zeroed(32).unwrap();
    /// assert!(a.iter().all(|v| *v == 0));
    /// let a = HeapBuffer::<()>::try_with_len_zeroed(usize::MAX).unwrap();
    /// assert_eq!(a.len(), usize::MAX);
    /// ```
    ///
    /// ```
    /// // will return Err(...) - too much memory requested
    /// # use growvec::HeapBuffer;
    /// let err = HeapBuffer::<u32>::try_with_len_zeroed(usize::MAX).err().unwrap();
    /// ```
    pub fn try_with_len_zeroed(len: usize) -> Result<Self, OutOfMemoryError> {
        if len == 0 { return Ok(Self::new()) }
        let data = heap::alloc_array_zeroed::<T>(len)?;
        // SAFETY: ✔️ we just allocated `data` for `len` `T`s, and own it
        // SAFETY: ✔️ `T` is `Zeroable`, so our `alloc_array_zeroed` made every slot a valid initialized `T`
        Ok(unsafe { Self::from_raw_parts(data, len) })
    }

    /// Allocate a buffer of `len` slots initialized to `0`, without running any per-slot constructor.
    ///
    /// ## Failure Modes
    /// *   [`panic!`]s when out of memory
    #[cfg(feature = "panicy-memory")] #[track_caller] pub fn with_len_zeroed(len: usize) -> Self {
        Self::try_with_len_zeroed(len).expect("out of memory")
    }
}



#[test] fn zeroed_matches_default() {
    let a = HeapBuffer::<[u16; 3]>::try_with_len_zeroed(7).unwrap();
    let b = HeapBuffer::<[u16; 3]>::try_with_len(7).unwrap();
    assert_eq!(a[..], b[..]);
}
