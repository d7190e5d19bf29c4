use crate::buffer::HeapBuffer;
use crate::error::OutOfMemoryError;
use crate::heap;
use crate::util::drop::PartialInit;



impl<T> HeapBuffer<T> {
    /// Allocate a buffer of `len` slots, slot `i` initialized to `f(i)`.
    ///
    /// ## Failure Modes
    /// *   Returns <code>[Err]\(...\)</code> when excessively large allocations are requested
    /// *   Returns <code>[Err]\(...\)</code> when out of memory
    /// *   If `f` panics, slots already initialized are dropped and the allocation is freed before unwinding continues
    ///
    /// ## Examples
    /// ```
    /// use growvec::HeapBuffer;
    /// let a = HeapBuffer::try_from_fn(4, |i| i * 10).unwrap();
    /// assert_eq!(a[..], [0, 10, 20, 30]);
    ///
    /// let empty = HeapBuffer::<u32>::try_from_fn(0, |_| unreachable!()).unwrap();
    /// assert!(!empty.is_allocated());
    ///
    /// let err = HeapBuffer::<u32>::try_from_fn(usize::MAX, |_| 0).err().unwrap();
    /// ```
    pub fn try_from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> Result<Self, OutOfMemoryError> {
        if len == 0 { return Ok(Self::new()) }
        let data = heap::alloc_array::<T>(len)?;
        // SAFETY: ✔️ we just allocated `data` for `len` `T`s, and own it
        let mut init = unsafe { PartialInit::new(data, len) };
        for i in 0 .. len { init.push(f(i)) }
        let (data, len) = init.finish();
        // SAFETY: ✔️ every one of the `len` slots was just initialized
        Ok(unsafe { Self::from_raw_parts(data, len) })
    }

    /// Allocate a buffer of `len` slots, slot `i` initialized to `f(i)`.
    ///
    /// ## Failure Modes
    /// *   [`panic!`]s when out of memory
    #[cfg(feature = "panicy-memory")] #[track_caller] pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self::try_from_fn(len, f).expect("out of memory")
    }

    /// Move `values` into a buffer of exactly `N` slots, in order.  On failure, `values` are dropped.
    pub(crate) fn try_from_array<const N: usize>(values: [T; N]) -> Result<Self, OutOfMemoryError> {
        if N == 0 { return Ok(Self::new()) }
        let data = heap::alloc_array::<T>(N)?;
        // SAFETY: ✔️ we just allocated `data` for `N` `T`s, and own it
        let mut init = unsafe { PartialInit::new(data, N) };
        for value in values { init.push(value) }
        let (data, len) = init.finish();
        // SAFETY: ✔️ every one of the `N` slots was just initialized
        Ok(unsafe { Self::from_raw_parts(data, len) })
    }
}

impl<T: Default> HeapBuffer<T> {
    /// Allocate a buffer of `len` slots, each initialized to `T::default()`.  `len == 0` never allocates.
    ///
    /// ## Failure Modes
    /// *   Returns <code>[Err]\(...\)</code> when excessively large allocations are requested
    /// *   Returns <code>[Err]\(...\)</code> when out of memory
    ///
    /// ## Examples
    /// ```
    /// use growvec::HeapBuffer;
    /// let a = HeapBuffer::<u32>::try_with_len(3).unwrap();
    /// assert_eq!(a[..], [0, 0, 0]);
    ///
    /// let a = HeapBuffer::<u32>::try_with_len(0).unwrap();
    /// assert!(!a.is_allocated());
    /// ```
    ///
    /// ```
    /// // will return Err(...) - too much memory requested
    /// # use growvec::HeapBuffer;
    /// let err = HeapBuffer::<u32>::try_with_len(usize::MAX).err().unwrap();
    /// assert_eq!(err.requested, usize::MAX);
    /// ```
    pub fn try_with_len(len: usize) -> Result<Self, OutOfMemoryError> { Self::try_from_fn(len, |_| T::default()) }

    /// Allocate a buffer of `len` slots, each initialized to `T::default()`.  `len == 0` never allocates.
    ///
    /// ## Failure Modes
    /// *   [`panic!`]s when out of memory
    #[cfg(feature = "panicy-memory")] #[track_caller] pub fn with_len(len: usize) -> Self { Self::try_with_len(len).expect("out of memory") }
}



#[cfg(test)] mod tests {
    use super::*;
    use crate::util::drop::Tester;

    #[test] fn panicking_initializer_cleans_up() {
        let result = std::panic::catch_unwind(|| {
            HeapBuffer::try_from_fn(8, |i| if i < 3 { Tester::new(20 + i as u8) } else { panic!("initializer failed") })
        });
        assert!(result.is_err());
        assert_eq!(Tester::counts()[20..23], [0, 0, 0]);
    }

    #[test] fn from_array_moves_without_defaults() {
        let a = HeapBuffer::try_from_array([Tester::new(30), Tester::new(31)]).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(Tester::counts()[30..32], [1, 1]);
        assert_eq!(Tester::counts()[0], 0);
        drop(a);
        assert_eq!(Tester::live(), 0);

        let empty = HeapBuffer::<Tester>::try_from_array([]).unwrap();
        assert!(!empty.is_allocated());
    }

    #[test] fn default_slots() {
        let before = Tester::counts()[0];
        let a = HeapBuffer::<Tester>::try_with_len(6).unwrap();
        assert_eq!(Tester::counts()[0], before + 6);
        assert!(a.iter().all(|t| t.get() == 0));
        drop(a);
        assert_eq!(Tester::counts()[0], before);
    }
}
