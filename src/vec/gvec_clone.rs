use crate::buffer::HeapBuffer;
use crate::error::OutOfMemoryError;
use crate::vec::GrowVec;



impl<T: Clone> GrowVec<T> {
    /// Clone the live elements into a new vector whose capacity is exactly `self.len()`.
    ///
    /// Spare capacity is not carried over: a vector of 3 elements in 8 slots clones into 3 elements in 3 slots.
    ///
    /// ## Examples
    /// ```
    /// use growvec::{reserve, GrowVec};
    /// let mut a = GrowVec::from(reserve(8));
    /// a.extend([1, 2, 3]);
    /// let b = a.try_clone().unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!((b.len(), b.capacity()), (3, 3));
    /// ```
    pub fn try_clone(&self) -> Result<Self, OutOfMemoryError> {
        let buffer = HeapBuffer::try_from_fn(self.len(), |i| self[i].clone())?;
        let size = buffer.len();
        Ok(Self::from_parts(buffer, size))
    }
}

#[cfg(feature = "panicy-memory")] impl<T: Clone> Clone for GrowVec<T> {
    #[track_caller] fn clone(&self) -> Self { self.try_clone().expect("out of memory") }

    /// Clone `source` into a temporary, then swap it into `self`.  If cloning panics, `self` is untouched.
    #[track_caller] fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        Self::swap(self, &mut copy);
    }
}



#[cfg(all(test, feature = "panicy-memory"))] mod tests {
    use crate::*;
    use crate::util::drop::Tester;

    #[test] fn clone_collapses_capacity() {
        let mut a = GrowVec::from(reserve(8));
        a.push_back(1);
        a.push_back(2);
        a.push_back(3);
        let b = a.clone();
        assert_eq!((a.len(), a.capacity()), (3, 8));
        assert_eq!((b.len(), b.capacity()), (3, 3));
        assert_eq!(a, b);
    }

    #[test] fn clone_of_empty_does_not_allocate() {
        let mut a = growvec![1, 2];
        a.clear();
        let b = a.clone();
        assert_eq!(b.capacity(), 0);
    }

    #[test] fn clone_from_replaces_contents() {
        let mut a = growvec![Tester::new(1), Tester::new(2)];
        let b = growvec![Tester::new(3)];
        a.clone_from(&b);
        assert_eq!(a, b);
        assert_eq!(a.capacity(), 1);
        assert_eq!(Tester::counts()[1..4], [0, 0, 2]);
    }

    #[test] fn clone_from_panic_leaves_target_untouched() {
        #[derive(Debug, Default, PartialEq)] struct Brittle(u8);
        impl Clone for Brittle { fn clone(&self) -> Self { if self.0 == 0 { panic!("can't clone zero") } Brittle(self.0) } }

        let mut a = growvec![Brittle(7)];
        let b = growvec![Brittle(1), Brittle(0)];
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| a.clone_from(&b)));
        assert!(result.is_err());
        assert_eq!(a[..], [Brittle(7)]);
    }
}
