//! [`OutOfMemoryError`] and [`IndexOutOfRangeError`]

use core::alloc::Layout;
use core::fmt::{self, Debug, Display, Formatter};



/// The global heap couldn't satisfy an allocation request.
///
/// Also returned when `requested` elements of the element type wouldn't even fit in a valid [`Layout`]
/// (more than [`isize::MAX`] bytes), in which case `layout` is [`None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)] pub struct OutOfMemoryError {
    pub requested:  usize,
    pub layout:     Option<Layout>,
}

impl Display for OutOfMemoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.layout {
            Some(layout)    => write!(f, "out of memory: unable to allocate {} elements ({} bytes, {} byte alignment)", self.requested, layout.size(), layout.align()),
            None            => write!(f, "out of memory: {} elements exceeds the maximum allocation size", self.requested),
        }
    }
}

#[cfg(feature = "std")] impl std::error::Error for OutOfMemoryError { fn description(&self) -> &str { "out of memory" } }



/// [`GrowVec::at`](crate::GrowVec::at) was passed an index `>= len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)] pub struct IndexOutOfRangeError {
    pub index:  usize,
    pub len:    usize,
}

impl Display for IndexOutOfRangeError { fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "index {} is out of range for a sequence of length {}", self.index, self.len) } }
#[cfg(feature = "std")] impl std::error::Error for IndexOutOfRangeError { fn description(&self) -> &str { "index is out of range" } }



#[cfg(test)] mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test] fn display() {
        let err = IndexOutOfRangeError { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 is out of range for a sequence of length 3");

        let err = OutOfMemoryError { requested: usize::MAX, layout: None };
        assert!(err.to_string().contains("exceeds the maximum allocation size"));

        let err = OutOfMemoryError { requested: 4, layout: Some(Layout::new::<[u32; 4]>()) };
        assert_eq!(err.to_string(), "out of memory: unable to allocate 4 elements (16 bytes, 4 byte alignment)");
    }
}
