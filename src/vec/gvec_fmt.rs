use crate::vec::GrowVec;

use core::fmt::{self, Debug, Formatter};



impl<T: Debug> Debug for GrowVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
        .finish()
    }
}



#[cfg(feature = "panicy-memory")] #[test] fn debug() {
    use alloc::format;
    let mut v = crate::growvec![1, 2, 3];
    v.pop_back();
    assert_eq!(format!("{v:?}"), "GrowVec { capacity: 3, data: [1, 2] }");
}
