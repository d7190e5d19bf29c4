use crate::vec::GrowVec;



impl<T> Default for GrowVec<T> { fn default() -> Self { Self::new() } }

// Don't bother with `try_default`: an empty vector never allocates, so it can't fail
