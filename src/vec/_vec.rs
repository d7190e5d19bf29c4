//! [`GrowVec`]: a growable [`alloc::vec::Vec`] alternative over a [`HeapBuffer`](crate::HeapBuffer)

mod gvec;                   pub use gvec::*;
mod gvec_clone;
mod gvec_cmp;
mod gvec_default;
mod gvec_deref;
mod gvec_extend;
mod gvec_fmt;
mod gvec_from;
mod gvec_index;
mod gvec_iter;              pub use gvec_iter::IntoIter;
mod gvec_reserve;           pub use gvec_reserve::*;
