//! [`HeapBuffer`]: the exclusively owned heap array backing [`GrowVec`](crate::GrowVec)

mod hbuf;                   pub use hbuf::*;
mod hbuf_alloc;
mod hbuf_bytemuck;
mod hbuf_fmt;
mod hbuf_traits;
