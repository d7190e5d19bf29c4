use crate::buffer::HeapBuffer;

use core::fmt::{self, Debug, Pointer, Formatter};



impl<T: Debug> Debug   for HeapBuffer<T> { fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.debug_struct("HeapBuffer").field("data", &self.as_slice()).finish() } }
impl<T>        Pointer for HeapBuffer<T> { fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { Pointer::fmt(&self.as_ptr(), f) } }



#[test] fn debug() {
    use alloc::format;
    let a = HeapBuffer::try_from_fn(2, |i| i as u8).unwrap();
    assert_eq!(format!("{a:?}"), "HeapBuffer { data: [0, 1] }");
}
