//! [`NonNull`]-related utilities

use core::ptr::NonNull;



/// create `NonNull<[T]>` ← `(data: NonNull<T>, len: usize)`
pub fn slice_from_raw_parts<T>(data: NonNull<T>, len: usize) -> NonNull<[T]> {
    let slice = core::ptr::slice_from_raw_parts_mut(data.as_ptr(), len);
    // SAFETY: ✔️ `data` is non-null, so the slice's data pointer is non-null
    unsafe { NonNull::new_unchecked(slice) }
}

/// decompose `NonNull<[T]>` → `(data: NonNull<T>, len: usize)`
pub fn slice_into_raw_parts<T>(slice: NonNull<[T]>) -> (NonNull<T>, usize) {
    (slice.cast(), slice.len())
}



#[test] fn round_trip() {
    let data = NonNull::<u32>::dangling();
    let slice = slice_from_raw_parts(data, 12);
    assert_eq!(slice.len(), 12);
    assert_eq!(slice_into_raw_parts(slice), (data, 12));
}
