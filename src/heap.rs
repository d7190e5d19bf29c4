//! The single global heap (<code>[alloc::alloc]::{[alloc](alloc::alloc::alloc), [alloc_zeroed](alloc::alloc::alloc_zeroed), [dealloc](alloc::alloc::dealloc)}</code>), sized in elements instead of bytes
//!
//! Zero-sized requests (`len == 0` or zero-sized `T`) never reach the allocator: they produce (and accept) dangling, well aligned pointers.

use crate::error::OutOfMemoryError;

use core::alloc::Layout;
use core::ptr::NonNull;



/// [`Layout`] of `[T; len]`, or [`OutOfMemoryError`] if that would exceed [`isize::MAX`] bytes.
pub(crate) fn array_layout<T>(len: usize) -> Result<Layout, OutOfMemoryError> {
    Layout::array::<T>(len).map_err(|_| OutOfMemoryError { requested: len, layout: None })
}

/// Allocate uninitialized storage for `len` instances of `T`.
pub(crate) fn alloc_array<T>(len: usize) -> Result<NonNull<T>, OutOfMemoryError> { alloc_array_imp(len, false) }

/// Allocate storage for `len` instances of `T`, with every byte zeroed.
pub(crate) fn alloc_array_zeroed<T>(len: usize) -> Result<NonNull<T>, OutOfMemoryError> { alloc_array_imp(len, true) }

fn alloc_array_imp<T>(len: usize, zeroed: bool) -> Result<NonNull<T>, OutOfMemoryError> {
    let layout = array_layout::<T>(len)?;
    if layout.size() == 0 { return Ok(NonNull::dangling()) }

    // SAFETY: ✔️ we just ensured `layout` has a valid (nonzero, <= isize::MAX) size
    let data = unsafe { if zeroed { alloc::alloc::alloc_zeroed(layout) } else { alloc::alloc::alloc(layout) } };
    match NonNull::new(data.cast::<T>()) {
        Some(data) => Ok(data),
        None => {
            log::debug!("growvec: global heap refused {len} elements ({} bytes)", layout.size());
            Err(OutOfMemoryError { requested: len, layout: Some(layout) })
        },
    }
}

/// Free storage previously returned by [`alloc_array`] / [`alloc_array_zeroed`].
///
/// ## Safety
/// *   `data` must have been returned by [`alloc_array`] or [`alloc_array_zeroed`] with the same `T` and `len`
/// *   `data` must not have been freed already, and must never be accessed again
pub(crate) unsafe fn free_array<T>(data: NonNull<T>, len: usize) {
    let Ok(layout) = Layout::array::<T>(len) else { ub!("bug: undefined behavior: freeing {len} elements, which could never have been allocated") };
    if layout.size() == 0 { return }
    // SAFETY: ✔️ `data` was allocated by `alloc_array*` with this exact `layout`, per the documented safety preconditions
    unsafe { alloc::alloc::dealloc(data.as_ptr().cast(), layout) }
}



#[test] fn zero_sized_requests_dangle() {
    let a = alloc_array::<u32>(0).unwrap();
    assert_eq!(a, NonNull::dangling());
    let b = alloc_array::<()>(usize::MAX).unwrap();
    assert_eq!(b, NonNull::dangling());
    // SAFETY: ✔️ both came from `alloc_array` with these lengths
    unsafe { free_array(a, 0) };
    // SAFETY: ✔️ both came from `alloc_array` with these lengths
    unsafe { free_array(b, usize::MAX) };
}

#[test] fn excessive_requests_fail() {
    let err = alloc_array::<u32>(usize::MAX).unwrap_err();
    assert_eq!(err, OutOfMemoryError { requested: usize::MAX, layout: None });

    let err = alloc_array::<u64>(usize::MAX/8 + 1).unwrap_err();
    assert_eq!(err.layout, None);
}

#[test] fn zeroed() {
    let data = alloc_array_zeroed::<u64>(16).unwrap();
    // SAFETY: ✔️ 16 zeroed `u64`s were just allocated
    let slice = unsafe { core::slice::from_raw_parts(data.as_ptr(), 16) };
    assert!(slice.iter().all(|v| *v == 0));
    // SAFETY: ✔️ allocated above with the same `T` and `len`
    unsafe { free_array(data, 16) };
}
