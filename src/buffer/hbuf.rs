use crate::heap;
use crate::util;

use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ptr::NonNull;



/// Exclusive owner of zero or one heap allocated arrays of `T`.
///
/// Every one of the [`len`](Self::len) slots always holds an initialized `T`.
/// Dropping the buffer drops every slot, then returns the allocation to the global heap.
///
/// ## Notable Differences
/// | Feature           | [`HeapBuffer<T>`]                                 | <code>[alloc::boxed::Box]<\[T\]></code>               |
/// | ------------------| --------------------------------------------------| ------------------------------------------------------|
/// | Empty state       | explicit, never allocates                         | dangling, never allocates
/// | Raw ownership     | [`HeapBuffer::release`] resets the buffer in place | [`Box::into_raw`](alloc::boxed::Box::into_raw) consumes the box
/// | Zeroed Allocs     | stable [`bytemuck::Zeroable`]-aware               | [`MaybeUninit`](core::mem::MaybeUninit) dance
/// | Panic-on-OOM APIs | `--features panicy-memory`                        | always
/// | Cloning           | never (ownership is move-only)                    | `T: Clone`
///
/// ## Examples
/// ```
/// use growvec::HeapBuffer;
/// let mut a = HeapBuffer::<u32>::try_with_len(4).unwrap();
/// a[2] = 42;
/// assert_eq!(a[..], [0, 0, 42, 0]);
///
/// let b = HeapBuffer::take(&mut a);
/// assert!(!a.is_allocated());
/// assert_eq!(b.len(), 4);
/// ```
///
/// ```compile_fail,E0277
/// // won't compile - ownership of a buffer can't be duplicated
/// # use growvec::HeapBuffer;
/// fn duplicate<C: Clone>(c: &C) -> C { c.clone() }
/// let a = HeapBuffer::<u32>::try_with_len(4).unwrap();
/// let b = duplicate(&a);
/// ```
pub struct HeapBuffer<T> {
    data:       NonNull<T>,
    len:        usize,
    _phantom:   PhantomData<T>,
}

// SAFETY: ✔️ unique owner of its `T`s, like `Box<[T]>`
unsafe impl<T: Send> Send for HeapBuffer<T> {}
// SAFETY: ✔️ unique owner of its `T`s, like `Box<[T]>`
unsafe impl<T: Sync> Sync for HeapBuffer<T> {}

impl<T> Drop for HeapBuffer<T> {
    fn drop(&mut self) {
        let slots = core::ptr::slice_from_raw_parts_mut(self.data.as_ptr(), self.len);
        // SAFETY: ✔️ every slot is initialized, and `self` is going out of scope: nothing else will ever access them again
        unsafe { slots.drop_in_place() };
        // SAFETY: ✔️ `data` was allocated by `heap::alloc_array*::<T>(len)` (or dangles for `len == 0`, which `free_array` ignores)
        unsafe { heap::free_array(self.data, self.len) };
    }
}

impl<T> HeapBuffer<T> {
    /// An empty buffer.  Doesn't allocate.
    pub const fn new() -> Self { Self { data: NonNull::dangling(), len: 0, _phantom: PhantomData } }

    #[inline(always)] pub fn len(&self) -> usize { self.len }
    #[inline(always)] pub fn is_empty(&self) -> bool { self.len == 0 }
    #[inline(always)] pub fn as_ptr(&self) -> *const T { self.data.as_ptr() }
    #[inline(always)] pub fn as_mut_ptr(&mut self) -> *mut T { self.data.as_ptr() }
    #[inline(always)] pub fn as_slice(&self) -> &[T] { self }
    #[inline(always)] pub fn as_mut_slice(&mut self) -> &mut [T] { self }

    /// `true` if this buffer owns any slots.  The "non-empty" test.
    #[inline(always)] pub fn is_allocated(&self) -> bool { self.len != 0 }

    /// Exchange the arrays owned by `a` and `b`.  Never allocates, never touches any `T`.
    pub fn swap(a: &mut Self, b: &mut Self) { core::mem::swap(a, b) }

    /// Move ownership out of `this`, leaving it empty.
    pub fn take(this: &mut Self) -> Self { core::mem::replace(this, Self::new()) }

    /// Give up ownership of the array, leaving `this` empty.
    ///
    /// Returns [`None`] if `this` was already empty.  Otherwise the caller now owns every `T` in the array and the
    /// allocation itself, and should eventually pass it back to [`HeapBuffer::from_raw`] to release either.
    ///
    /// ## Examples
    /// ```
    /// use growvec::HeapBuffer;
    /// let mut a = HeapBuffer::<u8>::try_with_len(3).unwrap();
    /// let raw = HeapBuffer::release(&mut a).unwrap();
    /// assert!(!a.is_allocated());
    /// assert!(HeapBuffer::release(&mut a).is_none());
    ///
    /// let a = unsafe { HeapBuffer::from_raw(raw) };
    /// assert_eq!(a.len(), 3);
    /// ```
    #[must_use] pub fn release(this: &mut Self) -> Option<NonNull<[T]>> {
        if !this.is_allocated() { return None }
        Some(Self::into_raw(Self::take(this)))
    }

    /// Decompose into the raw array, without dropping any `T` or freeing anything.
    #[must_use] pub fn into_raw(this: Self) -> NonNull<[T]> {
        let this = ManuallyDrop::new(this);
        util::nn::slice_from_raw_parts(this.data, this.len)
    }

    /// Adopt an array previously given up by [`HeapBuffer::release`] or [`HeapBuffer::into_raw`].  Never allocates.
    ///
    /// ## Safety
    /// *   `raw` must have come from [`HeapBuffer::release`] or [`HeapBuffer::into_raw`] with the same `T`
    /// *   every `T` in `raw` must still be initialized
    /// *   [`HeapBuffer`] takes exclusive ownership over `raw`: it must not be adopted twice, nor accessed through other pointers afterwards
    pub unsafe fn from_raw(raw: NonNull<[T]>) -> Self {
        let (data, len) = util::nn::slice_into_raw_parts(raw);
        // SAFETY: ✔️ same preconditions as documented
        unsafe { Self::from_raw_parts(data, len) }
    }

    /// ### Safety
    /// *   `data` must be a `heap::alloc_array*::<T>(len)` allocation (or dangling if `len == 0`) with every slot initialized
    /// *   [`HeapBuffer`] takes exclusive ownership over `data`
    pub(crate) unsafe fn from_raw_parts(data: NonNull<T>, len: usize) -> Self {
        Self { data, len, _phantom: PhantomData }
    }
}
