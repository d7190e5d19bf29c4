#![allow(dead_code)] // some used for test code

use crate::heap;

#[cfg(test)] use core::marker::PhantomData;
use core::ptr::NonNull;



/// A heap array being initialized front to back.
///
/// If dropped before [`finish`](Self::finish) (e.g. because `T::default()` or `T::clone()` panicked), the initialized
/// prefix is dropped in place and the allocation is returned to the heap, so nothing leaks and nothing is dropped twice.
pub struct PartialInit<T> {
    data:   NonNull<T>,
    len:    usize,
    init:   usize,
}

impl<T> PartialInit<T> {
    /// ### Safety
    /// *   `data` must be an allocation of `len` uninitialized `T`s returned by [`heap::alloc_array`], owned by the caller
    pub unsafe fn new(data: NonNull<T>, len: usize) -> Self { Self { data, len, init: 0 } }

    pub fn remaining(&self) -> usize { self.len - self.init }

    pub fn push(&mut self, value: T) {
        assert!(self.init < self.len, "bug: PartialInit::push past the end of the allocation");
        // SAFETY: ✔️ `init < len`, so this slot is within the allocation and not yet initialized
        unsafe { self.data.as_ptr().add(self.init).write(value) };
        self.init += 1;
    }

    /// Every slot is initialized: hand the allocation back to the caller.
    pub fn finish(self) -> (NonNull<T>, usize) {
        assert!(self.init == self.len, "bug: PartialInit::finish with {} of {} slots initialized", self.init, self.len);
        let parts = (self.data, self.len);
        core::mem::forget(self);
        parts
    }
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        let init = core::ptr::slice_from_raw_parts_mut(self.data.as_ptr(), self.init);
        // SAFETY: ✔️ exactly the first `init` slots were written by `push`
        unsafe { init.drop_in_place() };
        // SAFETY: ✔️ `data` came from `heap::alloc_array::<T>(len)` per `new`'s preconditions, and is never touched again
        unsafe { heap::free_array(self.data, self.len) };
    }
}



#[cfg(test)] std::thread_local! { static TESTER_COUNTS: [core::cell::Cell<usize>; 256] = [(); 256].map(|_| core::cell::Cell::new(0)); }

/// Counts live instances per value, to catch leaks and double drops.
///
/// [`Default`] produces `Tester(0)`, so slot `0` counts spare capacity and leftovers; tests should use `1..` for live values.
#[cfg(test)] #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)] pub struct Tester {
    data: u8,
    _phantom: PhantomData<*const ()>,
}

#[cfg(test)] impl Tester {
    pub fn new(data: u8) -> Self { TESTER_COUNTS.with(|tc| tc[data as usize].set(tc[data as usize].get() + 1)); Self { data, _phantom: PhantomData } }
    pub fn get(&self) -> u8 { self.data }
    pub fn counts() -> [usize; 256] { TESTER_COUNTS.with(|tc| tc.clone().map(|c| c.get())) }
    pub fn live() -> usize { Self::counts().iter().sum() }
}

#[cfg(test)] impl core::ops::Deref for Tester {
    type Target = u8;
    fn deref(&self) -> &u8 { &self.data }
}

#[cfg(test)] impl Drop for Tester {
    fn drop(&mut self) {
        let data = self.data as usize;
        TESTER_COUNTS.with(|tc| tc[data].set(tc[data].get().checked_sub(1).expect("count went negative, a util::drop::Tester was presumably dropped multiple times")))
    }
}

#[cfg(test)] impl Clone for Tester {
    fn clone(&self) -> Self { Self::new(self.data) }
}

#[cfg(test)] impl Default for Tester {
    fn default() -> Self { Self::new(0) }
}



#[test] fn partial_init_drops_prefix() {
    let data = heap::alloc_array::<Tester>(4).unwrap();
    // SAFETY: ✔️ fresh allocation of 4 `Tester`s
    let mut init = unsafe { PartialInit::new(data, 4) };
    init.push(Tester::new(1));
    init.push(Tester::new(2));
    assert_eq!(init.remaining(), 2);
    assert_eq!(Tester::counts()[1..3], [1, 1]);
    drop(init);
    assert_eq!(Tester::counts()[1..3], [0, 0]);
}

#[test] fn partial_init_finish() {
    let data = heap::alloc_array::<Tester>(2).unwrap();
    // SAFETY: ✔️ fresh allocation of 2 `Tester`s
    let mut init = unsafe { PartialInit::new(data, 2) };
    init.push(Tester::new(3));
    init.push(Tester::new(4));
    let (data, len) = init.finish();
    assert_eq!(Tester::counts()[3..5], [1, 1]);

    let slice = core::ptr::slice_from_raw_parts_mut(data.as_ptr(), len);
    // SAFETY: ✔️ both slots were initialized, and the allocation is ours to free
    unsafe { slice.drop_in_place(); heap::free_array(data, len) };
    assert_eq!(Tester::counts()[3..5], [0, 0]);
}
