use crate::vec::GrowVec;



#[cfg(feature = "panicy-memory")] impl<T: Default> Extend<T> for GrowVec<T> {
    #[track_caller] fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.try_reserve_additional(iter.size_hint().0).expect("out of memory");
        for item in iter { self.push_back(item) }
    }
}

#[cfg(feature = "panicy-memory")] impl<'a, T: Copy + Default + 'a> Extend<&'a T> for GrowVec<T> {
    #[track_caller] fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

// TODO: try_extend returning the unconsumed iterator alongside OutOfMemoryError



#[cfg(all(test, feature = "panicy-memory"))] mod tests {
    use crate::*;

    #[test] fn extend() {
        let mut v = growvec![1];
        v.extend([2, 3, 4]);
        assert_eq!(v.capacity(), 4);
        v.extend(&[5, 6]);
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
        assert_eq!(v.capacity(), 8);
    }

    #[test] fn extend_within_capacity_keeps_buffer() {
        let mut v = GrowVec::from(reserve(5));
        let ptr = v.as_ptr();
        v.extend([1, 2, 3, 4, 5]);
        assert_eq!(v.capacity(), 5);
        assert_eq!(v.as_ptr(), ptr);
    }

    #[test] fn extend_one_at_a_time_doubles() {
        let mut v = GrowVec::new();
        let mut capacities = std::vec::Vec::new();
        for i in 0 .. 8 {
            v.extend([i]);
            capacities.push(v.capacity());
        }
        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8]);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test] fn extend_by_ref_one_at_a_time_doubles() {
        let mut v = GrowVec::<u8>::new();
        for i in 0 .. 9 { v.extend(&[i]) }
        assert_eq!(v.capacity(), 16);
    }
}
