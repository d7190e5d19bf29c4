//! Model-checks [`GrowVec`] against [`Vec`], plus the capacity policy properties that [`Vec`] doesn't share.

use growvec::{growvec, reserve, GrowVec};
use proptest::prelude::*;



#[derive(Clone, Debug)]
enum Op {
    PushBack(i32),
    Insert(usize, i32),
    Erase(usize),
    PopBack,
    Resize(usize),
    Reserve(usize),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => Just(Op::PopBack),
        1 => (0usize .. 64).prop_map(Op::Resize),
        1 => (0usize .. 64).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

fn arb_growvec() -> impl Strategy<Value = GrowVec<i32>> {
    (proptest::collection::vec(-8i32 .. 8, 0 .. 12), 0usize .. 8).prop_map(|(values, spare)| {
        let mut v = GrowVec::from(reserve(values.len() + spare));
        v.extend(values);
        v
    })
}

proptest! {
    #[test]
    fn matches_vec_model(ops in proptest::collection::vec(arb_op(), 0 .. 64)) {
        let mut v = GrowVec::<i32>::new();
        let mut model = Vec::new();

        for op in ops {
            let old_capacity = v.capacity();
            match op {
                Op::PushBack(x) => { v.push_back(x); model.push(x); },
                Op::Insert(i, x) => {
                    let i = i % (model.len() + 1);
                    prop_assert_eq!(v.insert(i, x), i);
                    model.insert(i, x);
                },
                Op::Erase(i) => if !model.is_empty() {
                    let i = i % model.len();
                    prop_assert_eq!(v.erase(i), i);
                    model.remove(i);
                },
                Op::PopBack => { v.pop_back(); model.pop(); },
                Op::Resize(n) => { v.resize(n); model.resize(n, 0); },
                Op::Reserve(n) => {
                    v.reserve(n);
                    prop_assert_eq!(v.capacity(), old_capacity.max(n));
                },
                Op::Clear => { v.clear(); model.clear(); },
            }

            prop_assert!(v.len() <= v.capacity());
            prop_assert!(v.capacity() >= old_capacity, "capacity never shrinks");
            prop_assert_eq!(v.is_empty(), v.len() == 0);
            prop_assert_eq!(&v[..], &model[..]);
        }
    }

    #[test]
    fn push_back_capacity_doubles(n in 0usize .. 300) {
        let mut v = GrowVec::new();
        for i in 0 .. n {
            let before = v.capacity();
            v.push_back(i);
            let after = v.capacity();
            match before {
                0                       => prop_assert_eq!(after, 1),
                c if c == i             => prop_assert_eq!(after, 2 * c),
                c                       => prop_assert_eq!(after, c),
            }
            prop_assert!(after.is_power_of_two());
        }
    }

    #[test]
    fn insert_then_erase_restores(v in arb_growvec(), i in any::<usize>(), x in any::<i32>()) {
        let original = v.clone();
        let mut v = v;
        let i = i % (v.len() + 1);
        let at = v.insert(i, x);
        prop_assert_eq!(v[at], x);
        v.erase(at);
        prop_assert_eq!(&v, &original);
    }

    #[test]
    fn resize_exposes_defaults(v in arb_growvec(), k in 0usize .. 40) {
        let before = v.len();
        let prefix = v[.. before.min(k)].to_vec();
        let mut v = v;
        v.resize(k);
        prop_assert_eq!(v.len(), k);
        prop_assert_eq!(&v[.. before.min(k)], &prefix[..]);
        prop_assert!(v[before.min(k) ..].iter().all(|x| *x == 0));
    }

    #[test]
    fn reserve_never_touches_len(v in arb_growvec(), n in 0usize .. 64) {
        let (len, capacity) = (v.len(), v.capacity());
        let mut v = v;
        v.reserve(n);
        prop_assert_eq!(v.len(), len);
        if n <= capacity { prop_assert_eq!(v.capacity(), capacity) } else { prop_assert!(v.capacity() >= n) }
    }

    #[test]
    fn take_empties_source(v in arb_growvec()) {
        let expected = v.to_vec();
        let mut v = v;
        let taken = GrowVec::take(&mut v);
        prop_assert_eq!((v.len(), v.capacity()), (0, 0));
        prop_assert_eq!(&taken[..], &expected[..]);
    }

    #[test]
    fn clone_collapses_capacity(v in arb_growvec()) {
        let c = v.clone();
        prop_assert_eq!(&c, &v);
        prop_assert_eq!(c.capacity(), v.len());
    }

    #[test]
    fn comparisons_match_slices(a in arb_growvec(), b in arb_growvec(), c in arb_growvec()) {
        prop_assert_eq!(a == b, a[..] == b[..]);
        prop_assert_eq!(a.cmp(&b), a[..].cmp(&b[..]));
        prop_assert_eq!(a < b, b > a);
        prop_assert_eq!(a <= b, !(b < a));
        prop_assert!(a == a.clone());
        if a <= b && b <= c { prop_assert!(a <= c) }
        if a == b && b == c { prop_assert!(a == c) }
    }
}

#[test]
fn documented_scenario() {
    let mut v = growvec![1, 2, 3];
    v.erase(1);
    assert_eq!(v, [1, 3]);
    v.push_back(4);
    assert_eq!(v, [1, 3, 4]);
    assert!(v.at(5).is_err());
    v.insert(0, 0);
    assert_eq!(v, [0, 1, 3, 4]);
    assert_eq!(v.len(), 4);
}
