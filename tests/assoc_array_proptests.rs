// AssociativeArray property tests (public API only).
//
// Property 1: growth transparency.
//  - Insert n distinct keys into a container; every key stays retrievable
//    and capacity is the smallest doubling of DEFAULT_CAPACITY that fits n.
//
// Property 2: counting.
//  - Model: set of keys currently present.
//  - Invariant: len() == model size after each set/remove, with repeated
//    sets of a key counted once and removes of missing keys ignored.
//
// Property 3: clone independence.
//  - After arbitrary edits to a clone, the source still answers every
//    lookup exactly as before the clone was taken.
use assoc_array::{AssociativeArray, KeyNotFoundError, DEFAULT_CAPACITY};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// Property 1: growth never loses entries.
proptest! {
    #[test]
    fn prop_growth_transparency(keys in proptest::collection::btree_set(any::<u32>(), 0..200)) {
        let mut m: AssociativeArray<u32, u64> = AssociativeArray::new();
        for &k in &keys {
            m.set(k, u64::from(k) * 3).unwrap();
        }
        prop_assert_eq!(m.len(), keys.len());

        let mut expected_cap = DEFAULT_CAPACITY;
        while expected_cap < keys.len() {
            expected_cap *= 2;
        }
        prop_assert_eq!(m.capacity(), expected_cap);

        for &k in &keys {
            let expected = u64::from(k) * 3;
            prop_assert_eq!(m.get(&k), Ok(&expected));
        }
    }
}

// Property 2: len() tracks distinct live keys.
proptest! {
    #[test]
    fn prop_len_counts_distinct_keys(ops in proptest::collection::vec((any::<bool>(), 0u8..32u8), 1..150)) {
        let mut m: AssociativeArray<u8, u8> = AssociativeArray::new();
        let mut present: BTreeSet<u8> = BTreeSet::new();

        for (is_set, k) in ops {
            if is_set {
                let before = m.len();
                m.set(k, k).unwrap();
                let inserted = present.insert(k);
                prop_assert_eq!(m.len(), before + usize::from(inserted));
            } else {
                let removed = m.remove(&k);
                prop_assert_eq!(removed.is_some(), present.remove(&k));
                prop_assert_eq!(m.get(&k), Err(KeyNotFoundError));
            }
            prop_assert_eq!(m.len(), present.len());
            prop_assert_eq!(m.is_empty(), present.is_empty());
        }
    }
}

// Property 3: a clone is a snapshot.
proptest! {
    #[test]
    fn prop_clone_is_snapshot(
        initial in proptest::collection::btree_map("[a-d]{1,2}", any::<i16>(), 0..40),
        edits in proptest::collection::vec(("[a-d]{1,2}", proptest::option::of(any::<i16>())), 0..40),
    ) {
        let mut m: AssociativeArray<String, i16> = AssociativeArray::new();
        for (k, v) in &initial {
            m.set(k.clone(), *v).unwrap();
        }
        let snapshot: BTreeMap<String, i16> = initial.clone();
        let rendered = m.to_string();

        let mut c = m.clone();
        prop_assert_eq!(c.capacity(), m.capacity());
        for (k, edit) in edits {
            match edit {
                Some(v) => c.set(k, v).unwrap(),
                None => {
                    c.remove(k.as_str());
                }
            }
        }

        prop_assert_eq!(m.len(), snapshot.len());
        for (k, v) in &snapshot {
            prop_assert_eq!(m.get(k.as_str()), Ok(v));
        }
        prop_assert_eq!(m.to_string(), rendered);
    }
}
