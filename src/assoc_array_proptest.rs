#![cfg(test)]

// Property tests for AssociativeArray kept inside the crate so they can
// check slot-level invariants that the public API does not expose.

use crate::assoc_array::AssociativeArray;
use crate::error::{KeyNotFoundError, NullKeyError};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    SetNull(i32),
    Get(usize),
    Contains(String),
    Remove(usize),
    CloneAndMutate(usize, i32),
    Render,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    let start = prop_oneof![Just(0usize), 1usize..=4, Just(16usize)];
    let pool = proptest::collection::vec("[a-z]{0,5}", 1..=24);
    (start, pool).prop_flat_map(|(start, pool)| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            1 => any::<i32>().prop_map(OpI::SetNull),
            2 => idx.clone().prop_map(OpI::Get),
            2 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
            3 => idx.clone().prop_map(OpI::Remove),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::CloneAndMutate(i, v)),
            1 => Just(OpI::Render),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (start, pool.clone(), ops))
    })
}

fn is_doubling_of(capacity: usize, start: usize) -> bool {
    let mut c = start;
    loop {
        if c == capacity {
            return true;
        }
        if c > capacity {
            return false;
        }
        c = if c == 0 { 1 } else { c * 2 };
    }
}

// Structural invariants that must hold between any two operations.
fn check_structure(
    sut: &AssociativeArray<String, i32>,
    model: &HashMap<String, i32>,
    start: usize,
) -> Result<(), TestCaseError> {
    let live: Vec<&String> = sut.entries().map(|(k, _)| k).collect();
    prop_assert_eq!(sut.len(), model.len());
    prop_assert_eq!(live.len(), sut.len(), "size must equal live slot count");
    prop_assert!(sut.len() <= sut.capacity());
    let unique: BTreeSet<&String> = live.iter().copied().collect();
    prop_assert_eq!(unique.len(), live.len(), "keys must be unique");
    prop_assert!(
        is_doubling_of(sut.capacity(), start),
        "capacity {} is not a doubling of {}",
        sut.capacity(),
        start
    );
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `set` inserts or overwrites; `get`/`contains_key` agree with the model.
// - A null key is rejected and changes nothing.
// - `remove` returns the model's value or does nothing for a missing key.
// - Capacity never shrinks and only ever doubles from the start capacity;
//   it grows only when a new key arrives at a full container.
// - A clone matches the source and mutating it leaves the source alone.
// - Rendering lists exactly the model's pairs.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((start, pool, ops) in arb_scenario()) {
        let mut sut: AssociativeArray<String, i32> = AssociativeArray::with_capacity(start);
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            let capacity_before = sut.capacity();
            match op {
                OpI::Set(i, v) => {
                    let k = pool[i].clone();
                    let is_new = !model.contains_key(&k);
                    let was_full = sut.len() == capacity_before;
                    prop_assert_eq!(sut.set(k.clone(), v), Ok(()));
                    model.insert(k, v);
                    if is_new && was_full {
                        prop_assert!(sut.capacity() > capacity_before, "full container must grow");
                    } else {
                        prop_assert_eq!(sut.capacity(), capacity_before);
                    }
                }
                OpI::SetNull(v) => {
                    prop_assert_eq!(sut.set(None::<String>, v), Err(NullKeyError));
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    match model.get(k) {
                        Some(v) => prop_assert_eq!(sut.get(k.as_str()), Ok(v)),
                        None => prop_assert_eq!(sut.get(k.as_str()), Err(KeyNotFoundError)),
                    }
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.remove(k.as_str()), model.remove(k));
                    prop_assert!(!sut.contains_key(k.as_str()));
                }
                OpI::CloneAndMutate(i, v) => {
                    let mut copy = sut.clone();
                    prop_assert_eq!(copy.capacity(), sut.capacity());
                    check_structure(&copy, &model, start)?;
                    for (k, mv) in &model {
                        prop_assert_eq!(copy.get(k.as_str()), Ok(mv));
                    }
                    let k = &pool[i];
                    copy.remove(k.as_str());
                    prop_assert_eq!(copy.set(format!("{}!", k), v), Ok(()));
                    prop_assert_eq!(sut.get(k.as_str()).ok(), model.get(k));
                    let marker = format!("{}!", k);
                    prop_assert!(!sut.contains_key(marker.as_str()), "clone edit leaked into source");
                }
                OpI::Render => {
                    let rendered = sut.to_string();
                    prop_assert!(
                        rendered.starts_with('{') && rendered.ends_with('}'),
                        "rendered {:?} is not braced",
                        rendered
                    );
                    let body = &rendered[1..rendered.len() - 1];
                    let pieces: BTreeSet<String> = if body.is_empty() {
                        BTreeSet::new()
                    } else {
                        body.split(", ").map(str::to_string).collect()
                    };
                    let expected: BTreeSet<String> =
                        model.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
                    prop_assert_eq!(pieces, expected);
                }
            }
            prop_assert!(sut.capacity() >= capacity_before, "capacity must never shrink");
            check_structure(&sut, &model, start)?;
        }
    }
}
