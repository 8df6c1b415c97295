#![cfg(test)]

// Property tests for ChainedTable kept inside the crate so they can check
// the structural invariants through private state.

use crate::table::ChainedTable;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations so shrinking moves toward earlier keys, smaller
// pools, and shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, String),
    Delete(usize),
    Search(usize),
    Contains(String),
    Iterate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (1usize..=6, proptest::collection::vec("[a-zA-Z0-9]{0,4}", 1..=10)).prop_flat_map(
        |(capacity, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                4 => (idx.clone(), "[a-z]{0,3}").prop_map(|(i, v)| Op::Insert(i, v)),
                3 => idx.clone().prop_map(Op::Delete),
                2 => idx.clone().prop_map(Op::Search),
                1 => "[a-zA-Z0-9]{0,4}".prop_map(Op::Contains),
                1 => Just(Op::Iterate),
                1 => Just(Op::Clear),
            ];
            proptest::collection::vec(op, 1..80).prop_map(move |ops| (capacity, pool.clone(), ops))
        },
    )
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences on tiny tables
// (capacity 1..=6) where most keys collide:
// - insert returns the previous value exactly when the model had one.
// - search / contains_key agree with the model, including chained keys.
// - delete returns the model's value and leaves other keys reachable.
// - count never exceeds capacity and equals primary occupancy; every entry
//   sits at the slot its key hashes to; chains hold no duplicate keys.
// - deleting a primary whose slot has a chain keeps count unchanged.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario()) {
        let mut sut = ChainedTable::with_capacity(capacity).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let k = &pool[i];
                    let prev = sut.insert(k.as_str(), v.as_str());
                    prop_assert_eq!(prev, Ok(model.insert(k.clone(), v)));
                }
                Op::Delete(i) => {
                    let k = &pool[i];
                    let slot = sut.slot_index(k);
                    let count_before = sut.count();
                    let had_chain = sut.chain_len(slot) > 0;
                    let was_primary = sut.is_primary(k);

                    let removed = sut.delete(k);
                    prop_assert_eq!(&removed, &model.remove(k));
                    prop_assert!(sut.search(k).is_none());

                    if removed.is_some() && was_primary && !had_chain {
                        prop_assert_eq!(sut.count(), count_before - 1);
                    } else {
                        prop_assert_eq!(sut.count(), count_before);
                    }
                }
                Op::Search(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.search(k), model.get(k).map(String::as_str));
                }
                Op::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
                }
                Op::Iterate => {
                    let s_pairs: BTreeSet<(String, String)> = sut
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect();
                    let m_pairs: BTreeSet<(String, String)> = model.clone().into_iter().collect();
                    prop_assert_eq!(s_pairs, m_pairs);
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }

            sut.check_invariants();
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert!(sut.count() <= capacity);
        }
    }
}

// Property: any set of distinct keys, inserted in any order, is fully
// retrievable and deletable one by one on a single-slot table, where
// every key after the first lives in the chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_single_slot_chain(keys in proptest::collection::btree_set("[a-z]{1,6}", 1..20)) {
        let mut sut = ChainedTable::with_capacity(1).unwrap();
        for k in &keys {
            prop_assert_eq!(sut.insert(k.as_str(), k.to_uppercase()), Ok(None));
        }
        prop_assert_eq!(sut.count(), 1);
        prop_assert_eq!(sut.chain_len(0), keys.len() - 1);
        for k in &keys {
            let upper = k.to_uppercase();
            prop_assert_eq!(sut.search(k), Some(upper.as_str()));
        }

        let mut remaining = keys.len();
        for k in &keys {
            prop_assert!(sut.delete(k).is_some());
            remaining -= 1;
            prop_assert_eq!(sut.len(), remaining);
            prop_assert_eq!(sut.count(), usize::from(remaining > 0));
            sut.check_invariants();
        }
    }
}
