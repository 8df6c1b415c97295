// ChainedTable property tests through the public API.
//
// Property 1: insert-then-search visibility.
//  - Any batch of key/value pairs is retrievable afterwards with the last
//    value written for each key, whatever the capacity.
//
// Property 2: delete removes exactly one key.
//  - After deleting a present key, search for it is None and every other
//    key still returns its value; len drops by one.
use proptest::prelude::*;
use chained_table::ChainedTable;
use std::collections::HashMap;

fn arb_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[a-z0-9]{0,5}", "[A-Z]{1,4}"), 1..40)
}

proptest! {
    #[test]
    fn prop_insert_then_search(capacity in 1usize..=64, pairs in arb_pairs()) {
        let mut t = ChainedTable::with_capacity(capacity).unwrap();
        let mut model = HashMap::new();
        for (k, v) in &pairs {
            let prev = t.insert(k.as_str(), v.as_str()).unwrap();
            prop_assert_eq!(prev, model.insert(k.clone(), v.clone()));
            prop_assert_eq!(t.search(k), Some(v.as_str()));
        }
        for (k, v) in &model {
            prop_assert_eq!(t.search(k), Some(v.as_str()));
        }
        prop_assert_eq!(t.len(), model.len());
        prop_assert!(t.count() <= t.capacity());
    }

    #[test]
    fn prop_delete_removes_one_key(capacity in 1usize..=16, pairs in arb_pairs(), pick in any::<prop::sample::Index>()) {
        let mut t = ChainedTable::with_capacity(capacity).unwrap();
        let mut model = HashMap::new();
        for (k, v) in pairs {
            t.insert(k.as_str(), v.as_str()).unwrap();
            model.insert(k, v);
        }
        let keys: Vec<String> = model.keys().cloned().collect();
        let gone = pick.get(&keys).clone();

        let removed = t.delete(&gone);
        prop_assert_eq!(removed, model.remove(&gone));
        prop_assert!(t.search(&gone).is_none());
        prop_assert_eq!(t.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(t.search(k), Some(v.as_str()));
        }
    }
}
