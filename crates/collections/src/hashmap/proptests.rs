use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use super::{
    ChainedMap, HashFunction, OpenAddressingMap, StringMap, hash_function_1, hash_function_2,
    prime::is_prime,
};

#[derive(Debug, Clone)]
enum Op {
    Put(String, u32),
    Remove(String),
    Resize(usize),
    Clear,
}

// short keys over a tiny alphabet so that collisions and overwrites are common
fn arb_key() -> impl Strategy<Value = String> {
    "[a-d]{1,3}"
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (arb_key(), any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        3 => arb_key().prop_map(Op::Remove),
        1 => (0usize..64).prop_map(Op::Resize),
        1 => Just(Op::Clear),
    ]
}

fn arb_hash_function() -> impl Strategy<Value = HashFunction> {
    prop_oneof![
        Just(hash_function_1 as HashFunction),
        Just(hash_function_2 as HashFunction),
    ]
}

/// Replays `ops` against `map` and a std `HashMap`, checking the shared
/// invariants after every step. `after_put` checks the map's load bound.
fn check_against_model<M: StringMap<u32>>(
    mut map: M,
    ops: Vec<Op>,
    after_put: fn(&M) -> bool,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, u32> = HashMap::new();

    for op in ops {
        match op {
            Op::Put(k, v) => {
                map.put(&k, v);
                model.insert(k.clone(), v);
                prop_assert!(after_put(&map), "load {} after put", map.table_load());
                prop_assert_eq!(map.get(&k), Some(&v));
                prop_assert!(map.contains_key(&k));
            }
            Op::Remove(k) => {
                map.remove(&k);
                model.remove(&k);
                prop_assert!(!map.contains_key(&k));
            }
            Op::Resize(capacity) => {
                map.resize_table(capacity);
            }
            Op::Clear => {
                let before = map.capacity();
                map.clear();
                model.clear();
                prop_assert_eq!(map.capacity(), before);
                prop_assert_eq!(map.empty_buckets(), before);
            }
        }

        prop_assert!(is_prime(map.capacity()));
        prop_assert!(map.size() <= map.capacity());
        prop_assert_eq!(map.size(), model.len());

        let pairs = map.keys_and_values();
        prop_assert_eq!(pairs.len(), map.size());
        let keys: HashSet<&str> = pairs.iter().map(|(k, _)| *k).collect();
        prop_assert_eq!(keys.len(), pairs.len(), "duplicate live keys");

        for (k, v) in &model {
            prop_assert_eq!(map.get(k), Some(v));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn open_addressing_matches_model(
        capacity in 1usize..32,
        hash in arb_hash_function(),
        ops in prop::collection::vec(arb_op(), 0..200),
    ) {
        let map: OpenAddressingMap<u32> = OpenAddressingMap::new(capacity, hash);
        // the growth check runs before inserting, so only the newest entry
        // can push the load past one half
        check_against_model(map, ops, |m| {
            (m.size() as f64 - 1.0) / (m.capacity() as f64) < 0.5
        })?;
    }

    #[test]
    fn chained_matches_model(
        capacity in 1usize..32,
        hash in arb_hash_function(),
        ops in prop::collection::vec(arb_op(), 0..200),
    ) {
        let map: ChainedMap<u32> = ChainedMap::new(capacity, hash);
        check_against_model(map, ops, |m| m.table_load() <= 1.0)?;
    }

    #[test]
    fn resize_keeps_live_entries(
        keys in prop::collection::hash_set(arb_key(), 1..40),
        new_capacity in 1usize..200,
    ) {
        let mut open = OpenAddressingMap::new(11, hash_function_2);
        let mut chained = ChainedMap::new(11, hash_function_2);
        for (i, k) in keys.iter().enumerate() {
            open.put(k, i);
            chained.put(k, i);
        }

        open.resize_table(new_capacity);
        chained.resize_table(new_capacity);
        prop_assert!((open.size() as f64 - 1.0) / (open.capacity() as f64) < 0.5);
        prop_assert!(chained.table_load() <= 1.0);

        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(open.get(k), Some(&i));
            prop_assert_eq!(chained.get(k), Some(&i));
        }
    }

    #[test]
    fn open_addressing_iter_yields_live_keys_once(
        puts in prop::collection::vec(arb_key(), 0..60),
        removes in prop::collection::vec(arb_key(), 0..30),
    ) {
        let mut map = OpenAddressingMap::new(5, hash_function_1);
        for k in &puts {
            map.put(k, ());
        }
        for k in &removes {
            map.remove(k);
        }

        let seen: Vec<&str> = map.iter().map(|e| e.key()).collect();
        let unique: HashSet<&str> = seen.iter().copied().collect();
        let expected: HashSet<&str> = puts
            .iter()
            .map(String::as_str)
            .filter(|k| !removes.iter().any(|r| r.as_str() == *k))
            .collect();

        prop_assert_eq!(seen.len(), unique.len());
        prop_assert_eq!(unique, expected);
        prop_assert!(map.iter().all(|e| !e.is_tombstone()));
    }
}
