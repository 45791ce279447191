#![cfg(test)]

// Property tests for ChainHashMap kept inside the crate so they can check
// bucket-level invariants on private fields.

use crate::chain::Chain;
use crate::primes::is_prime;
use crate::{ChainHashMap, LoadCheck, LookupError, TableConfig};
use core::hash::BuildHasher;
use proptest::prelude::*;
use std::collections::HashMap;
use std::hash::Hasher;

// Pool-indexed operations: indices shrink to earlier keys, the pool shrinks,
// and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Retrieve(usize),
    Erase(usize),
    At(usize, i32),
    Index(usize, i32),
    Count(usize),
    Clear,
    SetMaxLoad(f32),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Retrieve),
            2 => idx.clone().prop_map(OpI::Erase),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::At(i, d)),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Index(i, d)),
            1 => idx.clone().prop_map(OpI::Count),
            1 => Just(OpI::Clear),
            1 => (0.25f32..4.0f32).prop_map(OpI::SetMaxLoad),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_scenario<S>(
    mut sut: ChainHashMap<String, i32, S>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    S: BuildHasher,
{
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        let capacity_before = sut.capacity();
        match op {
            OpI::Insert(i, v) => {
                let k = pool[i].clone();
                let fresh = !model.contains_key(&k);
                prop_assert_eq!(sut.insert(k.clone(), v), fresh);
                model.insert(k, v);
                if !fresh {
                    prop_assert_eq!(sut.capacity(), capacity_before, "overwrite must not grow");
                }
            }
            OpI::Retrieve(i) => {
                let mut out = i32::MIN;
                let found = sut.retrieve(&pool[i], &mut out);
                match model.get(&pool[i]) {
                    Some(&v) => {
                        prop_assert!(found);
                        prop_assert_eq!(out, v);
                    }
                    None => {
                        prop_assert!(!found);
                        prop_assert_eq!(out, i32::MIN, "miss must leave out untouched");
                    }
                }
            }
            OpI::Erase(i) => {
                let erased = sut.erase(&pool[i]);
                prop_assert_eq!(erased, model.remove(&pool[i]).is_some());
                prop_assert_eq!(sut.capacity(), capacity_before, "erase never shrinks");
            }
            OpI::At(i, d) => match sut.at(&pool[i]) {
                Ok(v) => {
                    *v = v.wrapping_add(d);
                    let mv = model.get_mut(&pool[i]).expect("present in model");
                    *mv = mv.wrapping_add(d);
                }
                Err(LookupError::KeyNotFound) => {
                    prop_assert!(!model.contains_key(&pool[i]));
                }
            },
            OpI::Index(i, d) => {
                let v = sut.get_or_insert_default(pool[i].clone());
                *v = v.wrapping_add(d);
                let mv = model.entry(pool[i].clone()).or_default();
                *mv = mv.wrapping_add(d);
            }
            OpI::Count(i) => {
                let c = sut.count(&pool[i]);
                if model.contains_key(&pool[i]) {
                    prop_assert!(c >= 1);
                }
                prop_assert!(c <= model.len());
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), capacity_before);
            }
            OpI::SetMaxLoad(f) => {
                sut.set_max_load_factor(f);
                prop_assert_eq!(sut.max_load_factor(), f);
            }
        }

        // Post-conditions after each op
        // 1) Size parity and chain totals agree with the entry count
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        let total: usize = sut.buckets.iter().map(Chain::len).sum();
        prop_assert_eq!(total, sut.len());
        // 2) Capacity stays prime and only ever grows
        prop_assert!(is_prime(sut.capacity()));
        prop_assert!(sut.capacity() >= capacity_before);
        // 3) Every model mapping is reachable through the current capacity
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
        }
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - insert returns true exactly for new keys; overwrites keep len and capacity.
// - retrieve/at/get_or_insert_default agree with the model.
// - erase and clear never shrink; capacity stays prime after every growth.
// - sum of chain lengths == len(); every key is found after each rehash.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), initial in 0usize..16) {
        let sut: ChainHashMap<String, i32> = ChainHashMap::with_capacity(initial);
        run_scenario(sut, &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_truncating((pool, ops) in arb_scenario(), initial in 0usize..16) {
        let cfg = TableConfig::default()
            .initial_capacity(initial)
            .load_check(LoadCheck::Truncating);
        let sut: ChainHashMap<String, i32> = ChainHashMap::with_config(cfg);
        run_scenario(sut, &pool, ops)?;
    }
}

// Collision variant using a constant hasher to stress equality resolution.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

// Property: same state-machine invariants under worst-case collisions, where
// every key shares bucket 0 and `count` equals `len` for any key.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let sut: ChainHashMap<String, i32, ConstBuildHasher> =
            ChainHashMap::with_hasher(ConstBuildHasher);
        run_scenario(sut, &pool, ops)?;
    }

    #[test]
    fn prop_collision_count_is_len(keys in proptest::collection::vec("[a-z]{1,4}", 0..40)) {
        let mut sut: ChainHashMap<String, usize, ConstBuildHasher> =
            ChainHashMap::with_hasher(ConstBuildHasher);
        for (i, k) in keys.iter().enumerate() {
            sut.insert(k.clone(), i);
        }
        prop_assert_eq!(sut.count(&"probe".to_string()), sut.len());
    }
}
