#![cfg(test)]

// Property tests for the set layouts kept inside the crate so they can
// call the internal invariant checkers.

use crate::sets::{IntHashSet, OpenHashSet};
use proptest::prelude::*;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hasher};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Add(usize),
    Remove(usize),
    Contains(usize),
    Get(usize),
    RemoveAllMultiplesOf(i32),
    Clear,
    Iterate,
    ToVecRoundTrip,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<i32>, Vec<Op>)> {
    // Key 0 is always in the pool: the sentinel layout routes it through
    // its out-of-band path.
    proptest::collection::vec(-50..50i32, 1..=12)
        .prop_map(|mut pool| {
            pool.push(0);
            pool
        })
        .prop_flat_map(|pool| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                idx.clone().prop_map(Op::Add),
                idx.clone().prop_map(Op::Remove),
                idx.clone().prop_map(Op::Contains),
                idx.clone().prop_map(Op::Get),
                (2..5i32).prop_map(Op::RemoveAllMultiplesOf),
                Just(Op::Clear),
                Just(Op::Iterate),
                Just(Op::ToVecRoundTrip),
            ];
            proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
        })
}

// Property: state-machine equivalence of the sentinel layout against
// std::collections::HashSet across random op sequences. After every op:
// len parity, contains parity for the whole pool, and the internal layout
// invariants (power-of-two table, probe reachability, one empty slot).
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_sentinel_state_machine((pool, ops) in arb_scenario()) {
        let mut sut = IntHashSet::new();
        let mut model: HashSet<i32> = HashSet::new();

        for op in ops {
            match op {
                Op::Add(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.add(k), model.insert(k));
                }
                Op::Remove(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(&k));
                }
                Op::Contains(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.contains(k), model.contains(&k));
                }
                Op::Get(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.get(k), model.get(&k).copied());
                }
                Op::RemoveAllMultiplesOf(m) => {
                    let before = model.len();
                    model.retain(|k| k % m != 0);
                    let removed = sut.remove_all(|k| k % m == 0);
                    prop_assert_eq!(removed, before - model.len());
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
                Op::Iterate => {
                    let seen: HashSet<i32> = sut.iter().collect();
                    prop_assert_eq!(seen.len(), sut.len());
                    prop_assert_eq!(&seen, &model);
                }
                Op::ToVecRoundTrip => {
                    let rebuilt: IntHashSet = sut.to_vec().into_iter().collect();
                    prop_assert!(rebuilt == sut);
                }
            }

            // Post-conditions after each op.
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            for &k in &pool {
                prop_assert_eq!(sut.contains(k), model.contains(&k));
            }
            sut.check_invariants();
        }
    }
}

// Worst-case hasher: every key lands on one mixed slot, so the
// Robin-Hood path degenerates to one long chain and the reorder/shift
// machinery carries all the weight.
#[derive(Clone, Default)]
struct ConstState;

struct ConstHasher;

impl BuildHasher for ConstState {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> ConstHasher {
        ConstHasher
    }
}

impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

fn run_generic_machine<S: BuildHasher + Clone>(
    sut: &mut OpenHashSet<String, S>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashSet<String> = HashSet::new();

    for op in ops {
        match op {
            Op::Add(i) => {
                let k = pool[i].clone();
                prop_assert_eq!(sut.add(k.clone()), model.insert(k));
            }
            Op::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k.as_str()).is_some(), model.remove(k));
            }
            Op::Contains(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.contains(k.as_str()), model.contains(k));
            }
            Op::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k.as_str()), model.get(k));
            }
            Op::RemoveAllMultiplesOf(m) => {
                let before = model.len();
                model.retain(|k| k.len() % (m as usize) != 0);
                let removed = sut.remove_all(|k| k.len() % (m as usize) == 0);
                prop_assert_eq!(removed, before - model.len());
            }
            Op::Clear => {
                sut.clear();
                model.clear();
            }
            Op::Iterate => {
                let seen: HashSet<String> = sut.iter().cloned().collect();
                prop_assert_eq!(seen.len(), sut.len());
                prop_assert_eq!(&seen, &model);
            }
            Op::ToVecRoundTrip => {
                let mut rebuilt: OpenHashSet<String, S> =
                    OpenHashSet::with_capacity_load_factor_and_hasher(
                        0,
                        crate::sizing::DEFAULT_LOAD_FACTOR,
                        sut.hasher().clone(),
                    );
                rebuilt.add_all(sut.to_vec());
                prop_assert!(&rebuilt == &*sut);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        for k in pool {
            prop_assert_eq!(sut.contains(k.as_str()), model.contains(k));
        }
        sut.check_invariants();
    }
    Ok(())
}

fn arb_string_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-e]{0,6}", 1..=10).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            idx.clone().prop_map(Op::Add),
            idx.clone().prop_map(Op::Remove),
            idx.clone().prop_map(Op::Contains),
            idx.clone().prop_map(Op::Get),
            (2..5i32).prop_map(Op::RemoveAllMultiplesOf),
            Just(Op::Clear),
            Just(Op::Iterate),
            Just(Op::ToVecRoundTrip),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: the Robin-Hood layout tracks the model under the default
// hasher.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_robin_hood_state_machine((pool, ops) in arb_string_scenario()) {
        let mut sut: OpenHashSet<String> = OpenHashSet::new();
        run_generic_machine(&mut sut, &pool, ops)?;
    }
}

// Property: same machine under total hash collapse. Every probe walks
// one chain; shift-back and reordering must still preserve membership.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_robin_hood_with_collisions((pool, ops) in arb_string_scenario()) {
        let mut sut: OpenHashSet<String, ConstState> = OpenHashSet::with_hasher(ConstState);
        run_generic_machine(&mut sut, &pool, ops)?;
    }
}
