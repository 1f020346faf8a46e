#![cfg(test)]

// Property tests for the priority queue kept inside the crate so they
// can call the internal heap checker.

use crate::heap::HeapPriorityQueue;
use proptest::prelude::*;

// The model is an unordered multiset; priority order is checked by
// comparing the smallest element and by full drains.
#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    PopTop,
    Top,
    RemoveAllOccurrences(i32),
    RemoveOdd,
    AddAll(Vec<i32>),
    Clear,
    Iterate,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        (-20..20i32).prop_map(Op::Insert),
        Just(Op::PopTop),
        Just(Op::Top),
        (-20..20i32).prop_map(Op::RemoveAllOccurrences),
        Just(Op::RemoveOdd),
        proptest::collection::vec(-20..20i32, 0..10).prop_map(Op::AddAll),
        Just(Op::Clear),
        Just(Op::Iterate),
    ];
    proptest::collection::vec(op, 1..80)
}

fn model_min(model: &[i32]) -> Option<i32> {
    model.iter().copied().min()
}

fn remove_one(model: &mut Vec<i32>, value: i32) {
    let pos = model.iter().position(|&v| v == value).expect("in model");
    model.swap_remove(pos);
}

// Property: state-machine equivalence against a plain multiset, with the
// heap invariant re-checked after every operation. The default value is
// pinned to a value outside the op range so empty-pop results are
// unambiguous.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_heap_state_machine(ops in arb_ops()) {
        let mut sut: HeapPriorityQueue<i32> = HeapPriorityQueue::new();
        sut.set_default_value(i32::MIN);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    sut.insert(v);
                    model.push(v);
                }
                Op::PopTop => {
                    let got = sut.pop_top();
                    match model_min(&model) {
                        Some(min) => {
                            prop_assert_eq!(got, min);
                            remove_one(&mut model, min);
                        }
                        None => prop_assert_eq!(got, i32::MIN),
                    }
                }
                Op::Top => {
                    let got = sut.top();
                    prop_assert_eq!(got, model_min(&model).unwrap_or(i32::MIN));
                    // Peeking must not disturb the queue.
                    prop_assert_eq!(sut.len(), model.len());
                }
                Op::RemoveAllOccurrences(v) => {
                    let before = model.len();
                    model.retain(|&e| e != v);
                    let removed = sut.remove_all_occurrences(&v);
                    prop_assert_eq!(removed, before - model.len());
                }
                Op::RemoveOdd => {
                    let before = model.len();
                    model.retain(|&e| e % 2 == 0);
                    let removed = sut.remove_all(|&e| e % 2 != 0);
                    prop_assert_eq!(removed, before - model.len());
                }
                Op::AddAll(vs) => {
                    let n = vs.len();
                    model.extend_from_slice(&vs);
                    prop_assert_eq!(sut.add_all(vs), n);
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
                Op::Iterate => {
                    let mut seen: Vec<i32> = sut.iter().copied().collect();
                    let mut expected = model.clone();
                    seen.sort_unstable();
                    expected.sort_unstable();
                    prop_assert_eq!(seen, expected);
                }
            }

            // Post-conditions after each op.
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert!(sut.is_min_heap());
            match model_min(&model) {
                Some(min) => prop_assert_eq!(sut.peek().copied(), Some(min)),
                None => prop_assert_eq!(sut.peek(), None),
            }
        }

        // Final drain is the model in non-decreasing order.
        let mut expected = model;
        expected.sort_unstable();
        let mut drained = Vec::with_capacity(expected.len());
        while !sut.is_empty() {
            drained.push(sut.pop_top());
        }
        prop_assert_eq!(drained, expected);
    }
}
