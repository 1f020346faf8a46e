// End-to-end scenarios for the binary-heap priority queue.

use core::cmp::Ordering;
use prim_collections::{Comparator, HeapPriorityQueue};

fn drain<K, C>(heap: &mut HeapPriorityQueue<K, C>) -> Vec<K>
where
    K: Default + Clone,
    C: Comparator<K>,
{
    let mut out = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        out.push(heap.pop_top());
    }
    out
}

/// Sorted drain: duplicates come out adjacent, sequence non-decreasing.
#[test]
fn sorted_drain() {
    let mut heap = HeapPriorityQueue::new();
    for v in [100, 4, 7, 1, 23, 1, 4] {
        heap.insert(v);
    }
    assert_eq!(drain(&mut heap), vec![1, 1, 4, 4, 7, 23, 100]);
}

/// Refresh after bulk delete: one pass restores the heap.
#[test]
fn refresh_after_bulk_delete() {
    let mut heap: HeapPriorityQueue<i32> = (1..=16).collect();
    let removed = heap.remove_all(|&v| v % 2 == 0);
    assert_eq!(removed, 8);
    assert_eq!(heap.len(), 8);
    assert_eq!(drain(&mut heap), vec![1, 3, 5, 7, 9, 11, 13, 15]);
}

/// Building by N inserts and by one bulk add_all drains identically.
#[test]
fn insert_and_bulk_build_agree() {
    let values: Vec<i64> = (0..200).map(|i| (i * 37) % 101).collect();

    let mut incremental = HeapPriorityQueue::new();
    for &v in &values {
        incremental.insert(v);
    }
    let mut bulk = HeapPriorityQueue::new();
    bulk.add_all(values);

    assert_eq!(drain(&mut incremental), drain(&mut bulk));
}

#[test]
fn empty_queue_yields_default_value() {
    let mut heap: HeapPriorityQueue<i32> = HeapPriorityQueue::new();
    assert_eq!(heap.top(), 0);
    assert_eq!(heap.pop_top(), 0);

    heap.set_default_value(-99);
    assert_eq!(heap.top(), -99);
    assert_eq!(heap.pop_top(), -99);
    assert!(heap.is_empty());
}

#[test]
fn contains_is_a_linear_scan() {
    let mut heap = HeapPriorityQueue::new();
    heap.add_all([10, 20, 30]);
    assert!(heap.contains(&20));
    assert!(!heap.contains(&25));
    heap.remove_all_occurrences(&20);
    assert!(!heap.contains(&20));
}

/// Comparator-equality pin: queues compare comparators by value. Two
/// `NaturalOrder` queues with identical buffers are equal; any buffer
/// divergence (even a permutation of equal multisets) is unequal.
#[test]
fn equality_semantics() {
    let mut a = HeapPriorityQueue::new();
    let mut b = HeapPriorityQueue::new();
    for v in [3, 1, 2] {
        a.insert(v);
        b.insert(v);
    }
    assert_eq!(a, b);

    // Equal multiset, different build order: equal only if the raw
    // buffers happen to coincide.
    let mut c = HeapPriorityQueue::new();
    for v in [2, 3, 1] {
        c.insert(v);
    }
    assert_eq!(a == c, a.to_vec() == c.to_vec());

    #[derive(Clone, PartialEq)]
    struct ByMagnitude;
    impl Comparator<i32> for ByMagnitude {
        fn compare(&self, x: &i32, y: &i32) -> Ordering {
            x.abs().cmp(&y.abs())
        }
    }

    let mut m1 = HeapPriorityQueue::with_comparator(ByMagnitude);
    let mut m2 = HeapPriorityQueue::with_comparator(ByMagnitude);
    for v in [-5, 2, 9] {
        m1.insert(v);
        m2.insert(v);
    }
    assert_eq!(m1, m2);
    assert_eq!(drain(&mut m1), vec![2, -5, 9]);
}

#[test]
fn clone_round_trip() {
    let mut a: HeapPriorityQueue<i32> = [9, 1, 8, 2, 7].into_iter().collect();
    let mut b = a.clone();
    assert_eq!(a, b);
    assert_eq!(drain(&mut a), drain(&mut b));
}

#[test]
fn large_randomish_workload_sorts() {
    let mut heap = HeapPriorityQueue::with_capacity(4);
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut inserted = Vec::new();
    for _ in 0..5_000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let v = (state % 1000) as i32;
        heap.insert(v);
        inserted.push(v);
    }
    inserted.sort_unstable();
    assert_eq!(drain(&mut heap), inserted);
}
