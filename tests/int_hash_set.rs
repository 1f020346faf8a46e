// End-to-end scenarios for the sentinel-layout integer set.

use prim_collections::{IntHashSet, LongHashSet, SentinelHashSet};

/// Grow cycle: from a tiny table, a thousand sequential inserts settle on
/// the smallest power of two whose resize threshold covers them.
#[test]
fn grow_cycle_settles_on_expected_capacity() {
    let mut set = IntHashSet::with_capacity_and_load_factor(4, 0.75);
    for k in 0..1000 {
        assert!(set.add(k));
    }
    assert_eq!(set.len(), 1000);
    // floor(2048 * 0.75) - 2 = 1534 >= 1000; 1024 would give 766.
    assert_eq!(set.capacity(), 2048);

    for k in 0..1000 {
        assert!(set.contains(k), "missing {k}");
    }
    for k in 1000..2000 {
        assert!(!set.contains(k), "phantom {k}");
    }
}

/// Sentinel-key handling: the zero key is a first-class member.
#[test]
fn sentinel_key_handling() {
    let mut set = IntHashSet::new();
    assert!(set.add(5));
    assert!(set.add(0));
    assert!(set.add(7));
    assert!(!set.add(0));
    assert_eq!(set.len(), 3);
    assert!(set.contains(0));

    assert!(set.remove(0));
    assert_eq!(set.len(), 2);
    assert!(!set.contains(0));
    assert!(set.contains(5));
    assert!(set.contains(7));
}

/// Rebuilding a set from its exported keys reproduces it exactly.
#[test]
fn to_vec_round_trip() {
    let mut set = IntHashSet::new();
    set.add_all([0, -7, 19, 1000, 3, -2]);

    let rebuilt: IntHashSet = set.to_vec().into_iter().collect();
    assert_eq!(rebuilt, set);
    assert_eq!(rebuilt.len(), set.len());
}

#[test]
fn clone_then_diverge() {
    let mut a = IntHashSet::new();
    a.add_all(0..32);
    let mut b = a.clone();
    assert_eq!(a, b);

    b.remove(0);
    b.add(100);
    assert!(a.contains(0));
    assert!(!a.contains(100));
    assert_ne!(a, b);
}

#[test]
fn add_all_counts_only_new_keys() {
    let mut set = IntHashSet::new();
    assert_eq!(set.add_all([1, 2, 3]), 3);
    assert_eq!(set.add_all([2, 3, 4, 0, 0]), 2);
    assert_eq!(set.len(), 5);
}

/// Interleaved add/remove churn around the resize threshold.
#[test]
fn churn_across_resizes() {
    let mut set = LongHashSet::with_capacity(4);
    for round in 0i64..20 {
        for k in 0..100 {
            set.add(round * 1_000 + k);
        }
        let removed = set.remove_all(|k| k % 2 == 0);
        assert_eq!(removed, 50);
    }
    assert_eq!(set.len(), 20 * 50);
    assert!(set.contains(1));
    assert!(!set.contains(2));
}

#[test]
fn unsigned_and_narrow_variants() {
    let mut bytes: SentinelHashSet<i8> = SentinelHashSet::new();
    for k in i8::MIN..=i8::MAX {
        assert!(bytes.add(k));
    }
    assert_eq!(bytes.len(), 256);

    let mut words: SentinelHashSet<u64> = SentinelHashSet::new();
    assert!(words.add(u64::MAX));
    assert!(words.add(0));
    assert!(words.contains(u64::MAX));
    assert!(words.remove(0));
    assert_eq!(words.len(), 1);
}
