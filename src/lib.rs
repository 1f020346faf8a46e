//! Primitive-specialized collections on open-addressing storage.
//!
//! Two containers share a small substrate of avalanche mixers and sizing
//! policies: hash sets with linear probing (three compile-time storage
//! layouts — sentinel single-array for integers, allocation bitmap for
//! floats, Robin-Hood with cached homes for generic keys) and a
//! binary-heap min-priority queue with a pluggable comparator. A keyed
//! quicksort rounds out the toolkit.
//!
//! Everything is single-owner: no internal synchronization, no
//! allocation per lookup, no boxing of primitive keys.

pub mod heap;
pub mod key;
pub mod mix;
mod reentrancy;
pub mod sets;
pub mod sizing;
pub mod sort;

mod heap_proptest;
mod set_proptest;

pub use heap::{Comparator, HeapPriorityQueue, NaturalOrder};
pub use key::{BitsKey, SentinelKey};
pub use sets::{
    BitmapHashSet, ByteHashSet, CharHashSet, DoubleHashSet, FloatHashSet, IntHashSet, LongHashSet,
    OpenHashSet, SentinelHashSet, ShortHashSet,
};
pub use sizing::BoundedProportionalResizer;
pub use sort::{quicksort, quicksort_by, sort_bools};
