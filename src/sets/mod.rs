//! Open-addressing hash sets with linear probing.
//!
//! Three storage layouts, chosen per key type at compile time:
//!
//! * [`SentinelHashSet`] — integer-like keys, single array, the key
//!   type's zero reserved as the empty marker;
//! * [`BitmapHashSet`] — float keys, parallel allocation bitmap,
//!   bit-pattern hashing and equality;
//! * [`OpenHashSet`] — generic keys, Robin-Hood reordering with a
//!   cached-home side array.

mod bitmap;
mod robin_hood;
mod sentinel;

pub use bitmap::{BitmapHashSet, Iter as BitmapIter};
pub use robin_hood::{Iter as OpenIter, OpenHashSet};
pub use sentinel::{Iter as SentinelIter, SentinelHashSet};

pub type ByteHashSet = SentinelHashSet<i8>;
pub type ShortHashSet = SentinelHashSet<i16>;
pub type CharHashSet = SentinelHashSet<char>;
pub type IntHashSet = SentinelHashSet<i32>;
pub type LongHashSet = SentinelHashSet<i64>;

pub type FloatHashSet = BitmapHashSet<f32>;
pub type DoubleHashSet = BitmapHashSet<f64>;
