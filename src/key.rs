//! Key traits for the primitive set layouts.
//!
//! These traits are the specialization seam. Each primitive key type
//! declares its empty marker and its avalanche mix, and the set storage
//! monomorphizes over them; the impls are stamped by macro, one per
//! supported primitive. There is deliberately no `bool` key: a boolean
//! set degenerates to two flags and is not worth a hash table.

use crate::mix::{mix32, mix64};

/// Integer-like key usable with the single-array sentinel layout.
///
/// `DEFAULT` is the reserved in-array marker for an empty slot. The
/// default-valued key itself is still a legal member; sets track it out
/// of band, so `DEFAULT` never appears in the backing array as a key.
pub trait SentinelKey: Copy + Eq {
    const DEFAULT: Self;

    /// Full-width avalanche mix; callers mask to table size.
    fn mix(self) -> usize;
}

/// Float key usable with the bitmap layout.
///
/// Keys hash and compare by raw bit pattern: `+0.0` and `-0.0` are
/// distinct members, and a NaN equals itself (same payload).
pub trait BitsKey: Copy {
    const DEFAULT: Self;

    /// Full-width avalanche mix over the raw bits.
    fn mix(self) -> usize;

    /// Bit-pattern equality.
    fn bits_eq(self, other: Self) -> bool;
}

macro_rules! sentinel_key_via_mix32 {
    ($($t:ty),+) => {$(
        impl SentinelKey for $t {
            const DEFAULT: Self = 0;

            #[inline]
            fn mix(self) -> usize {
                mix32(self as i32) as u32 as usize
            }
        }
    )+};
}

macro_rules! sentinel_key_via_mix64 {
    ($($t:ty),+) => {$(
        impl SentinelKey for $t {
            const DEFAULT: Self = 0;

            #[inline]
            fn mix(self) -> usize {
                mix64(self as i64) as u64 as usize
            }
        }
    )+};
}

sentinel_key_via_mix32!(i8, i16, i32, u8, u16, u32);
sentinel_key_via_mix64!(i64, u64, isize, usize);

impl SentinelKey for char {
    const DEFAULT: Self = '\0';

    #[inline]
    fn mix(self) -> usize {
        mix32(self as u32 as i32) as u32 as usize
    }
}

impl BitsKey for f32 {
    const DEFAULT: Self = 0.0;

    #[inline]
    fn mix(self) -> usize {
        mix32(self.to_bits() as i32) as u32 as usize
    }

    #[inline]
    fn bits_eq(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl BitsKey for f64 {
    const DEFAULT: Self = 0.0;

    #[inline]
    fn mix(self) -> usize {
        mix64(self.to_bits() as i64) as u64 as usize
    }

    #[inline]
    fn bits_eq(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}
