//! Avalanche mixers used to derive table slots from keys.
//!
//! Two finalization-style mix functions: the 32-bit MurmurHash3 finalizer
//! and David Stafford's variant 9 of the 64-bit mix (same shape as the
//! MurmurHash3 64-bit finalization step, different shifts and constants).
//! Open-addressing tables here are power-of-two sized and keep only the low
//! bits of the hash, so keys must be mixed first to push entropy into the
//! low bits.

const MUL1_INT: i32 = 0x85eb_ca6b_u32 as i32;
const MUL2_INT: i32 = 0xc2b2_ae35_u32 as i32;

const MUL1_LONG: i64 = 0x4cd6_944c_5cc2_0b6d_u64 as i64;
const MUL2_LONG: i64 = 0xfc12_c5b1_9d32_59e9_u64 as i64;

/// `mix32(0)`.
pub const HASH_0: i32 = 0;

/// `mix32(1)`.
pub const HASH_1: i32 = 1_364_076_727;

#[inline]
fn shr32(k: i32, n: u32) -> i32 {
    ((k as u32) >> n) as i32
}

#[inline]
fn shr64(z: i64, n: u32) -> i64 {
    ((z as u64) >> n) as i64
}

/// Mix a 4-byte value (MurmurHash3 finalization step).
#[inline]
pub fn mix32(mut k: i32) -> i32 {
    k = (k ^ shr32(k, 16)).wrapping_mul(MUL1_INT);
    k = (k ^ shr32(k, 13)).wrapping_mul(MUL2_INT);
    k ^ shr32(k, 16)
}

/// Mix an 8-byte value (Stafford variant 9).
#[inline]
pub fn mix64(mut z: i64) -> i64 {
    z = (z ^ shr64(z, 32)).wrapping_mul(MUL1_LONG);
    z = (z ^ shr64(z, 29)).wrapping_mul(MUL2_LONG);
    z ^ shr64(z, 32)
}

/// Mix a 4-byte value perturbed by a seed.
#[inline]
pub fn mix32_seeded(k: i32, seed: i32) -> i32 {
    mix32(k ^ seed)
}

/// Mix an 8-byte value perturbed by a seed.
#[inline]
pub fn mix64_seeded(z: i64, seed: i64) -> i64 {
    mix64(z ^ seed)
}

/// Mix a float by its raw bit pattern. `+0.0` and `-0.0` mix differently.
#[inline]
pub fn mix_f32(x: f32) -> i32 {
    mix32(x.to_bits() as i32)
}

/// Mix a double by its raw bit pattern. `+0.0` and `-0.0` mix differently.
#[inline]
pub fn mix_f64(x: f64) -> i64 {
    mix64(x.to_bits() as i64)
}
