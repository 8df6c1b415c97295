//! Shift-add string hashing and per-table slot reduction.

use core::num::NonZeroUsize;

/// Raw shift-add accumulator over the bytes of `key`.
///
/// Each byte is added to the accumulator, which is then shifted left by one.
/// Arithmetic wraps, so arbitrarily long keys are fine; bits shifted past the
/// top are lost, which only costs distribution quality for long keys.
#[inline]
pub fn shift_add(key: &[u8]) -> u64 {
    key.iter()
        .fold(0u64, |acc, &b| acc.wrapping_add(u64::from(b)) << 1)
}

/// Maps keys to slot indices in `[0, capacity)` for one table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SlotHasher {
    modulus: NonZeroUsize,
}

impl SlotHasher {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { modulus: capacity }
    }

    pub fn modulus(&self) -> usize {
        self.modulus.get()
    }

    #[inline]
    pub fn index(&self, key: &str) -> usize {
        // usize -> u64 is lossless on every supported target, and the
        // remainder is < modulus so the narrowing back cannot truncate.
        (shift_add(key.as_bytes()) % self.modulus.get() as u64) as usize
    }
}
