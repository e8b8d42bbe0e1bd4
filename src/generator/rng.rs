//! Seeded randomness source
//!
//! All variant-to-variant diversity flows through a [`RandomSource`] value
//! passed explicitly to the selector and composer. [`SeededRng`] is a
//! SplitMix64 generator: integer arithmetic only, so a given seed yields the
//! same stream on every platform.

use crate::error::{Result, ValidationError};

/// Multiplier separating per-variant streams derived from one base seed.
/// Must differ from the SplitMix64 increment, or seed `s + 1` replays seed
/// `s` one draw later.
const VARIANT_STREAM_MULTIPLIER: u64 = 0xD1B5_4A32_D192_ED03;

/// Source of pseudo-random choices
pub trait RandomSource {
    /// Next raw 64-bit value
    fn next_u64(&mut self) -> u64;

    /// Uniform float in `[0, 1)` built from the top 53 bits
    fn next_float(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in `0..len`; `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_float() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// Pick one element of `items`
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return Err(ValidationError::EmptySequence.into());
        }
        let index = self.next_index(items.len());
        Ok(&items[index])
    }

    /// Fisher-Yates shuffle in place
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

/// SplitMix64 generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Independent stream for variant `index` of a request seeded with `base`
    pub fn for_variant(base: u64, index: usize) -> Self {
        Self::new(
            base.wrapping_mul(VARIANT_STREAM_MULTIPLIER)
                .wrapping_add(index as u64),
        )
    }

    /// Base seed for an unseeded request, drawn from the OS-seeded thread RNG
    pub fn entropy_seed() -> u64 {
        rand::random::<u64>()
    }
}

impl RandomSource for SeededRng {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}
