//! Deterministic random source for metric sampling.
//!
//! xorshift64* is plenty for picking dashboard numbers and keeps output
//! reproducible under a fixed seed. Not for anything security-sensitive.

use std::ops::Range;

use jiff::Timestamp;

/// Source of pseudo-random numbers for the presentation mapper.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Value in `[range.start, range.end)`.
    ///
    /// # Panics
    /// Panics if the range is empty.
    fn gen_range(&mut self, range: Range<u32>) -> u32 {
        assert!(range.start < range.end, "empty range {range:?}");
        let span = u64::from(range.end - range.start);
        #[allow(clippy::cast_possible_truncation)]
        let offset = (self.next_u64() % span) as u32;
        range.start + offset
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// A zero seed is remapped to a non-zero constant to avoid the xorshift
    /// lockup state.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }
}

/// Seed derived from the current time. Passing it back to
/// [`XorShift64::new`] reproduces the same sequence.
pub fn time_seed() -> u64 {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let nanos = Timestamp::now().as_nanosecond() as u64;
    splitmix64(nanos)
}

impl RandomSource for XorShift64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

/// SplitMix64 finalizer. Spreads clock readings that differ in only a few
/// low bits across the whole seed.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}
