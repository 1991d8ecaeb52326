//! Fast PRNG for the incremental sampling path — SplitMix64 specialized to
//! unit-interval draws.
//!
//! SplitMix64 has a single u64 state word, so a [`crate::sampler::SampleAccumulator`]
//! stays small and the per-point cost is a handful of cycles. Each `f64` in
//! `[0,1)` comes from the top 53 bits of one output word, giving the full
//! double-precision mantissa with no modulo bias.

/// SplitMix64 PRNG — single u64 state, excellent statistical quality.
#[derive(Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create from seed.
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform f64 in [0,1): top 53 bits scaled by 2⁻⁵³.
    #[inline(always)]
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// One (x, y) sample in the unit square.
    #[inline(always)]
    pub fn next_point(&mut self) -> (f64, f64) {
        (self.next_unit(), self.next_unit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix64_deterministic() {
        let mut rng1 = SplitMix64::new(42);
        let mut rng2 = SplitMix64::new(42);
        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_next_unit_range() {
        let mut rng = SplitMix64::new(12345);
        for _ in 0..10_000 {
            let x = rng.next_unit();
            assert!((0.0..1.0).contains(&x), "unit draw out of range: {}", x);
        }
    }

    #[test]
    fn test_next_unit_distribution() {
        let mut rng = SplitMix64::new(42);
        let n = 100_000;
        let mut counts = [0u64; 10];
        for _ in 0..n {
            let x = rng.next_unit();
            counts[(x * 10.0) as usize] += 1;
        }
        // Each decile should hold ~1/10 of the draws.
        let expected = n as f64 / 10.0;
        for (decile, &count) in counts.iter().enumerate() {
            let ratio = count as f64 / expected;
            assert!(
                ratio > 0.95 && ratio < 1.05,
                "decile {} has count {} (expected ~{:.0}, ratio {:.3})",
                decile,
                count,
                expected,
                ratio
            );
        }
    }
}
