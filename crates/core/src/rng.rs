//! RNG module - uniform random piece selection
//!
//! Every draw picks one of the seven kinds with equal probability, with no
//! bag or history. A small LCG keeps games reproducible from a seed.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform piece source
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: SimpleRng,
}

impl ShapePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind
    pub fn draw(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }
}

impl Default for ShapePicker {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        for _ in 0..10 {
            assert_eq!(zero.next_u32(), one.next_u32());
        }
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_picker_covers_all_kinds() {
        let mut picker = ShapePicker::new(42);
        let mut seen = [false; 7];
        for _ in 0..700 {
            let kind = picker.draw();
            let idx = ShapeKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "every kind should appear: {:?}", seen);
    }

    #[test]
    fn test_picker_is_roughly_uniform() {
        let mut picker = ShapePicker::new(2024);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = picker.draw();
            let idx = ShapeKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }
        for c in counts {
            assert!((700..1300).contains(&c), "counts {:?}", counts);
        }
    }
}
