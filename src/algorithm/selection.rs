//! Seeded random selection for reproducible stochastic choices
//!
//! All entropy the generator consumes flows through [`RandomSelector`], so a
//! fixed seed replays an identical generation.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector wrapping a [`StdRng`]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic selector from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from operating system entropy
    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uniform value in `[0, bound)`; returns 0 for an empty range
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.rng.random_range(0..bound)
        }
    }

    /// Uniform value in the half-open range `[low, high)`, swapping inverted bounds
    pub fn range(&mut self, low: u32, high: u32) -> u32 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        if low == high {
            low
        } else {
            self.rng.random_range(low..high)
        }
    }

    /// Uniform value in the inclusive range `[low, high]`, swapping inverted bounds
    pub fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        self.rng.random_range(low..=high)
    }

    /// Weighted coin: true with probability `chance / 100`
    pub fn percent(&mut self, chance: u32) -> bool {
        self.rng.random::<f64>() < f64::from(chance) / 100.0
    }

    /// Uniform float in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.random()
    }

    /// Uniformly pick a reference out of a slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let index = self.below(items.len());
            items.get(index)
        }
    }

    /// Weighted random selection over an index range
    ///
    /// Returns an index into the weights slice using a cumulative scan.
    /// Zero-weighted entries are never selected; an all-zero slice yields 0.
    pub fn weighted_choice(&mut self, weights: &[u32]) -> usize {
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
        if total == 0 {
            return 0;
        }

        let mut choose = self.rng.random_range(0..total);
        for (i, &weight) in weights.iter().enumerate() {
            let weight = u64::from(weight);
            if choose < weight {
                return i;
            }
            choose -= weight;
        }
        weights.len().saturating_sub(1)
    }

    /// Weighted random selection over `(value, weight)` pairs
    ///
    /// Returns `None` when the weights sum to zero.
    pub fn weighted_pick<'a, T>(&mut self, entries: &'a [(T, u32)]) -> Option<&'a T> {
        let total: u64 = entries.iter().map(|&(_, w)| u64::from(w)).sum();
        if total == 0 {
            return None;
        }

        let mut choose = self.rng.random_range(0..total);
        for (value, weight) in entries {
            let weight = u64::from(*weight);
            if choose < weight {
                return Some(value);
            }
            choose -= weight;
        }
        None
    }
}
