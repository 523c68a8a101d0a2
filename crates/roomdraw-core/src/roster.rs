//! Class-tier arithmetic and draw-number permutations.
//!
//! The draw population is split into three tiers by a fixed thirds ratio.
//! The split uses the same integer arithmetic as the original tooling so
//! historical seed counts reproduce exactly (the remainder lands on the
//! sophomore tier). Tiers never influence who fills a room; they drive
//! synthetic seeding ratios and the run report only.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Head-count of each class tier in a draw population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBreakdown {
    pub seniors: usize,
    pub juniors: usize,
    pub sophomores: usize,
}

impl TierBreakdown {
    /// Splits `total` participants into tiers by the fixed thirds ratio.
    pub fn thirds(total: usize) -> Self {
        let seniors = total / 3;
        let juniors = total * 2 / 3 - total / 3;
        let sophomores = total - total * 2 / 3;
        Self {
            seniors,
            juniors,
            sophomores,
        }
    }

    /// Total participants across all tiers.
    pub fn total(&self) -> usize {
        self.seniors + self.juniors + self.sophomores
    }
}

impl fmt::Display for TierBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seniors, {} juniors, {} sophomores",
            self.seniors, self.juniors, self.sophomores
        )
    }
}

/// A uniform random permutation of the draw numbers `1..=count`.
///
/// Each tier hands out its own permutation so every member gets a distinct
/// rank within the tier.
pub fn shuffled_draw_numbers<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u32> {
    let mut numbers: Vec<u32> = (1..=count as u32).collect();
    numbers.shuffle(rng);
    numbers
}
