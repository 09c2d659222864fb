//! Parent selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Chromosome;
use rand::Rng;

/// Tournament selection: draw `k` indices uniformly (with replacement) and
/// return the one with the highest `total_cost`.
///
/// `k = 2` is binary tournament.
///
/// Ties deliberately keep the earlier draw: a later contestant must have a
/// strictly higher cost to replace the current winner.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].total_cost > population[best_idx].total_cost {
            best_idx = idx;
        }
    }
    best_idx
}
