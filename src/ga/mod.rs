//! Heuristic solver: Genetic Algorithm over bit-string chromosomes.
//!
//! Each chromosome carries one gene per item. A generation keeps the current
//! best unchanged (elitism) and fills the rest of the population with
//! offspring produced by tournament selection, single-point crossover,
//! bit-flip mutation and weight repair. Repair runs after every variation,
//! so every member of every generation is feasible.
//!
//! The result is best-effort: it is always feasible but never certified
//! optimal.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, mutation rate, generation budget, seed
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best chromosome plus per-generation cost history
//! - [`Chromosome`]: Genes and cached totals
//!
//! # Submodules
//!
//! - [`operators`]: Random initialization, crossover, mutation and repair
//! - [`selection`]: Tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem"

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::Chromosome;

use crate::error::KnapsackError;
use crate::item::{Item, KnapsackInstance};

/// Validates the input and evolves a solution with an entropy seed.
///
/// # Errors
///
/// Returns [`KnapsackError`] if an item has zero weight, the totals overflow,
/// `population_size` is zero, or `mutation_rate` lies outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use u_knapsack::Item;
/// use u_knapsack::ga::solve;
///
/// let best = solve(vec![Item::new(1, 1); 10], 5, 100, 0.01, 100).unwrap();
/// assert!(best.total_weight <= 5);
/// ```
pub fn solve(
    items: Vec<Item>,
    capacity: u64,
    population_size: usize,
    mutation_rate: f64,
    generations: usize,
) -> Result<Chromosome, KnapsackError> {
    let instance = KnapsackInstance::new(items, capacity)?;
    let config = GaConfig {
        population_size,
        mutation_rate,
        generations,
        ..GaConfig::default()
    };
    config.validate()?;
    Ok(GaRunner::run(&instance, &config).best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_validates_items() {
        let err = solve(vec![Item::new(0, 1)], 5, 10, 0.01, 10).unwrap_err();
        assert_eq!(err, KnapsackError::InvalidItem { index: 0, weight: 0 });
    }

    #[test]
    fn test_solve_validates_config() {
        let items = vec![Item::new(1, 1)];
        assert!(matches!(
            solve(items.clone(), 5, 0, 0.01, 10),
            Err(KnapsackError::InvalidConfig(_))
        ));
        assert!(matches!(
            solve(items, 5, 10, 1.5, 10),
            Err(KnapsackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_solve_feasible() {
        let items = vec![
            Item::new(2, 3),
            Item::new(3, 4),
            Item::new(4, 5),
            Item::new(5, 6),
        ];
        let best = solve(items, 5, 100, 0.01, 100).unwrap();
        assert!(best.total_weight <= 5);
        assert!(best.total_cost <= 7);
    }
}
