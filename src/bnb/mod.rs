//! Exact solver: depth-first branch and bound.
//!
//! Items are explored in decreasing density order; every node is pruned by
//! the fractional relaxation bound against the best complete assignment
//! found so far (the incumbent). When the search runs to completion, the
//! incumbent is optimal.
//!
//! # Key Types
//!
//! - [`BnbConfig`]: Optional node, time and depth limits
//! - [`BnbRunner`]: Executes the search
//! - [`BnbResult`]: Chosen items, totals, status and [`BnbStats`]
//! - [`PartialSolution`] / [`TrialInclusion`]: Search state with scoped undo
//!
//! # References
//!
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"
//! - Kolesar (1967), "A Branch and Bound Algorithm for the Knapsack Problem"
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer
//!   Implementations*

mod bound;
mod config;
mod runner;
mod state;
mod stats;

pub use bound::fractional_upper_bound;
pub use config::{BnbConfig, DEFAULT_MAX_DEPTH};
pub use runner::{BnbResult, BnbRunner, SearchStatus};
pub use state::{PartialSolution, TrialInclusion};
pub use stats::BnbStats;

use crate::error::KnapsackError;
use crate::item::{Item, KnapsackInstance};

/// Validates `items` and finds an optimal subset with default settings.
///
/// # Errors
///
/// Returns [`KnapsackError`] if an item has zero weight, the totals overflow,
/// or there are more items than [`DEFAULT_MAX_DEPTH`].
///
/// # Examples
///
/// ```
/// use u_knapsack::Item;
/// use u_knapsack::bnb::find_optimal;
///
/// let items = vec![Item::new(1, 1); 10];
/// let result = find_optimal(items, 5).unwrap();
/// assert_eq!(result.total_cost, 5);
/// ```
pub fn find_optimal(items: Vec<Item>, capacity: u64) -> Result<BnbResult, KnapsackError> {
    let instance = KnapsackInstance::new(items, capacity)?;
    let config = BnbConfig::default();
    config.validate_for(&instance)?;
    Ok(BnbRunner::run(&instance, &config))
}
