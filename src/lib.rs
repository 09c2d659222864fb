//! 0/1 knapsack solvers.
//!
//! Given a capacity and a set of `(weight, cost)` items, find a subset of
//! maximal total cost whose total weight does not exceed the capacity. Two
//! independent strategies are provided so they can be compared on the same
//! input:
//!
//! - **Branch and Bound ([`bnb`])**: Exact depth-first search over items in
//!   decreasing density order, pruned by the fractional relaxation bound.
//!   Returns a certified optimum unless stopped by a limit.
//! - **Genetic Algorithm ([`ga`])**: Population of bit-string chromosomes
//!   evolved by tournament selection, single-point crossover, bit-flip
//!   mutation and weight repair for a fixed number of generations. Returns a
//!   feasible, best-effort solution.
//! - **Comparison ([`compare()`])**: Runs both and reports cost and time.
//!
//! # Input
//!
//! Both solvers take a [`KnapsackInstance`], which can only be built from
//! items with positive weight. The library performs no I/O.
//!
//! ```
//! use u_knapsack::{Item, KnapsackInstance};
//! use u_knapsack::bnb::{BnbConfig, BnbRunner};
//! use u_knapsack::ga::{GaConfig, GaRunner};
//!
//! let items = vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
//! let instance = KnapsackInstance::new(items, 5)?;
//!
//! let exact = BnbRunner::run(&instance, &BnbConfig::default());
//! let heuristic = GaRunner::run(&instance, &GaConfig::default().with_seed(42));
//! assert_eq!(exact.total_cost, 7);
//! assert!(heuristic.best_cost <= exact.total_cost);
//! # Ok::<(), u_knapsack::KnapsackError>(())
//! ```

pub mod bnb;
pub mod compare;
mod error;
pub mod ga;
mod item;

pub use compare::{compare, Comparison};
pub use error::KnapsackError;
pub use item::{Item, KnapsackInstance};
