//! Side-by-side run of both solvers on one instance.
//!
//! The solvers share no state. With the `parallel` feature they run
//! concurrently on the rayon pool; each stays single-threaded internally.

use crate::bnb::{BnbConfig, BnbResult, BnbRunner};
use crate::ga::{GaConfig, GaResult, GaRunner};
use crate::item::KnapsackInstance;
use std::time::{Duration, Instant};
use tracing::instrument;

/// Outcome of running both solvers on the same instance.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Exact branch-and-bound result.
    pub exact: BnbResult,
    /// Genetic algorithm result.
    pub heuristic: GaResult,
    /// Wall-clock time of the exact solver.
    pub exact_elapsed: Duration,
    /// Wall-clock time of the heuristic solver.
    pub heuristic_elapsed: Duration,
}

impl Comparison {
    /// Relative shortfall of the heuristic: `(exact - heuristic) / exact`.
    ///
    /// Zero when the exact cost is zero. Negative only if the exact search
    /// was stopped by a limit before reaching the heuristic's cost.
    pub fn gap(&self) -> f64 {
        if self.exact.total_cost == 0 {
            return 0.0;
        }
        let exact = self.exact.total_cost as f64;
        (exact - self.heuristic.best_cost as f64) / exact
    }

    /// Whether the heuristic matched the exact cost.
    pub fn heuristic_matched(&self) -> bool {
        self.heuristic.best_cost == self.exact.total_cost
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Method\t\tCost\tTime (ms)")?;
        writeln!(
            f,
            "Branch & Bound\t{}\t{}",
            self.exact.total_cost,
            self.exact_elapsed.as_millis()
        )?;
        write!(
            f,
            "Genetic Algo\t{}\t{}",
            self.heuristic.best_cost,
            self.heuristic_elapsed.as_millis()
        )
    }
}

/// Runs the exact and heuristic solvers on `instance` and times each.
///
/// # Panics
/// Panics if either configuration is invalid for the instance.
///
/// # Examples
///
/// ```
/// use u_knapsack::{compare, Item, KnapsackInstance};
/// use u_knapsack::bnb::BnbConfig;
/// use u_knapsack::ga::GaConfig;
///
/// let items = vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
/// let instance = KnapsackInstance::new(items, 5).unwrap();
/// let cmp = compare(&instance, &BnbConfig::default(), &GaConfig::default().with_seed(1));
/// assert_eq!(cmp.exact.total_cost, 7);
/// assert!(cmp.heuristic.best_cost <= cmp.exact.total_cost);
/// ```
#[instrument(level = "debug", skip_all, fields(items = instance.len()))]
pub fn compare(instance: &KnapsackInstance, bnb: &BnbConfig, ga: &GaConfig) -> Comparison {
    let run_exact = || timed(|| BnbRunner::run(instance, bnb));
    let run_heuristic = || timed(|| GaRunner::run(instance, ga));

    #[cfg(feature = "parallel")]
    let ((exact, exact_elapsed), (heuristic, heuristic_elapsed)) =
        rayon::join(run_exact, run_heuristic);

    #[cfg(not(feature = "parallel"))]
    let ((exact, exact_elapsed), (heuristic, heuristic_elapsed)) = (run_exact(), run_heuristic());

    let comparison = Comparison {
        exact,
        heuristic,
        exact_elapsed,
        heuristic_elapsed,
    };
    tracing::info!(
        exact_cost = comparison.exact.total_cost,
        heuristic_cost = comparison.heuristic.best_cost,
        gap = comparison.gap(),
        "comparison finished"
    );
    comparison
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}
