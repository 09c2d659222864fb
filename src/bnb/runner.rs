//! Depth-first branch-and-bound search.
//!
//! # Algorithm
//!
//! 1. Order items by decreasing density
//! 2. Start from the empty incumbent (cost 0)
//! 3. At each item position, in order:
//!    a. Exclude branch: descend if the bound over the remaining items beats
//!       the incumbent
//!    b. Include branch: if the item fits, include it tentatively, descend if
//!       the bound from the extended state beats the incumbent, then undo
//! 4. At the end of the item list, install the path as incumbent if its cost
//!    is strictly greater
//!
//! Both bound checks compare against the global incumbent as it stands when
//! the check runs, so the include check sees any improvement found while
//! exploring the exclude subtree.
//!
//! The tree is walked with an explicit LIFO stack of pending decisions rather
//! than recursion, so stack usage does not grow with the item count.
//!
//! # Reference
//!
//! Kolesar, P. J. (1967). "A Branch and Bound Algorithm for the Knapsack
//! Problem", *Management Science* 13(9), 723-735.

use super::bound::fractional_upper_bound;
use super::config::BnbConfig;
use super::state::PartialSolution;
use super::stats::BnbStats;
use crate::item::{Item, KnapsackInstance};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::instrument;

/// Limits are polled once per this many nodes.
const POLL_INTERVAL: u64 = 4096;

/// How the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The tree was exhausted; the result is proven optimal.
    Optimal,
    /// Stopped by [`BnbConfig::node_limit`]; the result is the best found.
    NodeLimit,
    /// Stopped by [`BnbConfig::time_limit_ms`]; the result is the best found.
    TimeLimit,
    /// Stopped by the cancellation flag; the result is the best found.
    Cancelled,
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbResult {
    /// Total cost of the chosen items.
    pub total_cost: u64,
    /// Total weight of the chosen items.
    pub total_weight: u64,
    /// Chosen items, in inclusion (density) order.
    pub chosen_items: Vec<Item>,
    /// Input indices of the chosen items, parallel to `chosen_items`.
    pub chosen_indices: Vec<usize>,
    /// Why the search stopped.
    pub status: SearchStatus,
    /// Search statistics.
    pub stats: BnbStats,
}

impl BnbResult {
    /// Whether the result is certified optimal.
    pub fn is_optimal(&self) -> bool {
        self.status == SearchStatus::Optimal
    }

    /// Selection mask over the input items.
    ///
    /// # Panics
    /// Panics if `num_items` does not cover every chosen index; pass the
    /// length of the instance that was solved.
    pub fn selection(&self, num_items: usize) -> Vec<bool> {
        let mut mask = vec![false; num_items];
        for &i in &self.chosen_indices {
            mask[i] = true;
        }
        mask
    }
}

/// Executes the branch-and-bound search.
///
/// # Usage
///
/// ```
/// use u_knapsack::{Item, KnapsackInstance};
/// use u_knapsack::bnb::{BnbConfig, BnbRunner};
///
/// let items = vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
/// let instance = KnapsackInstance::new(items, 5).unwrap();
/// let result = BnbRunner::run(&instance, &BnbConfig::default());
/// assert_eq!(result.total_cost, 7);
/// assert!(result.is_optimal());
/// ```
pub struct BnbRunner;

impl BnbRunner {
    /// Runs the search to completion or until a configured limit.
    ///
    /// # Panics
    /// Panics if the configuration is invalid for this instance (call
    /// [`BnbConfig::validate_for`] first to get a descriptive error).
    pub fn run(instance: &KnapsackInstance, config: &BnbConfig) -> BnbResult {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search stops
    /// at the next poll and returns the best incumbent found so far.
    #[instrument(
        level = "debug",
        skip_all,
        fields(items = instance.len(), capacity = instance.capacity())
    )]
    pub fn run_with_cancel(
        instance: &KnapsackInstance,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> BnbResult {
        config.validate_for(instance).expect("invalid BnbConfig");

        let start = Instant::now();
        let order = instance.density_order();
        let sorted: Vec<Item> = order.iter().map(|&i| instance.items()[i]).collect();

        let mut session = SearchSession {
            capacity: instance.capacity(),
            incumbent: PartialSolution::new(instance.capacity()),
            stats: BnbStats::default(),
            node_limit: config.node_limit,
            deadline: config
                .time_limit_ms
                .map(|ms| start + Duration::from_millis(ms)),
            cancel,
            stopped: None,
            order: &order,
            sorted: &sorted,
        };
        session.stats.root_bound =
            fractional_upper_bound(&sorted, 0, Item::default(), instance.capacity());

        let mut current = PartialSolution::with_capacity_hint(instance.capacity(), sorted.len());
        session.search(&mut current);

        let status = session.stopped.unwrap_or(SearchStatus::Optimal);
        let mut stats = session.stats;
        stats.elapsed = start.elapsed();
        let incumbent = session.incumbent;

        match status {
            SearchStatus::Optimal => tracing::info!(
                cost = incumbent.total().cost,
                nodes = stats.nodes_explored,
                "branch-and-bound proved optimality"
            ),
            _ => tracing::warn!(
                ?status,
                cost = incumbent.total().cost,
                nodes = stats.nodes_explored,
                "branch-and-bound stopped early; result is not certified"
            ),
        }

        BnbResult {
            total_cost: incumbent.total().cost,
            total_weight: incumbent.total().weight,
            chosen_items: incumbent.items().to_vec(),
            chosen_indices: incumbent.indices().to_vec(),
            status,
            stats,
        }
    }
}

/// State owned by one search invocation.
struct SearchSession<'a> {
    capacity: u64,
    incumbent: PartialSolution,
    stats: BnbStats,
    node_limit: Option<u64>,
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
    stopped: Option<SearchStatus>,
    /// Sorted position -> input index.
    order: &'a [usize],
    /// Items in decreasing density order.
    sorted: &'a [Item],
}

/// A pending step of the depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    /// Expand the node at this sorted position.
    Visit(usize),
    /// Try the include branch at this position once its exclude subtree is done.
    Include(usize),
    /// Remove the item committed by the matching `Include`.
    Undo,
}

impl SearchSession<'_> {
    /// Runs the search from the root using a heap-allocated decision stack.
    ///
    /// Every committed inclusion pushes an `Undo` beneath its subtree, and an
    /// early stop drains the pending undos, so `current` is back to empty
    /// when this returns.
    fn search(&mut self, current: &mut PartialSolution) {
        let mut stack = Vec::with_capacity(2 * self.sorted.len() + 1);
        stack.push(Decision::Visit(0));

        while let Some(decision) = stack.pop() {
            match decision {
                Decision::Visit(pos) => {
                    if self.should_stop() {
                        break;
                    }
                    self.visit(current, pos, &mut stack);
                }
                Decision::Include(pos) => self.include(current, pos, &mut stack),
                Decision::Undo => {
                    current.remove_last();
                }
            }
        }

        for decision in stack.into_iter().rev() {
            if decision == Decision::Undo {
                current.remove_last();
            }
        }
        debug_assert!(current.is_empty(), "unbalanced inclusions after search");
    }

    fn visit(&mut self, current: &PartialSolution, pos: usize, stack: &mut Vec<Decision>) {
        self.stats.on_node_explored();
        self.stats.on_depth(pos as u64);

        if pos == self.sorted.len() {
            if current.total().cost > self.incumbent.total().cost {
                self.incumbent = current.clone();
                self.stats.on_incumbent_update();
                tracing::debug!(
                    cost = current.total().cost,
                    weight = current.total().weight,
                    nodes = self.stats.nodes_explored,
                    "new incumbent"
                );
            }
            return;
        }

        // LIFO: the exclude subtree runs to completion before the include step.
        stack.push(Decision::Include(pos));
        let exclude_bound =
            fractional_upper_bound(self.sorted, pos + 1, current.total(), self.capacity);
        if exclude_bound > self.incumbent.total().cost {
            stack.push(Decision::Visit(pos + 1));
        } else {
            self.stats.on_pruning_bound();
        }
    }

    fn include(&mut self, current: &mut PartialSolution, pos: usize, stack: &mut Vec<Decision>) {
        match current.try_include(self.order[pos], self.sorted[pos]) {
            Some(trial) => {
                let include_bound =
                    fractional_upper_bound(self.sorted, pos + 1, trial.total(), self.capacity);
                if include_bound > self.incumbent.total().cost {
                    trial.commit();
                    stack.push(Decision::Undo);
                    stack.push(Decision::Visit(pos + 1));
                } else {
                    self.stats.on_pruning_bound();
                }
            }
            None => self.stats.on_pruning_infeasible(),
        }
    }

    /// Polls the node limit every node and the clock and cancel flag every
    /// [`POLL_INTERVAL`] nodes. Records the reason on the first hit.
    fn should_stop(&mut self) -> bool {
        let nodes = self.stats.nodes_explored;
        if let Some(limit) = self.node_limit {
            if nodes >= limit {
                self.stopped = Some(SearchStatus::NodeLimit);
                return true;
            }
        }
        if nodes % POLL_INTERVAL != 0 {
            return false;
        }
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                self.stopped = Some(SearchStatus::Cancelled);
                return true;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stopped = Some(SearchStatus::TimeLimit);
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
