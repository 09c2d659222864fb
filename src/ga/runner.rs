//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → repair → (elitism → selection → crossover → mutation →
//! repair) × generations.

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, random_chromosome, repair, single_point_crossover};
use super::selection::tournament;
use super::types::Chromosome;
use crate::item::KnapsackInstance;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::instrument;

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best chromosome of the final population.
    pub best: Chromosome,

    /// Cost of `best`.
    pub best_cost: u64,

    /// Weight of `best`.
    pub best_weight: u64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on the time limit.
    pub timed_out: bool,

    /// Best cost of the initial population, then after each generation.
    pub cost_history: Vec<u64>,
}

/// Executes the knapsack GA.
///
/// # Usage
///
/// ```
/// use u_knapsack::{Item, KnapsackInstance};
/// use u_knapsack::ga::{GaConfig, GaRunner};
///
/// let items = vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
/// let instance = KnapsackInstance::new(items, 5).unwrap();
/// let result = GaRunner::run(&instance, &GaConfig::default().with_seed(42));
/// assert!(result.best_weight <= 5);
/// assert!(result.best_cost <= 7);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA for the configured number of generations.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`] first
    /// to get a descriptive error).
    pub fn run(instance: &KnapsackInstance, config: &GaConfig) -> GaResult {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop at the start of the next generation and return the best
    /// chromosome found so far.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            items = instance.len(),
            capacity = instance.capacity(),
            population = config.population_size,
            generations = config.generations
        )
    )]
    pub fn run_with_cancel(
        instance: &KnapsackInstance,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let start = Instant::now();
        let deadline = config
            .time_limit_ms
            .map(|ms| start + Duration::from_millis(ms));

        // Nothing to evolve: crossover has no split point over zero genes
        if instance.is_empty() {
            return GaResult {
                best: Chromosome::empty(0),
                best_cost: 0,
                best_weight: 0,
                generations: 0,
                cancelled: false,
                timed_out: false,
                cost_history: vec![0],
            };
        }

        let mut evolution = Evolution::new(instance, config);
        let mut cost_history = Vec::with_capacity(config.generations + 1);
        cost_history.push(evolution.best().total_cost);

        let mut cancelled = false;
        let mut timed_out = false;
        let mut generations = 0;

        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                timed_out = true;
                break;
            }

            let previous = evolution.best().total_cost;
            evolution.evolve();
            generations = gen + 1;

            let best_cost = evolution.best().total_cost;
            cost_history.push(best_cost);
            if best_cost > previous {
                tracing::debug!(generation = generations, cost = best_cost, "improved best");
            }
        }

        let best = evolution.into_best();
        tracing::info!(
            cost = best.total_cost,
            weight = best.total_weight,
            generations,
            cancelled,
            timed_out,
            "genetic algorithm finished"
        );

        GaResult {
            best_cost: best.total_cost,
            best_weight: best.total_weight,
            best,
            generations,
            cancelled,
            timed_out,
            cost_history,
        }
    }
}

/// One solver instance: the instance, its own random source, and the
/// current population sorted by descending cost.
struct Evolution<'a> {
    instance: &'a KnapsackInstance,
    config: &'a GaConfig,
    rng: StdRng,
    population: Vec<Chromosome>,
}

impl<'a> Evolution<'a> {
    /// Seeds the generator and builds a repaired, sorted initial population.
    fn new(instance: &'a KnapsackInstance, config: &'a GaConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut evolution = Self {
            instance,
            config,
            rng,
            population: Vec::with_capacity(config.population_size),
        };

        let items = instance.items();
        for _ in 0..config.population_size {
            let mut chrom = random_chromosome(items, &mut evolution.rng);
            repair(&mut chrom, items, instance.capacity(), &mut evolution.rng);
            evolution.population.push(chrom);
        }
        evolution.sort();
        evolution
    }

    /// Replaces the population with the elite plus repaired offspring.
    fn evolve(&mut self) {
        let items = self.instance.items();
        let capacity = self.instance.capacity();

        let mut next_gen = Vec::with_capacity(self.config.population_size);
        next_gen.push(self.population[0].clone());

        while next_gen.len() < self.config.population_size {
            let p1 = tournament(&self.population, self.config.tournament_size, &mut self.rng);
            let p2 = tournament(&self.population, self.config.tournament_size, &mut self.rng);

            let mut child =
                single_point_crossover(&self.population[p1], &self.population[p2], items, &mut self.rng);
            bit_flip_mutation(&mut child, items, self.config.mutation_rate, &mut self.rng);
            repair(&mut child, items, capacity, &mut self.rng);

            debug_assert!(child.is_feasible(capacity));
            next_gen.push(child);
        }

        self.population = next_gen;
        self.sort();
    }

    /// Stable sort by descending cost; the elite stays first among equals.
    fn sort(&mut self) {
        self.population
            .sort_by(|a, b| b.total_cost.cmp(&a.total_cost));
    }

    fn best(&self) -> &Chromosome {
        &self.population[0]
    }

    fn into_best(mut self) -> Chromosome {
        self.population.swap_remove(0)
    }
}

// ============================================================================
// Tests
// ============================================================================
