//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::KnapsackError;

/// Configuration for the knapsack Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// assert!((config.mutation_rate - 0.01).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.02)
///     .with_generations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of chromosomes per generation.
    pub population_size: usize,

    /// Per-gene flip probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations to evolve. There is no convergence-based
    /// early stop.
    pub generations: usize,

    /// Number of contestants per tournament when selecting a parent.
    ///
    /// The default of 2 is binary tournament selection.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the thread-local entropy source.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the run may exceed the
    /// limit by one generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.01,
            generations: 100,
            tournament_size: 2,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-gene mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.population_size < 1 {
            return Err(KnapsackError::invalid_config(
                "population_size must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KnapsackError::invalid_config(
                "mutation_rate must be within [0, 1]",
            ));
        }
        if self.tournament_size < 1 {
            return Err(KnapsackError::invalid_config(
                "tournament_size must be at least 1",
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(KnapsackError::invalid_config(
                "time_limit_ms must be positive or None",
            ));
        }
        Ok(())
    }
}
