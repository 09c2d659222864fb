//! Branch-and-bound configuration.

use crate::error::KnapsackError;
use crate::item::KnapsackInstance;

/// Default cap on the number of items, which equals the search depth.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Configuration for the exact branch-and-bound search.
///
/// With the defaults the search always runs to completion and the result is
/// certified optimal. Limits turn it into an anytime search that returns the
/// best incumbent found before the limit was hit.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::BnbConfig;
///
/// let config = BnbConfig::default()
///     .with_node_limit(1_000_000)
///     .with_time_limit_ms(500);
/// assert_eq!(config.node_limit, Some(1_000_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BnbConfig {
    /// Maximum number of search nodes to expand.
    ///
    /// `None` disables the limit (the default).
    pub node_limit: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked every few thousand nodes, so the search may overrun slightly.
    pub time_limit_ms: Option<u64>,

    /// Largest item count accepted.
    ///
    /// The search keeps its pending decisions on the heap, one level per
    /// item, so this bounds its memory rather than the thread stack.
    pub max_depth: usize,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            node_limit: None,
            time_limit_ms: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BnbConfig {
    /// Sets the node limit.
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the maximum accepted item count.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.node_limit == Some(0) {
            return Err(KnapsackError::invalid_config(
                "node_limit must be positive or None",
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(KnapsackError::invalid_config(
                "time_limit_ms must be positive or None",
            ));
        }
        Ok(())
    }

    /// Validates the configuration against a concrete instance.
    pub fn validate_for(&self, instance: &KnapsackInstance) -> Result<(), KnapsackError> {
        self.validate()?;
        if instance.len() > self.max_depth {
            return Err(KnapsackError::invalid_config(format!(
                "instance has {} items, exceeding max_depth {}",
                instance.len(),
                self.max_depth
            )));
        }
        Ok(())
    }
}
