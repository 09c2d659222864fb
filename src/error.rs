//! Error taxonomy.
//!
//! Solvers never fail on a validated [`KnapsackInstance`](crate::KnapsackInstance);
//! every error is raised while building an instance or validating a config.

/// Errors raised before a solve starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnapsackError {
    /// An item has zero weight, so its density is undefined.
    #[error("InvalidItem: item weight must be positive. index={index}, weight={weight}")]
    InvalidItem { index: usize, weight: u64 },

    /// Summed weights or costs of the input do not fit in `u64`.
    #[error("Overflow: total {field} of all items exceeds u64::MAX")]
    Overflow { field: &'static str },

    /// A solver configuration parameter is out of range.
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
}

impl KnapsackError {
    pub(crate) fn invalid_item(index: usize, weight: u64) -> Self {
        Self::InvalidItem { index, weight }
    }

    pub(crate) fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
