//! Error types for slope-one
//!
//! Training and prediction never fail: empty or sparse input degrades to empty
//! results. Errors only come from configuration and from the evaluation and
//! data-generation helpers built on top of the model.

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SlopeOneError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Not enough users or items to work with
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Evaluation could not produce a single prediction
    #[error("No predictions: {attempted} held-out ratings, none predictable")]
    NoPredictions {
        /// Held-out ratings that were attempted
        attempted: usize,
    },
}

/// Result type alias for slope-one operations
pub type SlopeOneResult<T> = Result<T, SlopeOneError>;
