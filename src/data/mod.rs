//! Rating data helpers
//!
//! Synthetic corpora for demos, benchmarks and evaluation.

pub mod synthetic;

pub use synthetic::{SyntheticConfig, SyntheticRatings};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::synthetic::{SyntheticConfig, SyntheticRatings};
}
