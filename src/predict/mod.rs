//! Prediction
//!
//! This module turns a trained [`DifferenceModel`](crate::model::DifferenceModel)
//! and one user's known ratings into predicted ratings and recommendations.
//!
//! # Weighting
//!
//! - **CoOccurrence** (default): weighted Slope One, each item pair counts as
//!   many times as it was observed together
//! - **Uniform**: basic Slope One, each supporting pair counts once
//!
//! `min_support` can additionally drop pairs seen too rarely to be trusted.

pub mod config;
pub mod predictor;
pub mod recommend;

pub use config::{PredictorConfig, Weighting};
pub use predictor::Predictor;
pub use recommend::Recommendation;

/// Prelude for convenient imports
pub mod prelude {
    pub use super::config::{PredictorConfig, Weighting};
    pub use super::predictor::Predictor;
    pub use super::recommend::Recommendation;
}
