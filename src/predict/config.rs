//! Predictor configuration

use serde::{Deserialize, Serialize};

use crate::error::{SlopeOneError, SlopeOneResult};

/// How much each supporting item pair contributes to a prediction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weighting {
    /// Weighted Slope One: each pair is weighted by its co-occurrence count
    #[default]
    CoOccurrence,
    /// Basic Slope One: every supporting pair counts once
    ///
    /// Deviates from the weighted scheme; low-support pairs gain influence.
    Uniform,
}

impl Weighting {
    /// Weight of a pair observed `count` times
    pub fn weight(&self, count: usize) -> f64 {
        match self {
            Self::CoOccurrence => count as f64,
            Self::Uniform => 1.0,
        }
    }
}

/// Configuration for the predictor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Weighting scheme
    #[serde(default)]
    pub weighting: Weighting,
    /// Minimum co-occurrence count for a pair to be used
    #[serde(default = "default_min_support")]
    pub min_support: usize,
}

fn default_min_support() -> usize {
    1
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            weighting: Weighting::default(),
            min_support: default_min_support(),
        }
    }
}

impl PredictorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weighting scheme
    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Set the minimum support
    pub fn with_min_support(mut self, min_support: usize) -> Self {
        self.min_support = min_support;
        self
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> SlopeOneResult<()> {
        if self.min_support == 0 {
            return Err(SlopeOneError::Configuration(
                "min_support must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
