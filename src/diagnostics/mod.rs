//! Diagnostics and statistics
//!
//! This module summarizes trained models and measures prediction quality on
//! held-out ratings.

pub mod evaluation;

use serde::{Deserialize, Serialize};

use crate::model::{DifferenceModel, ItemKey};

pub use evaluation::{evaluate_holdout, EvaluationConfig, EvaluationReport};

/// Shape and support statistics of a trained model
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Known items
    pub items: usize,
    /// Stored ordered pairs
    pub pairs: usize,
    /// Non-empty rating sets folded in
    pub users: usize,
    /// Mean co-occurrence count per stored pair
    pub mean_support: f64,
    /// Largest co-occurrence count
    pub max_support: usize,
    /// Stored pairs as a fraction of all possible ordered pairs
    pub density: f64,
}

impl ModelSummary {
    /// Compute the summary of a model
    pub fn from_model<I: ItemKey>(model: &DifferenceModel<I>) -> Self {
        let items = model.num_items();
        let pairs = model.num_pairs();

        let (total_support, max_support) = model
            .pairs()
            .fold((0usize, 0usize), |(total, max), (_, stats)| {
                (total + stats.count, max.max(stats.count))
            });

        let mean_support = if pairs > 0 {
            total_support as f64 / pairs as f64
        } else {
            0.0
        };

        let possible = items.saturating_mul(items.saturating_sub(1));
        let density = if possible > 0 {
            pairs as f64 / possible as f64
        } else {
            0.0
        };

        Self {
            items,
            pairs,
            users: model.users_seen(),
            mean_support,
            max_support,
            density,
        }
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Model Summary:\n\
             - Items: {}\n\
             - Pairs: {}\n\
             - Users: {}\n\
             - Mean support: {:.2}\n\
             - Max support: {}\n\
             - Density: {:.4}",
            self.items, self.pairs, self.users, self.mean_support, self.max_support, self.density
        )
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use super::evaluation::{evaluate_holdout, EvaluationConfig, EvaluationReport};
    pub use super::ModelSummary;
}
