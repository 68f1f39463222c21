//! Holdout evaluation
//!
//! Users are shuffled with a seeded RNG and split into a training part and a
//! test part. The model is trained on the training users only; each rating of
//! each test user is then hidden in turn and predicted from the rest of that
//! user's ratings.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SlopeOneError, SlopeOneResult};
use crate::model::{DifferenceModel, ItemKey, UserRatings};
use crate::predict::{Predictor, PredictorConfig};

/// Configuration for holdout evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Fraction of users held out for testing, in (0, 1)
    pub test_fraction: f64,
    /// Seed for the user shuffle
    pub seed: u64,
    /// Test users with fewer ratings are skipped
    pub min_ratings: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
            min_ratings: 2,
        }
    }
}

impl EvaluationConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the test fraction
    pub fn with_test_fraction(mut self, test_fraction: f64) -> Self {
        self.test_fraction = test_fraction;
        self
    }

    /// Set the shuffle seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the minimum number of ratings per test user
    pub fn with_min_ratings(mut self, min_ratings: usize) -> Self {
        self.min_ratings = min_ratings;
        self
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> SlopeOneResult<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(SlopeOneError::Configuration(format!(
                "test_fraction must be in (0, 1), got {}",
                self.test_fraction
            )));
        }
        if self.min_ratings < 2 {
            return Err(SlopeOneError::Configuration(
                "min_ratings must be at least 2 to hide one rating".to_string(),
            ));
        }
        Ok(())
    }
}

/// Prediction quality on held-out ratings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Mean absolute error over predicted ratings
    pub mae: f64,
    /// Root mean squared error over predicted ratings
    pub rmse: f64,
    /// Fraction of held-out ratings that could be predicted
    pub coverage: f64,
    /// Held-out ratings that got a prediction
    pub predicted: usize,
    /// Held-out ratings attempted
    pub attempted: usize,
    /// Users the model was trained on
    pub train_users: usize,
    /// Users held out for testing
    pub test_users: usize,
}

impl EvaluationReport {
    /// Human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Evaluation Summary:\n\
             - Train users: {}\n\
             - Test users: {}\n\
             - Predicted: {}/{} ({:.1}% coverage)\n\
             - MAE: {:.4}\n\
             - RMSE: {:.4}",
            self.train_users,
            self.test_users,
            self.predicted,
            self.attempted,
            self.coverage * 100.0,
            self.mae,
            self.rmse
        )
    }
}

/// Train on a random split of `users` and score predictions on the rest
pub fn evaluate_holdout<I: ItemKey>(
    users: &[UserRatings<I>],
    predictor_config: &PredictorConfig,
    config: &EvaluationConfig,
) -> SlopeOneResult<EvaluationReport> {
    config.validate()?;
    predictor_config.validate()?;

    if users.len() < 2 {
        return Err(SlopeOneError::EmptyDataset(format!(
            "holdout evaluation needs at least 2 users, got {}",
            users.len()
        )));
    }

    let mut order: Vec<usize> = (0..users.len()).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    order.shuffle(&mut rng);

    let test_count = ((users.len() as f64) * config.test_fraction).round() as usize;
    let test_count = test_count.clamp(1, users.len() - 1);
    let (test_idx, train_idx) = order.split_at(test_count);

    let mut model = DifferenceModel::new();
    for &idx in train_idx {
        model.add_user(&users[idx]);
    }
    let predictor = Predictor::with_config(&model, predictor_config.clone())?;

    let mut attempted = 0usize;
    let mut predicted = 0usize;
    let mut abs_error = 0.0;
    let mut sq_error = 0.0;

    for &idx in test_idx {
        let user = &users[idx];
        if user.len() < config.min_ratings {
            debug!(ratings = user.len(), "skipping sparse test user");
            continue;
        }

        let mut items: Vec<I> = user.keys().copied().collect();
        items.sort();

        for item in items {
            let actual = user[&item];
            let mut visible = user.clone();
            visible.remove(&item);

            attempted += 1;
            if let Some(estimate) = predictor.predict_item(&visible, item) {
                let err = estimate - actual;
                predicted += 1;
                abs_error += err.abs();
                sq_error += err * err;
            }
        }
    }

    if predicted == 0 {
        return Err(SlopeOneError::NoPredictions { attempted });
    }

    let n = predicted as f64;
    let report = EvaluationReport {
        mae: abs_error / n,
        rmse: (sq_error / n).sqrt(),
        coverage: n / attempted as f64,
        predicted,
        attempted,
        train_users: train_idx.len(),
        test_users: test_idx.len(),
    };

    info!(
        mae = report.mae,
        rmse = report.rmse,
        coverage = report.coverage,
        "holdout evaluation complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::Weighting;
    use approx::assert_abs_diff_eq;

    /// Every user rates every item at `bias + offset(item)`, so all pairwise
    /// differences are exact and predictions carry no error.
    fn additive_corpus(users: usize, items: u64) -> Vec<UserRatings<u64>> {
        (0..users)
            .map(|u| {
                let bias = (u % 4) as f64 * 0.5;
                (0..items)
                    .map(|i| (i, bias + (i % 3) as f64))
                    .collect::<UserRatings<u64>>()
            })
            .collect()
    }

    #[test]
    fn test_exact_corpus_has_zero_error() {
        let users = additive_corpus(20, 6);
        let report =
            evaluate_holdout(&users, &PredictorConfig::default(), &EvaluationConfig::default())
                .unwrap();

        assert_eq!(report.test_users, 4);
        assert_eq!(report.train_users, 16);
        assert_eq!(report.attempted, 24);
        assert_eq!(report.predicted, 24);
        assert_abs_diff_eq!(report.coverage, 1.0);
        assert_abs_diff_eq!(report.mae, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.rmse, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_uniform_weighting_also_exact() {
        let users = additive_corpus(10, 4);
        let predictor_config = PredictorConfig::new().with_weighting(Weighting::Uniform);
        let report =
            evaluate_holdout(&users, &predictor_config, &EvaluationConfig::default()).unwrap();
        assert_abs_diff_eq!(report.mae, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_same_seed_same_report() {
        let users = additive_corpus(15, 5);
        let config = EvaluationConfig::new().with_seed(7);
        let a = evaluate_holdout(&users, &PredictorConfig::default(), &config).unwrap();
        let b = evaluate_holdout(&users, &PredictorConfig::default(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_too_few_users() {
        let users = additive_corpus(1, 3);
        let result =
            evaluate_holdout(&users, &PredictorConfig::default(), &EvaluationConfig::default());
        assert!(matches!(result, Err(SlopeOneError::EmptyDataset(_))));
    }

    #[test]
    fn test_invalid_fraction() {
        let users = additive_corpus(5, 3);
        for fraction in [0.0, 1.0, -0.5, f64::NAN] {
            let config = EvaluationConfig::new().with_test_fraction(fraction);
            let result = evaluate_holdout(&users, &PredictorConfig::default(), &config);
            assert!(matches!(result, Err(SlopeOneError::Configuration(_))));
        }
    }

    #[test]
    fn test_disjoint_items_yield_no_predictions() {
        // Test users rate items the training users never saw
        let users: Vec<UserRatings<u64>> = (0..4)
            .map(|u| [(u * 10, 1.0), (u * 10 + 1, 2.0)].into_iter().collect())
            .collect();
        let config = EvaluationConfig::new().with_test_fraction(0.25);
        let result = evaluate_holdout(&users, &PredictorConfig::default(), &config);
        assert!(matches!(
            result,
            Err(SlopeOneError::NoPredictions { attempted: 2 })
        ));
    }

    #[test]
    fn test_sparse_test_users_skipped() {
        let users: Vec<UserRatings<u64>> = (0..4)
            .map(|_| [(1, 3.0)].into_iter().collect())
            .collect();
        let result =
            evaluate_holdout(&users, &PredictorConfig::default(), &EvaluationConfig::default());
        assert!(matches!(
            result,
            Err(SlopeOneError::NoPredictions { attempted: 0 })
        ));
    }
}
