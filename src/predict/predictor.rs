//! Slope One rating prediction
//!
//! For each item `i` the query user rated with `r`, every other known item `g`
//! that co-occurred with `i` gets the candidate rating `diff(g, i) + r`. The
//! candidates for `g` are averaged, weighted by how well supported each pair is.

use std::collections::HashMap;

use tracing::trace;

use super::config::PredictorConfig;
use crate::error::SlopeOneResult;
use crate::model::{DifferenceModel, ItemKey, UserRatings};

/// Running weighted sum for one predicted item
#[derive(Clone, Copy, Debug, Default)]
struct Accumulator {
    weighted_sum: f64,
    weight: f64,
}

impl Accumulator {
    fn add(&mut self, weight: f64, candidate: f64) {
        self.weighted_sum += weight * candidate;
        self.weight += weight;
    }

    fn value(&self) -> f64 {
        self.weighted_sum / self.weight
    }
}

/// Predicts unseen ratings from a trained model
///
/// Borrows the model, so the model cannot be retrained while a predictor is
/// alive. Any number of predictors may share one model.
#[derive(Clone, Debug)]
pub struct Predictor<'a, I: ItemKey> {
    model: &'a DifferenceModel<I>,
    config: PredictorConfig,
}

impl<'a, I: ItemKey> Predictor<'a, I> {
    /// Create a weighted Slope One predictor
    pub fn new(model: &'a DifferenceModel<I>) -> Self {
        Self {
            model,
            config: PredictorConfig::default(),
        }
    }

    /// Create a predictor with a custom configuration
    pub fn with_config(
        model: &'a DifferenceModel<I>,
        config: PredictorConfig,
    ) -> SlopeOneResult<Self> {
        config.validate()?;
        Ok(Self { model, config })
    }

    /// The underlying model
    pub fn model(&self) -> &'a DifferenceModel<I> {
        self.model
    }

    /// The active configuration
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Predict ratings for every known item the user has not rated
    ///
    /// Items without any supporting pair are absent from the result, as are all
    /// items present in `query`.
    pub fn predict(&self, query: &UserRatings<I>) -> HashMap<I, f64> {
        let mut accumulators: HashMap<I, Accumulator> = HashMap::new();

        for (item, rating) in sorted_ratings(query) {
            for other in self.model.items() {
                if other == item {
                    continue;
                }
                if let Some((weight, candidate)) = self.candidate(other, item, rating) {
                    accumulators.entry(other).or_default().add(weight, candidate);
                }
            }
        }

        let predictions: HashMap<I, f64> = accumulators
            .into_iter()
            .filter(|(item, _)| !query.contains_key(item))
            .map(|(item, acc)| (item, acc.value()))
            .collect();

        trace!(
            query = query.len(),
            predicted = predictions.len(),
            "slope one prediction"
        );
        predictions
    }

    /// Predict a single item, or None if it is rated or unsupported
    pub fn predict_item(&self, query: &UserRatings<I>, target: I) -> Option<f64> {
        if query.contains_key(&target) {
            return None;
        }

        let mut acc = Accumulator::default();
        for (item, rating) in sorted_ratings(query) {
            if item == target {
                continue;
            }
            if let Some((weight, candidate)) = self.candidate(target, item, rating) {
                acc.add(weight, candidate);
            }
        }

        (acc.weight > 0.0).then(|| acc.value())
    }

    /// Weight and candidate rating for `target` projected from a known rating
    fn candidate(&self, target: I, known: I, rating: f64) -> Option<(f64, f64)> {
        let stats = self.model.stats(target, known)?;
        if stats.count < self.config.min_support {
            return None;
        }
        let diff = stats.mean()?;
        Some((self.config.weighting.weight(stats.count), diff + rating))
    }
}

/// Query ratings in ascending item order, so the summation order is fixed
fn sorted_ratings<I: ItemKey>(query: &UserRatings<I>) -> Vec<(I, f64)> {
    let mut ratings: Vec<(I, f64)> = query.iter().map(|(&i, &r)| (i, r)).collect();
    ratings.sort_by_key(|(item, _)| *item);
    ratings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlopeOneError;
    use crate::model::user_ratings;
    use crate::predict::config::Weighting;
    use approx::assert_relative_eq;

    fn canonical_model() -> DifferenceModel<u64> {
        DifferenceModel::from_users(&[
            user_ratings([(2005, 2.4), (5513, 1.3), (13035, 2.0)]),
            user_ratings([(5513, 4.0), (359602, 5.0), (13035, 1.5), (29074, 4.0)]),
            user_ratings([(29074, 4.3), (359602, 2.5), (2005, 5.0)]),
        ])
    }

    fn canonical_query() -> UserRatings<u64> {
        user_ratings([(2005, 2.0), (29074, 3.2)])
    }

    #[test]
    fn test_canonical_predictions() {
        let model = canonical_model();
        let predictions = Predictor::new(&model).predict(&canonical_query());

        assert_eq!(predictions.len(), 3);
        assert_relative_eq!(predictions[&5513], 2.05, epsilon = 1e-9);
        assert_relative_eq!(predictions[&13035], 1.15, epsilon = 1e-9);
        assert_relative_eq!(predictions[&359602], 1.7, epsilon = 1e-9);
    }

    #[test]
    fn test_known_items_excluded() {
        let model = canonical_model();
        let query = canonical_query();
        let predictions = Predictor::new(&model).predict(&query);

        for item in query.keys() {
            assert!(!predictions.contains_key(item));
        }
    }

    #[test]
    fn test_empty_query() {
        let model = canonical_model();
        assert!(Predictor::new(&model).predict(&UserRatings::new()).is_empty());
    }

    #[test]
    fn test_empty_model() {
        let model = DifferenceModel::<u64>::new();
        assert!(Predictor::new(&model).predict(&canonical_query()).is_empty());
    }

    #[test]
    fn test_unknown_query_item_ignored() {
        let model = canonical_model();
        let predictor = Predictor::new(&model);

        let mut with_unknown = canonical_query();
        with_unknown.insert(999_999, 1.0);

        assert_eq!(
            predictor.predict(&canonical_query()),
            predictor.predict(&with_unknown)
        );
    }

    #[test]
    fn test_no_cooccurrence_isolated() {
        let mut model = canonical_model();
        model.add_user(&user_ratings([(7, 3.0), (8, 4.0)]));

        let predictions = Predictor::new(&model).predict(&canonical_query());
        assert!(!predictions.contains_key(&7));
        assert!(!predictions.contains_key(&8));
    }

    #[test]
    fn test_predict_item_matches_predict() {
        let model = canonical_model();
        let predictor = Predictor::new(&model);
        let query = canonical_query();
        let predictions = predictor.predict(&query);

        for (&item, &value) in &predictions {
            assert_relative_eq!(predictor.predict_item(&query, item).unwrap(), value);
        }
        assert_eq!(predictor.predict_item(&query, 2005), None);
        assert_eq!(predictor.predict_item(&query, 424242), None);
    }

    #[test]
    fn test_uniform_weighting() {
        let model = canonical_model();
        let config = PredictorConfig::new().with_weighting(Weighting::Uniform);
        let predictions = Predictor::with_config(&model, config)
            .unwrap()
            .predict(&canonical_query());

        // (2.5 - 5.0 + 2.0) and ((1.0 - 1.8) / 2 + 3.2), averaged unweighted
        assert_relative_eq!(predictions[&359602], 1.15, epsilon = 1e-9);
        assert_relative_eq!(predictions[&5513], 2.05, epsilon = 1e-9);
    }

    #[test]
    fn test_min_support_filters_weak_pairs() {
        let model = canonical_model();
        let config = PredictorConfig::new().with_min_support(2);
        let predictions = Predictor::with_config(&model, config)
            .unwrap()
            .predict(&canonical_query());

        // Only (359602, 29074) was seen twice
        assert_eq!(predictions.len(), 1);
        assert_relative_eq!(predictions[&359602], 2.8, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let model = canonical_model();
        let config = PredictorConfig::new().with_min_support(0);
        assert!(matches!(
            Predictor::with_config(&model, config),
            Err(SlopeOneError::Configuration(_))
        ));
    }

    #[test]
    fn test_repeated_prediction_identical() {
        let model = canonical_model();
        let predictor = Predictor::new(&model);
        let query = canonical_query();
        assert_eq!(predictor.predict(&query), predictor.predict(&query));
    }
}
