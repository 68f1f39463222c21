//! Top-N recommendations

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::predictor::Predictor;
use crate::model::{ItemKey, UserRatings};

/// A predicted rating for an item the user has not rated
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation<I> {
    /// Recommended item
    pub item: I,
    /// Predicted rating
    pub rating: f64,
}

impl<I: ItemKey> Recommendation<I> {
    /// Highest rating first, ties by ascending item
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .rating
            .total_cmp(&self.rating)
            .then_with(|| self.item.cmp(&other.item))
    }
}

impl<'a, I: ItemKey> Predictor<'a, I> {
    /// The `n` unrated items with the highest predicted rating
    pub fn recommend(&self, query: &UserRatings<I>, n: usize) -> Vec<Recommendation<I>> {
        if n == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<Recommendation<I>> = self
            .predict(query)
            .into_iter()
            .map(|(item, rating)| Recommendation { item, rating })
            .collect();
        ranked.sort_by(Recommendation::rank_cmp);
        ranked.truncate(n);
        ranked
    }
}
