//! Synthetic rating corpora
//!
//! Each item has a latent quality and each user a latent bias. A user rates a
//! random subset of items at `quality + bias + noise`, clamped to the rating
//! range. Generation is fully determined by the seed.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{SlopeOneError, SlopeOneResult};
use crate::model::UserRatings;

/// Configuration for synthetic corpus generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Number of users
    pub num_users: usize,
    /// Number of items, identified as `0..num_items`
    pub num_items: usize,
    /// Distinct items rated by each user
    pub ratings_per_user: usize,
    /// Lowest possible rating
    pub min_rating: f64,
    /// Highest possible rating
    pub max_rating: f64,
    /// Standard deviation of per-rating noise
    pub noise_std: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            num_users: 200,
            num_items: 40,
            ratings_per_user: 10,
            min_rating: 1.0,
            max_rating: 5.0,
            noise_std: 0.3,
            seed: 42,
        }
    }
}

impl SyntheticConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of users
    pub fn with_users(mut self, num_users: usize) -> Self {
        self.num_users = num_users;
        self
    }

    /// Set the number of items
    pub fn with_items(mut self, num_items: usize) -> Self {
        self.num_items = num_items;
        self
    }

    /// Set the number of ratings per user
    pub fn with_ratings_per_user(mut self, ratings_per_user: usize) -> Self {
        self.ratings_per_user = ratings_per_user;
        self
    }

    /// Set the rating range
    pub fn with_range(mut self, min_rating: f64, max_rating: f64) -> Self {
        self.min_rating = min_rating;
        self.max_rating = max_rating;
        self
    }

    /// Set the noise level
    pub fn with_noise(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> SlopeOneResult<()> {
        if self.num_users == 0 || self.num_items == 0 {
            return Err(SlopeOneError::EmptyDataset(format!(
                "need users and items, got {} users and {} items",
                self.num_users, self.num_items
            )));
        }
        if self.ratings_per_user > self.num_items {
            return Err(SlopeOneError::Configuration(format!(
                "ratings_per_user ({}) exceeds num_items ({})",
                self.ratings_per_user, self.num_items
            )));
        }
        if !(self.min_rating < self.max_rating) {
            return Err(SlopeOneError::Configuration(format!(
                "rating range [{}, {}] is empty",
                self.min_rating, self.max_rating
            )));
        }
        if !(self.max_rating - self.min_rating).is_finite() {
            return Err(SlopeOneError::Configuration(format!(
                "rating range [{}, {}] must be finite",
                self.min_rating, self.max_rating
            )));
        }
        if !(self.noise_std >= 0.0 && self.noise_std.is_finite()) {
            return Err(SlopeOneError::Configuration(format!(
                "noise_std must be finite and non-negative, got {}",
                self.noise_std
            )));
        }
        Ok(())
    }
}

/// A generated corpus together with its latent item qualities
#[derive(Clone, Debug)]
pub struct SyntheticRatings {
    users: Vec<UserRatings<u64>>,
    item_quality: Vec<f64>,
}

impl SyntheticRatings {
    /// Generate a corpus
    pub fn generate(config: &SyntheticConfig) -> SlopeOneResult<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let span = config.max_rating - config.min_rating;

        let item_quality: Vec<f64> = (0..config.num_items)
            .map(|_| rng.gen_range(config.min_rating..=config.max_rating))
            .collect();

        let bias = Normal::new(0.0, span / 8.0)
            .map_err(|e| SlopeOneError::Configuration(format!("user bias: {e}")))?;
        let noise = Normal::new(0.0, config.noise_std)
            .map_err(|e| SlopeOneError::Configuration(format!("rating noise: {e}")))?;

        let users: Vec<UserRatings<u64>> = (0..config.num_users)
            .map(|_| {
                let user_bias = bias.sample(&mut rng);
                index::sample(&mut rng, config.num_items, config.ratings_per_user)
                    .into_iter()
                    .map(|item| {
                        let raw = item_quality[item] + user_bias + noise.sample(&mut rng);
                        (item as u64, raw.clamp(config.min_rating, config.max_rating))
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            users,
            item_quality,
        })
    }

    /// The generated users
    pub fn users(&self) -> &[UserRatings<u64>] {
        &self.users
    }

    /// Take ownership of the generated users
    pub fn into_users(self) -> Vec<UserRatings<u64>> {
        self.users
    }

    /// Latent quality of an item
    pub fn item_quality(&self, item: u64) -> Option<f64> {
        usize::try_from(item)
            .ok()
            .and_then(|idx| self.item_quality.get(idx).copied())
    }
}
