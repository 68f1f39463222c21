//! Pairwise rating-difference model
//!
//! The model stores, for every ordered pair of items that appeared together in
//! some user's ratings, how often that happened and the raw sum of rating
//! differences. Means are derived on read, so training can be repeated any
//! number of times without ever dividing an already averaged value again.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::item::{ItemKey, UserRatings};

/// Statistics for one ordered item pair `(a, b)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PairStats {
    /// Number of users who rated both items
    pub count: usize,
    /// Sum of `rating(a) - rating(b)` over those users
    pub sum: f64,
}

impl PairStats {
    /// Fold one observed difference into the accumulators
    pub fn observe(&mut self, diff: f64) {
        self.count += 1;
        self.sum += diff;
    }

    /// Fold another set of accumulators into this one
    pub fn absorb(&mut self, other: &PairStats) {
        self.count += other.count;
        self.sum += other.sum;
    }

    /// Mean difference, or None if the pair was never observed
    pub fn mean(&self) -> Option<f64> {
        if self.count > 0 {
            Some(self.sum / self.count as f64)
        } else {
            None
        }
    }
}

/// Sparse item-item difference model
///
/// Keyed by the composite pair `(a, b)`. Self pairs are never stored; every
/// item that appeared in training is still tracked as known.
#[derive(Clone, Debug)]
pub struct DifferenceModel<I: ItemKey> {
    pairs: HashMap<(I, I), PairStats>,
    items: BTreeSet<I>,
    users_seen: usize,
}

impl<I: ItemKey> Default for DifferenceModel<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ItemKey> DifferenceModel<I> {
    /// Create an empty model
    pub fn new() -> Self {
        Self {
            pairs: HashMap::new(),
            items: BTreeSet::new(),
            users_seen: 0,
        }
    }

    /// Build a model from a single batch of users
    pub fn from_users(users: &[UserRatings<I>]) -> Self {
        let mut model = Self::new();
        model.train(users);
        model
    }

    /// Fold a batch of users into the model
    ///
    /// Safe to call repeatedly: the result after several calls is the same as a
    /// single call on the concatenated batches.
    pub fn train(&mut self, users: &[UserRatings<I>]) {
        let pairs_before = self.pairs.len();
        for user in users {
            self.add_user(user);
        }
        debug!(
            users = users.len(),
            new_pairs = self.pairs.len() - pairs_before,
            pairs = self.pairs.len(),
            items = self.items.len(),
            "trained difference model batch"
        );
    }

    /// Fold one user's ratings into the model
    pub fn add_user(&mut self, user: &UserRatings<I>) {
        if user.is_empty() {
            return;
        }
        self.users_seen += 1;
        for (&a, &ra) in user {
            self.items.insert(a);
            for (&b, &rb) in user {
                if a == b {
                    continue;
                }
                self.pairs.entry((a, b)).or_default().observe(ra - rb);
            }
        }
    }

    /// Fold another model's accumulators into this one
    ///
    /// Equivalent (up to floating-point summation order) to having trained this
    /// model on the other model's users as well.
    pub fn merge(&mut self, other: &DifferenceModel<I>) {
        for (key, stats) in &other.pairs {
            self.pairs.entry(*key).or_default().absorb(stats);
        }
        self.items.extend(other.items.iter().copied());
        self.users_seen += other.users_seen;
        debug!(
            merged_pairs = other.pairs.len(),
            pairs = self.pairs.len(),
            items = self.items.len(),
            "merged difference models"
        );
    }

    /// Statistics for the ordered pair `(a, b)`
    pub fn stats(&self, a: I, b: I) -> Option<&PairStats> {
        self.pairs.get(&(a, b))
    }

    /// Number of users who rated both `a` and `b`
    pub fn count(&self, a: I, b: I) -> usize {
        self.stats(a, b).map_or(0, |s| s.count)
    }

    /// Mean of `rating(a) - rating(b)`, defined iff the pair co-occurred
    pub fn diff(&self, a: I, b: I) -> Option<f64> {
        self.stats(a, b).and_then(PairStats::mean)
    }

    /// Raw accumulated difference sum for `(a, b)`
    pub fn raw_sum(&self, a: I, b: I) -> f64 {
        self.stats(a, b).map_or(0.0, |s| s.sum)
    }

    /// All items seen in training, in ascending order
    pub fn items(&self) -> impl Iterator<Item = I> + '_ {
        self.items.iter().copied()
    }

    /// Whether the item appeared in training
    pub fn contains_item(&self, item: I) -> bool {
        self.items.contains(&item)
    }

    /// Iterate over every stored pair
    pub fn pairs(&self) -> impl Iterator<Item = ((I, I), &PairStats)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v))
    }

    /// Number of known items
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Number of stored ordered pairs
    pub fn num_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Number of non-empty rating sets folded in
    pub fn users_seen(&self) -> usize {
        self.users_seen
    }

    /// Whether nothing has been trained yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
