//! Difference model
//!
//! Training folds user rating sets into pairwise difference statistics.

pub mod difference;
pub mod item;

pub use difference::{DifferenceModel, PairStats};
pub use item::{user_ratings, ItemKey, UserRatings};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::difference::{DifferenceModel, PairStats};
    pub use super::item::{user_ratings, ItemKey, UserRatings};
}
