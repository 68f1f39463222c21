//! Item keys and user rating sets

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a rated item
///
/// Items carry no meaning beyond identity. Any small, totally ordered, hashable
/// key works; integer ids are the common case.
pub trait ItemKey: Copy + Eq + Hash + Ord + Debug {}

impl<T> ItemKey for T where T: Copy + Eq + Hash + Ord + Debug {}

/// One user's known ratings, keyed by item
pub type UserRatings<I> = HashMap<I, f64>;

/// Build a rating set from `(item, rating)` pairs
///
/// Later pairs overwrite earlier ones for the same item.
pub fn user_ratings<I, T>(pairs: T) -> UserRatings<I>
where
    I: ItemKey,
    T: IntoIterator<Item = (I, f64)>,
{
    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_ratings_from_pairs() {
        let ratings = user_ratings([(1u64, 2.5), (2, 4.0)]);
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[&1], 2.5);
    }

    #[test]
    fn test_user_ratings_last_write_wins() {
        let ratings = user_ratings([(7u32, 1.0), (7, 3.0)]);
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[&7], 3.0);
    }

    #[test]
    fn test_string_keys_are_items() {
        let ratings = user_ratings([("dune", 4.5), ("alien", 3.0)]);
        assert_eq!(ratings[&"dune"], 4.5);
    }
}
