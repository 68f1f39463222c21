//! # slope-one
//!
//! Weighted Slope One item-item collaborative filtering for Rust.
//!
//! Slope One learns the average rating offset between every pair of items that
//! users rated together, then predicts a user's rating for an unseen item by
//! shifting the user's own ratings by those offsets. See Lemire and
//! Maclachlan, *Slope One Predictors for Online Rating-Based Collaborative
//! Filtering* (2005).
//!
//! ## Core Concepts
//!
//! - **Difference model**: sparse pairwise co-occurrence counts and raw
//!   difference sums; means are derived on read, so training may be repeated
//! - **Predictor**: borrows a trained model and projects a query user's known
//!   ratings onto every co-rated item
//! - **Diagnostics**: model summaries and holdout evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use slope_one::prelude::*;
//!
//! let mut model = DifferenceModel::new();
//! model.train(&[
//!     user_ratings([(2005u64, 2.4), (5513, 1.3), (13035, 2.0)]),
//!     user_ratings([(5513, 4.0), (359602, 5.0), (13035, 1.5), (29074, 4.0)]),
//!     user_ratings([(29074, 4.3), (359602, 2.5), (2005, 5.0)]),
//! ]);
//!
//! let predictor = Predictor::new(&model);
//! let predictions = predictor.predict(&user_ratings([(2005, 2.0), (29074, 3.2)]));
//!
//! assert_eq!(predictions.len(), 3);
//! assert!((predictions[&359602] - 1.7).abs() < 1e-9);
//! ```

pub mod data;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod predict;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::data::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::model::prelude::*;
    pub use crate::predict::prelude::*;
}
