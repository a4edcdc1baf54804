//! Quick whole-review verdict.
//!
//! A keyword heuristic answers first; only texts matching no keyword reach the
//! [`StarRatingModel`], whose 1..=5 argmax is mapped onto [`FineSentiment`](crate::core::FineSentiment).

pub mod classifier;
pub mod model;

pub use classifier::{OverallSentimentClassifier, OverallVerdict, VerdictTier};
pub use model::StarRatingModel;
