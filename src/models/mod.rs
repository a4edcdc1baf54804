//! Model implementations consumed by the pipelines.
//!
//! - [`BertStarRatingModel`] - multilingual BERT scoring reviews on a 1..=5 star scale
//! - [`TfidfLogisticModel`] - classical TF-IDF + logistic regression sentence classifier

pub mod bert;
pub mod bert_sentiment;
pub mod tfidf;

pub use bert_sentiment::{BertStarOptions, BertStarRatingModel};
pub use tfidf::{TfidfArtifact, TfidfLogisticModel};
