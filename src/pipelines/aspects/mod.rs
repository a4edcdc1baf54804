//! Aspect-level sentiment: find the sentences that mention each known aspect,
//! label each with a dedicated model and reduce the labels to one verdict.
//!
//! ## Main Types
//!
//! - [`AspectExtractor`] - splits a review into per-aspect sentences
//! - [`AspectSentimentClassifier`] - labels each sentence through an [`AspectSentimentModel`]
//! - [`aggregate`] - majority rule over the per-aspect labels

pub mod aggregate;
pub mod classifier;
pub mod extractor;
pub mod model;

pub use aggregate::aggregate;
pub use classifier::AspectSentimentClassifier;
pub use extractor::{AspectExtractor, AspectVocabulary};
pub use model::AspectSentimentModel;
