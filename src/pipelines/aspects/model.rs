use crate::error::Result;

/// A classifier that labels a single aspect sentence.
///
/// Implementations receive the sentence as written; any preprocessing is the
/// model's own business. Labels other than "positive"/"negative" are allowed
/// and are mapped by [`AspectSentimentClassifier`](super::AspectSentimentClassifier).
pub trait AspectSentimentModel: Send + Sync {
    fn predict_label(&self, sentence: &str) -> Result<String>;
}
