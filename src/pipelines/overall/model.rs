use crate::error::Result;

/// A pre-trained model scoring text on an ordinal 1..=5 star scale.
pub trait StarRatingModel: Send + Sync {
    /// Scores for each star class, lowest star first. Only the argmax is used,
    /// so the values need not be normalized.
    fn star_distribution(&self, text: &str) -> Result<Vec<f32>>;
}
