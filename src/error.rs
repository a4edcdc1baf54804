use thiserror::Error;

use crate::pipelines::review::RowError;

#[derive(Error, Debug)]
pub enum SentimentError {
    // Input validation
    #[error("Review text not provided")]
    MissingReviewText,

    #[error("Invalid rows: {}", format_row_errors(.0))]
    InvalidRows(Vec<RowError>),

    // Model loading
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Invalid model format: {0}")]
    ModelFormat(String),

    #[error("No star-rating model configured: {0}")]
    ModelUnavailable(String),

    #[error("Model cache error: {0}")]
    Cache(String),

    // Tokenization
    #[error("Tokenizer not found: {0}")]
    TokenizerNotFound(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    // Inference
    #[error("Inference failed: {0}")]
    Inference(String),

    // Language normalization
    #[error("Language detection failed: {0}")]
    Detection(String),

    #[error("Translation failed: {0}")]
    Translation(String),

    // Network/Download
    #[error("Download failed: {0}")]
    Download(String),

    // Device
    #[error("Device error: {0}")]
    Device(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("History store error: {0}")]
    History(String),

    // Pass-through from dependencies
    #[error(transparent)]
    Candle(#[from] candle_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SentimentError>;

fn format_row_errors(errors: &[RowError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<hf_hub::api::sync::ApiError> for SentimentError {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        SentimentError::Download(value.to_string())
    }
}

impl From<reqwest::Error> for SentimentError {
    fn from(value: reqwest::Error) -> Self {
        SentimentError::Translation(value.to_string())
    }
}

impl From<regex::Error> for SentimentError {
    fn from(value: regex::Error) -> Self {
        SentimentError::ModelFormat(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_rows_message_lists_every_row() {
        let err = SentimentError::InvalidRows(vec![
            RowError::missing_text(2),
            RowError::missing_text(5),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid rows: Row 2: Review text missing; Row 5: Review text missing"
        );
    }
}
