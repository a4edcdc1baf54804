use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::labels::SentimentLabel;
use crate::error::{Result, SentimentError};

/// How a batch reacts to rows without review text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// Any invalid row voids the whole batch; only the row errors are reported.
    #[default]
    Strict,
    /// Valid rows are returned alongside the row errors.
    Partial,
}

/// Runtime configuration for a review pipeline.
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Known aspects, in the order mentions are reported.
    pub aspects: Vec<String>,
    pub positive_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
    /// Label given to aspect predictions that are neither positive nor negative.
    pub aspect_fallback_label: SentimentLabel,
    pub batch_mode: BatchMode,
    pub target_language: String,
    pub translation_endpoint: String,
    pub translation_timeout_secs: u64,
    /// Treat low-confidence language detections as failures.
    pub require_reliable_detection: bool,
    pub max_sequence_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            aspects: to_strings(&["battery", "camera", "delivery", "screen", "price"]),
            positive_keywords: to_strings(&[
                "excellent",
                "best",
                "amazing",
                "fantastic",
                "wonderful",
                "awesome",
                "love",
                "perfect",
                "nice",
                "good",
                "great",
                "pleasant",
                "satisfied",
                "favorite",
                "recommend",
                "happy",
                "delightful",
                "superb",
                "brilliant",
                "positive",
            ]),
            negative_keywords: to_strings(&[
                "bad",
                "worst",
                "terrible",
                "awful",
                "hate",
                "poor",
                "disappointed",
                "broken",
                "sad",
                "unhappy",
                "dislike",
                "horrible",
                "negative",
                "problem",
                "buggy",
            ]),
            aspect_fallback_label: SentimentLabel::Positive,
            batch_mode: BatchMode::Strict,
            target_language: "en".to_string(),
            translation_endpoint: "https://translate.googleapis.com/translate_a/single"
                .to_string(),
            translation_timeout_secs: 10,
            require_reliable_detection: false,
            max_sequence_length: 512,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SentimentError::Config(format!("Failed to read config file {path:?}: {e}"))
        })?;
        Self::from_json_str(&content)
    }

    pub fn translation_timeout(&self) -> Duration {
        Duration::from_secs(self.translation_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.target_language.trim().is_empty() {
            return Err(SentimentError::Config(
                "target_language must not be empty".into(),
            ));
        }
        if self.translation_timeout_secs == 0 {
            return Err(SentimentError::Config(
                "translation_timeout_secs must be positive".into(),
            ));
        }
        if self.max_sequence_length == 0 {
            return Err(SentimentError::Config(
                "max_sequence_length must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
