//! Deterministic stand-ins for the models and language services.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use review_sentiment::pipelines::aspects::AspectSentimentModel;
use review_sentiment::pipelines::language::{LanguageDetector, Translator};
use review_sentiment::pipelines::overall::StarRatingModel;
use review_sentiment::{PipelineConfig, ReviewPipelineBuilder, SentimentError};

/// Reports a fixed language, or fails when `None`.
pub struct FixedDetector(pub Option<&'static str>);

impl LanguageDetector for FixedDetector {
    fn detect(&self, _text: &str) -> review_sentiment::Result<String> {
        self.0
            .map(str::to_string)
            .ok_or_else(|| SentimentError::Detection("no language features".into()))
    }
}

/// Returns a canned translation, or fails when `None`.
#[derive(Default)]
pub struct CannedTranslator {
    pub output: Option<&'static str>,
    pub calls: AtomicUsize,
}

impl CannedTranslator {
    pub fn returning(output: &'static str) -> Self {
        Self {
            output: Some(output),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Translator for CannedTranslator {
    fn translate(&self, _text: &str, source: &str, _target: &str) -> review_sentiment::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.output
            .map(str::to_string)
            .ok_or_else(|| SentimentError::Translation(format!("timed out translating {source}")))
    }
}

/// "bad" → negative, "great"/"good" → positive, anything else → neutral.
pub struct WordAspectModel;

impl AspectSentimentModel for WordAspectModel {
    fn predict_label(&self, sentence: &str) -> review_sentiment::Result<String> {
        let sentence = sentence.to_lowercase();
        let label = if sentence.contains("bad") {
            "negative"
        } else if sentence.contains("great") || sentence.contains("good") {
            "positive"
        } else {
            "neutral"
        };
        Ok(label.to_string())
    }
}

/// Always fails, to check that model errors propagate.
pub struct FailingAspectModel;

impl AspectSentimentModel for FailingAspectModel {
    fn predict_label(&self, _sentence: &str) -> review_sentiment::Result<String> {
        Err(SentimentError::Inference("aspect model crashed".into()))
    }
}

/// Fixed star distribution; counts how often it is consulted.
pub struct FixedStarModel {
    pub distribution: Vec<f32>,
    pub calls: AtomicUsize,
}

impl FixedStarModel {
    pub fn new(distribution: &[f32]) -> Self {
        Self {
            distribution: distribution.to_vec(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StarRatingModel for FixedStarModel {
    fn star_distribution(&self, _text: &str) -> review_sentiment::Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.distribution.clone())
    }
}

/// English-only pipeline over the default config with the word-based aspect model.
pub fn english_builder() -> ReviewPipelineBuilder {
    ReviewPipelineBuilder::new()
        .config(PipelineConfig::default())
        .detector(Arc::new(FixedDetector(Some("en"))))
        .translator(Arc::new(CannedTranslator::failing()))
        .aspect_model(Arc::new(WordAspectModel))
        .cpu()
}
