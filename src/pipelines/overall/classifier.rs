use std::sync::Arc;

use serde::Serialize;

use super::model::StarRatingModel;
use crate::core::{FineSentiment, SentimentLabel};
use crate::error::{Result, SentimentError};

/// Which tier produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTier {
    Keyword,
    Model,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallVerdict {
    pub sentiment: FineSentiment,
    pub tier: VerdictTier,
}

impl OverallVerdict {
    /// Two-class view of the verdict; "neutral" reads as positive.
    pub fn label(&self) -> SentimentLabel {
        self.sentiment.label()
    }
}

/// Quick whole-review verdict: keyword heuristic first, star-rating model
/// only when no keyword matches.
///
/// Keywords match as lower-case substrings. Positive keywords are checked
/// before negative ones, so a text containing both is positive.
#[derive(Clone)]
pub struct OverallSentimentClassifier {
    positive_keywords: Vec<String>,
    negative_keywords: Vec<String>,
    model: Option<Arc<dyn StarRatingModel>>,
}

impl OverallSentimentClassifier {
    pub fn new(
        positive_keywords: &[String],
        negative_keywords: &[String],
        model: Option<Arc<dyn StarRatingModel>>,
    ) -> Self {
        Self {
            positive_keywords: lowercase_all(positive_keywords),
            negative_keywords: lowercase_all(negative_keywords),
            model,
        }
    }

    pub fn classify(&self, text: &str) -> Result<OverallVerdict> {
        if let Some(label) = self.keyword_verdict(text) {
            return Ok(OverallVerdict {
                sentiment: label.into(),
                tier: VerdictTier::Keyword,
            });
        }

        let model = self.model.as_ref().ok_or_else(|| {
            SentimentError::ModelUnavailable("no keyword matched and no fallback model".into())
        })?;
        let distribution = model.star_distribution(text)?;
        let stars = argmax(&distribution).map_or(0, |index| index + 1);
        tracing::debug!(stars, "keyword tier inconclusive, used star-rating model");

        Ok(OverallVerdict {
            sentiment: FineSentiment::from_stars(stars),
            tier: VerdictTier::Model,
        })
    }

    fn keyword_verdict(&self, text: &str) -> Option<SentimentLabel> {
        let text = text.to_lowercase();
        if self.positive_keywords.iter().any(|w| text.contains(w.as_str())) {
            Some(SentimentLabel::Positive)
        } else if self.negative_keywords.iter().any(|w| text.contains(w.as_str())) {
            Some(SentimentLabel::Negative)
        } else {
            None
        }
    }
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn argmax(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, score)| !score.is_nan())
        .fold(None, |best: Option<(usize, f32)>, (index, &score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((index, score)),
        })
        .map(|(index, _)| index)
}
