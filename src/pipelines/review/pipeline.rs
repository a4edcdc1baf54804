use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use super::batch::{BatchOutput, BatchResult, BatchRow, BatchSummary, RowError};
use crate::core::{AspectSentimentMap, BatchMode, Review, SentimentLabel};
use crate::error::{Result, SentimentError};
use crate::history::{HistoryRecord, HistoryStore};
use crate::pipelines::aspects::{aggregate, AspectExtractor, AspectSentimentClassifier};
use crate::pipelines::language::{LanguageNormalizer, Normalization};
use crate::pipelines::overall::{OverallSentimentClassifier, OverallVerdict};

/// Outcome of analysing one review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    /// Majority of the aspect labels; the sentiment of record.
    pub overall: SentimentLabel,
    pub aspects: AspectSentimentMap,
    pub detected_language: String,
    pub original_text: String,
    /// Text the aspects were extracted from (translated when possible).
    pub normalized_text: String,
    pub normalization: Normalization,
}

/// Aspect-based sentiment analysis over single reviews and batches.
///
/// Construct with [`ReviewPipelineBuilder`](super::ReviewPipelineBuilder).
/// The pipeline holds only shared, read-only handles, so one instance can be
/// wrapped in an `Arc` and used from many threads.
///
/// # Examples
///
/// ```rust,no_run
/// use review_sentiment::pipelines::review::ReviewPipelineBuilder;
///
/// # fn main() -> review_sentiment::Result<()> {
/// let pipeline = ReviewPipelineBuilder::new()
///     .aspect_model_file("models/aspect_model.json")
///     .cpu()
///     .build()?;
///
/// let result = pipeline.run("The battery is bad. The screen is great.")?;
/// println!("{} {:?}", result.overall, result.aspects);
/// # Ok(())
/// # }
/// ```
pub struct ReviewPipeline {
    pub(crate) normalizer: LanguageNormalizer,
    pub(crate) extractor: AspectExtractor,
    pub(crate) aspect_classifier: AspectSentimentClassifier,
    pub(crate) overall_classifier: OverallSentimentClassifier,
    pub(crate) batch_mode: BatchMode,
    pub(crate) history: Option<Arc<dyn HistoryStore>>,
}

impl ReviewPipeline {
    /// Analyse one review.
    ///
    /// Fails with [`SentimentError::MissingReviewText`] on empty input and
    /// propagates model errors; language problems only degrade the result.
    pub fn run(&self, review: impl Into<Review>) -> Result<PipelineResult> {
        self.analyse(&review.into(), None)
    }

    /// Like [`run`](Self::run), and records the result for `user` in the
    /// configured history store.
    pub fn run_for(&self, user: &str, review: impl Into<Review>) -> Result<PipelineResult> {
        self.analyse(&review.into(), Some(user))
    }

    /// Analyse rows independently, in order.
    ///
    /// Rows without review text become [`RowError`]s. In
    /// [`BatchMode::Strict`] any such row fails the whole batch with
    /// [`SentimentError::InvalidRows`] and the successful rows are discarded;
    /// in [`BatchMode::Partial`] both are returned. A model error aborts the
    /// batch in either mode.
    pub fn run_batch(&self, rows: &[BatchRow]) -> Result<BatchOutput> {
        self.analyse_batch(rows, None)
    }

    /// Like [`run_batch`](Self::run_batch), recording each analysed row for
    /// `user` as it completes, before the batch is accepted or rejected.
    pub fn run_batch_for(&self, user: &str, rows: &[BatchRow]) -> Result<BatchOutput> {
        self.analyse_batch(rows, Some(user))
    }

    /// Keyword-then-model verdict on the normalized text, independent of aspects.
    pub fn quick_verdict(&self, review: impl Into<Review>) -> Result<OverallVerdict> {
        let review = review.into();
        if review.raw_text().is_empty() {
            return Err(SentimentError::MissingReviewText);
        }
        let normalized = self.normalizer.normalize_review(&review);
        self.overall_classifier.classify(&normalized.text)
    }

    pub fn batch_mode(&self) -> BatchMode {
        self.batch_mode
    }

    fn analyse(&self, review: &Review, user: Option<&str>) -> Result<PipelineResult> {
        if review.raw_text().is_empty() {
            return Err(SentimentError::MissingReviewText);
        }

        let normalized = self.normalizer.normalize_review(review);
        let mentions = self.extractor.extract(&normalized.text);
        let aspects = self.aspect_classifier.classify_mentions(&mentions)?;
        let overall = aggregate(aspects.values());

        tracing::debug!(
            language = %normalized.language,
            aspects = aspects.len(),
            %overall,
            "review analysed"
        );

        let result = PipelineResult {
            overall,
            aspects,
            detected_language: normalized.language,
            original_text: review.raw_text().to_string(),
            normalized_text: normalized.text,
            normalization: normalized.outcome,
        };

        if let (Some(user), Some(history)) = (user, &self.history) {
            history.append(HistoryRecord {
                user: user.to_string(),
                review_text: result.original_text.clone(),
                sentiment: result.overall,
                aspects: result.aspects.clone(),
                created_at: Utc::now(),
            })?;
        }

        Ok(result)
    }

    fn analyse_batch(&self, rows: &[BatchRow], user: Option<&str>) -> Result<BatchOutput> {
        let mut results = Vec::new();
        let mut errors = Vec::new();
        let mut summary = BatchSummary::default();

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;
            let Some(text) = row.review() else {
                tracing::debug!(row = row_number, "batch row without review text");
                errors.push(RowError::missing_text(row_number));
                continue;
            };

            let result = self.analyse(&Review::new(text), user)?;
            summary.record(result.overall);
            results.push(BatchResult {
                row: row_number,
                result,
            });
        }

        if !errors.is_empty() && self.batch_mode == BatchMode::Strict {
            tracing::warn!(
                invalid = errors.len(),
                discarded = results.len(),
                "batch rejected"
            );
            return Err(SentimentError::InvalidRows(errors));
        }

        Ok(BatchOutput {
            results,
            errors,
            summary,
        })
    }
}
