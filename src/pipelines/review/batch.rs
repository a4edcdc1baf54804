use serde::{Deserialize, Serialize};

use super::pipeline::PipelineResult;
use crate::core::SentimentLabel;

/// One input row of a bulk upload.
///
/// Review text is read from `review_text`, falling back to `text`; the field
/// names match the accepted CSV headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRow {
    #[serde(default)]
    pub review_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl BatchRow {
    pub fn new(review_text: impl Into<String>) -> Self {
        Self {
            review_text: Some(review_text.into()),
            text: None,
        }
    }

    /// The first non-empty of `review_text` and `text`.
    pub fn review(&self) -> Option<&str> {
        [&self.review_text, &self.text]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|t| !t.is_empty())
    }
}

impl From<&str> for BatchRow {
    fn from(text: &str) -> Self {
        BatchRow::new(text)
    }
}

/// A validation failure tied to a 1-based row number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

impl RowError {
    pub fn missing_text(row: usize) -> Self {
        Self {
            row,
            message: "Review text missing".to_string(),
        }
    }
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row {}: {}", self.row, self.message)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    /// 1-based row number in the input.
    pub row: usize,
    pub result: PipelineResult,
}

impl BatchResult {
    /// Aspects rendered as `"battery: positive; screen: negative"`.
    pub fn aspects_summary(&self) -> String {
        self.result
            .aspects
            .iter()
            .map(|(aspect, label)| format!("{aspect}: {label}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Running totals over the successful rows of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total_reviews: usize,
    pub positive: usize,
    pub negative: usize,
}

impl BatchSummary {
    pub(crate) fn record(&mut self, overall: SentimentLabel) {
        self.total_reviews += 1;
        match overall {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchOutput {
    pub results: Vec<BatchResult>,
    /// Always empty in strict mode, where invalid rows fail the whole batch.
    pub errors: Vec<RowError>,
    pub summary: BatchSummary,
}
