use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::labels::SentimentLabel;

/// A raw review as it arrives from the caller.
///
/// The declared language, when present, is trusted and detection is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    raw_text: String,
    declared_language: Option<String>,
}

impl Review {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            declared_language: None,
        }
    }

    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.declared_language = Some(code.into());
        self
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn declared_language(&self) -> Option<&str> {
        self.declared_language.as_deref()
    }
}

impl From<&str> for Review {
    fn from(text: &str) -> Self {
        Review::new(text)
    }
}

impl From<String> for Review {
    fn from(text: String) -> Self {
        Review::new(text)
    }
}

/// A tracked product attribute (battery, price, ...). Always lower-case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aspect(String);

impl Aspect {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sentence of the review that mentions an aspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectMention {
    pub aspect: Aspect,
    pub sentence: String,
}

/// Per-aspect sentiment, one entry per aspect.
pub type AspectSentimentMap = BTreeMap<Aspect, SentimentLabel>;
