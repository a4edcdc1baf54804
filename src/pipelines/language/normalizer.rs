use std::sync::Arc;

use serde::Serialize;

use super::detector::LanguageDetector;
use super::translator::Translator;
use crate::core::Review;

/// How the text handed downstream was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Normalization {
    /// Already in the target language; passed through.
    Unchanged,
    Translated,
    /// Detected a foreign language but translation failed; original text used.
    TranslationFailed { reason: String },
    /// Detection failed; the target language was assumed.
    DetectionFailed { reason: String },
}

impl Normalization {
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            Normalization::TranslationFailed { .. } | Normalization::DetectionFailed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Detected (or declared, or assumed) language of the original text.
    pub language: String,
    pub text: String,
    pub outcome: Normalization,
}

/// Brings reviews into the target language. Never fails: every collaborator
/// error degrades to passing the original text through.
///
/// When detection fails the text is assumed to already be in the target
/// language, so the reported language is the target (`"en"` by default).
#[derive(Clone)]
pub struct LanguageNormalizer {
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
    target: String,
}

impl LanguageNormalizer {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn Translator>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            detector,
            translator,
            target: target.into(),
        }
    }

    pub fn normalize(&self, text: &str) -> NormalizedText {
        self.normalize_review(&Review::new(text))
    }

    pub fn normalize_review(&self, review: &Review) -> NormalizedText {
        let text = review.raw_text();

        let language = match review.declared_language() {
            Some(code) => code.to_lowercase(),
            None => match self.detector.detect(text) {
                Ok(code) => code,
                Err(e) => {
                    tracing::debug!(error = %e, "language detection failed, assuming {}", self.target);
                    return NormalizedText {
                        language: self.target.clone(),
                        text: text.to_string(),
                        outcome: Normalization::DetectionFailed {
                            reason: e.to_string(),
                        },
                    };
                }
            },
        };

        if language == self.target {
            return NormalizedText {
                language,
                text: text.to_string(),
                outcome: Normalization::Unchanged,
            };
        }

        match self.translator.translate(text, &language, &self.target) {
            Ok(translated) => NormalizedText {
                language,
                text: translated,
                outcome: Normalization::Translated,
            },
            Err(e) => {
                tracing::warn!(error = %e, language = %language, "translation failed, using original text");
                NormalizedText {
                    language,
                    text: text.to_string(),
                    outcome: Normalization::TranslationFailed {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }
}
