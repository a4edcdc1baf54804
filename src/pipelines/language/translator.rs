use std::time::Duration;

use serde_json::Value;

use crate::error::{Result, SentimentError};

/// Machine translation collaborator.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Client for the public Google Translate web endpoint.
///
/// Every request carries the configured timeout; there are no retries.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The source language is left to the service (`sl=auto`); local
    /// detection only decides whether a review is translated at all.
    fn request(&self, text: &str, target: &str) -> Result<reqwest::blocking::Request> {
        Ok(self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .build()?)
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        tracing::trace!(detected = source, to = target, "requesting translation");
        let request = self.request(text, target)?;
        let body: Value = self
            .client
            .execute(request)?
            .error_for_status()?
            .json()?;

        parse_segments(&body)
    }
}

/// The endpoint answers with `[[["translated", "original", ...], ...], ...]`;
/// the translation is the concatenation of the first field of every segment.
fn parse_segments(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| SentimentError::Translation("unexpected response shape".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(SentimentError::Translation("empty translation".into()));
    }
    Ok(translated)
}

/// Translator for deployments without network access. Always fails, so
/// non-English reviews pass through untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTranslator;

impl Translator for NoopTranslator {
    fn translate(&self, _text: &str, source: &str, target: &str) -> Result<String> {
        Err(SentimentError::Translation(format!(
            "translation disabled ({source} -> {target})"
        )))
    }
}
