//! TF-IDF + logistic regression text classifier.
//!
//! The model is trained elsewhere and exported as a JSON artifact holding the
//! fitted vectorizer (vocabulary, idf weights, n-gram range, norm) and the
//! linear classifier (classes, coefficients, intercepts). Inference mirrors
//! the vectorizer it was fitted with: preprocess, tokenize with the token
//! pattern, build word n-grams, weight raw counts by idf, normalize, then take
//! the linear decision.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, SentimentError};
use crate::pipelines::aspects::AspectSentimentModel;
use crate::pipelines::text::clean_text;

/// Text preprocessing applied before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preprocessor {
    /// Lower-case and keep only ASCII letters and whitespace.
    #[default]
    CleanText,
    Lowercase,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L2,
    L1,
}

fn default_token_pattern() -> String {
    r"(?u)\b\w\w+\b".to_string()
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// On-disk layout of an exported TF-IDF + logistic regression model.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub preprocessor: Preprocessor,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    pub classes: Vec<String>,
    /// One row per class, or a single row for a binary model.
    pub coef: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
}

/// Classical sentence classifier loaded from a [`TfidfArtifact`].
#[derive(Debug, Clone)]
pub struct TfidfLogisticModel {
    artifact: TfidfArtifact,
    token_pattern: Regex,
}

impl TfidfLogisticModel {
    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self> {
        validate(&artifact)?;
        let token_pattern = Regex::new(&artifact.token_pattern)?;
        Ok(Self {
            artifact,
            token_pattern,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_artifact(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SentimentError::ModelNotFound(format!("Failed to read model artifact {path:?}: {e}"))
        })?;
        Self::from_json_str(&content)
    }

    pub fn classes(&self) -> &[String] {
        &self.artifact.classes
    }

    /// Sparse TF-IDF vector as (feature index, weight) pairs.
    pub fn features(&self, text: &str) -> Vec<(usize, f32)> {
        let text = match self.artifact.preprocessor {
            Preprocessor::CleanText => clean_text(text),
            Preprocessor::Lowercase => text.to_lowercase(),
            Preprocessor::None => text.to_string(),
        };
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .collect();

        let mut counts: HashMap<usize, f32> = HashMap::new();
        let (min_n, max_n) = self.artifact.ngram_range;
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                if let Some(&index) = self.artifact.vocabulary.get(&window.join(" ")) {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut features: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(index, count)| {
                let tf = if self.artifact.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (index, tf * self.artifact.idf[index])
            })
            .collect();
        features.sort_unstable_by_key(|(index, _)| *index);

        let norm = match self.artifact.norm {
            Some(Norm::L2) => features.iter().map(|(_, w)| w * w).sum::<f32>().sqrt(),
            Some(Norm::L1) => features.iter().map(|(_, w)| w.abs()).sum::<f32>(),
            None => 1.0,
        };
        if norm > 0.0 {
            for (_, weight) in &mut features {
                *weight /= norm;
            }
        }
        features
    }

    /// Linear decision scores, one per row of `coef`.
    pub fn decision_function(&self, text: &str) -> Vec<f32> {
        let features = self.features(text);
        self.artifact
            .coef
            .iter()
            .zip(&self.artifact.intercept)
            .map(|(row, intercept)| {
                features
                    .iter()
                    .map(|&(index, weight)| row[index] * weight)
                    .sum::<f32>()
                    + intercept
            })
            .collect()
    }

    pub fn predict(&self, text: &str) -> String {
        let scores = self.decision_function(text);
        let class_index = if self.artifact.coef.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            scores
                .iter()
                .enumerate()
                .fold((0, f32::NEG_INFINITY), |best, (index, &score)| {
                    if score > best.1 {
                        (index, score)
                    } else {
                        best
                    }
                })
                .0
        };
        self.artifact.classes[class_index].clone()
    }
}

impl AspectSentimentModel for TfidfLogisticModel {
    fn predict_label(&self, sentence: &str) -> Result<String> {
        Ok(self.predict(sentence))
    }
}

fn validate(artifact: &TfidfArtifact) -> Result<()> {
    let features = artifact.idf.len();
    let invalid = |msg: String| Err(SentimentError::ModelFormat(msg));

    if artifact.classes.len() < 2 {
        return invalid("at least two classes are required".into());
    }
    if let Some((term, &index)) = artifact
        .vocabulary
        .iter()
        .find(|(_, index)| **index >= features)
    {
        return invalid(format!("vocabulary entry {term:?} points past idf ({index})"));
    }
    let (min_n, max_n) = artifact.ngram_range;
    if min_n == 0 || min_n > max_n {
        return invalid(format!("invalid ngram_range ({min_n}, {max_n})"));
    }
    let expected_rows = if artifact.classes.len() == 2 {
        1
    } else {
        artifact.classes.len()
    };
    if artifact.coef.len() != expected_rows || artifact.intercept.len() != expected_rows {
        return invalid(format!(
            "expected {expected_rows} coefficient rows for {} classes",
            artifact.classes.len()
        ));
    }
    if artifact.coef.iter().any(|row| row.len() != features) {
        return invalid(format!("coefficient rows must have {features} entries"));
    }
    Ok(())
}
