use crate::core::{Aspect, AspectMention};

/// Ordered, de-duplicated set of known aspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectVocabulary {
    aspects: Vec<Aspect>,
}

impl AspectVocabulary {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut aspects: Vec<Aspect> = Vec::new();
        for name in names {
            let aspect = Aspect::new(name.as_ref());
            if !aspect.as_str().is_empty() && !aspects.contains(&aspect) {
                aspects.push(aspect);
            }
        }
        Self { aspects }
    }

    pub fn contains(&self, aspect: &Aspect) -> bool {
        self.aspects.contains(aspect)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aspect> {
        self.aspects.iter()
    }

    pub fn len(&self) -> usize {
        self.aspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }
}

/// Finds the sentences of a review that talk about each known aspect.
///
/// Sentences are split naively on `.`, `!` and `?`, so abbreviations such as
/// "U.S." break a sentence in two.
#[derive(Debug, Clone)]
pub struct AspectExtractor {
    vocabulary: AspectVocabulary,
}

impl AspectExtractor {
    pub fn new(vocabulary: AspectVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &AspectVocabulary {
        &self.vocabulary
    }

    /// Returns one mention per (aspect, sentence) pair, ordered by vocabulary
    /// order and then by position in the review.
    pub fn extract(&self, review: &str) -> Vec<AspectMention> {
        let sentences: Vec<(&str, String)> = review
            .split(['.', '!', '?'])
            .map(|sentence| (sentence, sentence.to_lowercase()))
            .collect();
        let review_lower = review.to_lowercase();

        let mut mentions = Vec::new();
        for aspect in self.vocabulary.iter() {
            if !review_lower.contains(aspect.as_str()) {
                continue;
            }
            for (sentence, lowered) in &sentences {
                if lowered.contains(aspect.as_str()) {
                    mentions.push(AspectMention {
                        aspect: aspect.clone(),
                        sentence: sentence.trim().to_string(),
                    });
                }
            }
        }

        tracing::trace!(count = mentions.len(), "aspect mentions extracted");
        mentions
    }
}
