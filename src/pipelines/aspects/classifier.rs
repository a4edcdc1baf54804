use std::sync::Arc;

use super::model::AspectSentimentModel;
use crate::core::{AspectMention, AspectSentimentMap, SentimentLabel};
use crate::error::Result;

/// Labels aspect sentences with a dedicated model.
#[derive(Clone)]
pub struct AspectSentimentClassifier {
    model: Arc<dyn AspectSentimentModel>,
    fallback: SentimentLabel,
}

impl AspectSentimentClassifier {
    /// `fallback` is used whenever the model answers something other than
    /// "positive" or "negative" (e.g. "neutral").
    pub fn new(model: Arc<dyn AspectSentimentModel>, fallback: SentimentLabel) -> Self {
        Self { model, fallback }
    }

    pub fn classify(&self, sentence: &str) -> Result<SentimentLabel> {
        let label = self.model.predict_label(sentence)?;
        Ok(self.coerce(&label))
    }

    /// Classifies every mention in order. When an aspect is mentioned more
    /// than once, the last mention decides its label.
    pub fn classify_mentions(&self, mentions: &[AspectMention]) -> Result<AspectSentimentMap> {
        let mut aspects = AspectSentimentMap::new();
        for mention in mentions {
            let label = self.classify(&mention.sentence)?;
            aspects.insert(mention.aspect.clone(), label);
        }
        Ok(aspects)
    }

    fn coerce(&self, label: &str) -> SentimentLabel {
        if label.eq_ignore_ascii_case("negative") {
            SentimentLabel::Negative
        } else if label.eq_ignore_ascii_case("positive") {
            SentimentLabel::Positive
        } else {
            tracing::debug!(label, fallback = %self.fallback, "coercing unexpected aspect label");
            self.fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Aspect;

    /// Answers with the first word of the sentence.
    struct EchoModel;

    impl AspectSentimentModel for EchoModel {
        fn predict_label(&self, sentence: &str) -> Result<String> {
            Ok(sentence.split_whitespace().next().unwrap_or("").to_string())
        }
    }

    fn classifier(fallback: SentimentLabel) -> AspectSentimentClassifier {
        AspectSentimentClassifier::new(Arc::new(EchoModel), fallback)
    }

    fn mention(aspect: &str, sentence: &str) -> AspectMention {
        AspectMention {
            aspect: Aspect::new(aspect),
            sentence: sentence.to_string(),
        }
    }

    #[test]
    fn known_labels_are_case_insensitive() {
        let c = classifier(SentimentLabel::Positive);
        assert_eq!(c.classify("NEGATIVE battery").unwrap(), SentimentLabel::Negative);
        assert_eq!(c.classify("Positive screen").unwrap(), SentimentLabel::Positive);
    }

    #[test]
    fn unexpected_labels_use_fallback() {
        assert_eq!(
            classifier(SentimentLabel::Positive).classify("neutral").unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            classifier(SentimentLabel::Negative).classify("3").unwrap(),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn last_mention_wins() {
        let aspects = classifier(SentimentLabel::Positive)
            .classify_mentions(&[
                mention("battery", "positive at first"),
                mention("screen", "negative glare"),
                mention("battery", "negative later"),
            ])
            .unwrap();

        assert_eq!(aspects.len(), 2);
        assert_eq!(aspects[&Aspect::new("battery")], SentimentLabel::Negative);
        assert_eq!(aspects[&Aspect::new("screen")], SentimentLabel::Negative);
    }
}
