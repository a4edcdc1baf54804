use serde::{Deserialize, Serialize};

/// Two-class sentiment reported for aspects and for whole reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// Returns the string representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
        }
    }

    /// Collapses any label-like string to two classes: anything mentioning
    /// "negative" is negative, everything else is positive.
    pub fn collapse(label: &str) -> Self {
        if label.to_lowercase().contains("negative") {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        }
    }
}

impl AsRef<str> for SentimentLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Five-point scale produced by the star-rating model.
///
/// The keyword tier only ever yields [`FineSentiment::Positive`] or
/// [`FineSentiment::Negative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FineSentiment {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl FineSentiment {
    /// Maps a 1-based star rating onto the scale. Out-of-range ratings are neutral.
    pub fn from_stars(stars: usize) -> Self {
        match stars {
            1 => FineSentiment::VeryNegative,
            2 => FineSentiment::Negative,
            3 => FineSentiment::Neutral,
            4 => FineSentiment::Positive,
            5 => FineSentiment::VeryPositive,
            _ => FineSentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FineSentiment::VeryNegative => "very negative",
            FineSentiment::Negative => "negative",
            FineSentiment::Neutral => "neutral",
            FineSentiment::Positive => "positive",
            FineSentiment::VeryPositive => "very positive",
        }
    }

    /// Two-class view used when a verdict leaves the crate.
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::collapse(self.as_str())
    }
}

impl From<SentimentLabel> for FineSentiment {
    fn from(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => FineSentiment::Positive,
            SentimentLabel::Negative => FineSentiment::Negative,
        }
    }
}

impl AsRef<str> for FineSentiment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for FineSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_table_matches_five_point_scale() {
        let labels: Vec<_> = (1..=5).map(|s| FineSentiment::from_stars(s).as_str()).collect();
        assert_eq!(
            labels,
            ["very negative", "negative", "neutral", "positive", "very positive"]
        );
    }

    #[test]
    fn out_of_range_stars_are_neutral() {
        assert_eq!(FineSentiment::from_stars(0), FineSentiment::Neutral);
        assert_eq!(FineSentiment::from_stars(6), FineSentiment::Neutral);
    }

    #[test]
    fn collapse_keeps_negative_family_negative() {
        assert_eq!(FineSentiment::VeryNegative.label(), SentimentLabel::Negative);
        assert_eq!(FineSentiment::Negative.label(), SentimentLabel::Negative);
        assert_eq!(FineSentiment::Neutral.label(), SentimentLabel::Positive);
        assert_eq!(FineSentiment::VeryPositive.label(), SentimentLabel::Positive);
    }

    #[test]
    fn two_class_labels_sit_mid_scale() {
        for label in [SentimentLabel::Positive, SentimentLabel::Negative] {
            let fine = FineSentiment::from(label);
            assert_eq!(fine.as_str(), label.as_str());
            assert_eq!(fine.label(), label);
        }
    }

    #[test]
    fn labels_serialize_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }
}
