use crate::core::SentimentLabel;

/// Reduces per-aspect labels to one overall label by majority.
///
/// Labels are matched by case-insensitive substring, so "very positive"
/// counts as positive. Ties, including the empty case, resolve to positive.
pub fn aggregate<I, L>(labels: I) -> SentimentLabel
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let (mut positive, mut negative) = (0usize, 0usize);
    for label in labels {
        let label = label.as_ref().to_lowercase();
        if label.contains("positive") {
            positive += 1;
        } else if label.contains("negative") {
            negative += 1;
        }
    }

    if positive >= negative {
        SentimentLabel::Positive
    } else {
        SentimentLabel::Negative
    }
}
