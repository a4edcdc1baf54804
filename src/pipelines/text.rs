/// Lower-cases `text` and keeps only ASCII letters and whitespace.
///
/// Digits, punctuation and non-ASCII letters are dropped without leaving a gap.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_digits() {
        assert_eq!(clean_text("Great! Battery#1"), "great battery");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(clean_text("Très Bien"), "trs bien");
    }

    #[test]
    fn keeps_whitespace_runs() {
        assert_eq!(clean_text("a  b\tc"), "a  b\tc");
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(clean_text(""), "");
    }
}
