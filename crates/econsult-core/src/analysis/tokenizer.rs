//! Text normalization into word tokens

/// A token character is an ASCII lowercase letter or digit. Everything else,
/// whitespace included, separates tokens.
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Split text into lowercase alphanumeric tokens, preserving order.
///
/// The input is lowercased first, so characters whose lowercase form is
/// ASCII (e.g. the Kelvin sign) still contribute to tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of tokens [`tokenize`] would produce for `text`.
pub fn word_count(text: &str) -> usize {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|fragment| !fragment.is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("MCA21 is great!!"), vec!["mca21", "is", "great"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
        assert!(tokenize("?!...").is_empty());
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        assert_eq!(
            tokenize("E-consultation, (draft) rules; section-2.1"),
            vec!["e", "consultation", "draft", "rules", "section", "2", "1"]
        );
    }

    #[test]
    fn test_tokenize_keeps_order_and_duplicates() {
        assert_eq!(tokenize("good Good GOOD bad"), vec!["good", "good", "good", "bad"]);
    }

    #[test]
    fn test_tokenize_non_ascii_is_separator() {
        assert_eq!(tokenize("café über naïve"), vec!["caf", "ber", "na", "ve"]);
        assert_eq!(tokenize("done…next"), vec!["done", "next"]);
    }

    #[test]
    fn test_word_count_matches_tokenize() {
        for text in ["", "MCA21 is great!!", "a  b\nc", "one... two? three!"] {
            assert_eq!(word_count(text), tokenize(text).len());
        }
    }
}
