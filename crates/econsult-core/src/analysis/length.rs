//! Comment length bands

use super::tokenizer::word_count;
use crate::comment::Comment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Word-count band of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthBand {
    /// 0-19 words
    Short,
    /// 20-49 words
    Medium,
    /// 50 words and above
    Long,
}

impl LengthBand {
    /// All bands in report order
    pub const ALL: [LengthBand; 3] = [LengthBand::Short, LengthBand::Medium, LengthBand::Long];

    /// Band for a given word count
    pub fn for_word_count(words: usize) -> Self {
        match words {
            0..=19 => LengthBand::Short,
            20..=49 => LengthBand::Medium,
            _ => LengthBand::Long,
        }
    }

    /// Short label
    pub fn label(&self) -> &'static str {
        match self {
            LengthBand::Short => "Short",
            LengthBand::Medium => "Medium",
            LengthBand::Long => "Long",
        }
    }

    /// Label including the word range, for charts and reports
    pub fn display_label(&self) -> &'static str {
        match self {
            LengthBand::Short => "Short (<20 words)",
            LengthBand::Medium => "Medium (20-49)",
            LengthBand::Long => "Long (50+)",
        }
    }

    fn index(&self) -> usize {
        match self {
            LengthBand::Short => 0,
            LengthBand::Medium => 1,
            LengthBand::Long => 2,
        }
    }
}

impl fmt::Display for LengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Number of comments in one band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBucket {
    pub label: LengthBand,
    pub count: usize,
}

/// Count comments per length band.
///
/// Always returns Short, Medium and Long in that order, with zero counts for
/// empty bands.
pub fn bucketize(comments: &[Comment]) -> [LengthBucket; 3] {
    let mut buckets = LengthBand::ALL.map(|label| LengthBucket { label, count: 0 });
    for comment in comments {
        let band = LengthBand::for_word_count(word_count(&comment.text));
        buckets[band.index()].count += 1;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::comments;
    use pretty_assertions::assert_eq;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(LengthBand::for_word_count(0), LengthBand::Short);
        assert_eq!(LengthBand::for_word_count(19), LengthBand::Short);
        assert_eq!(LengthBand::for_word_count(20), LengthBand::Medium);
        assert_eq!(LengthBand::for_word_count(49), LengthBand::Medium);
        assert_eq!(LengthBand::for_word_count(50), LengthBand::Long);
        assert_eq!(LengthBand::for_word_count(10_000), LengthBand::Long);
    }

    #[test]
    fn test_bucketize_counts() {
        let texts = [words(3), words(19), words(20), words(50), String::new()];
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let buckets = bucketize(&comments(&refs));

        assert_eq!(
            buckets.map(|b| (b.label, b.count)),
            [
                (LengthBand::Short, 3),
                (LengthBand::Medium, 1),
                (LengthBand::Long, 1)
            ]
        );
    }

    #[test]
    fn test_empty_collection_reports_all_bands() {
        let buckets = bucketize(&[]);
        assert_eq!(buckets.map(|b| b.label), LengthBand::ALL);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_counts_sum_to_collection_length() {
        let texts = [words(1), words(25), words(25), words(70), words(12), words(49)];
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let collection = comments(&refs);
        let total: usize = bucketize(&collection).iter().map(|b| b.count).sum();
        assert_eq!(total, collection.len());
    }

    #[test]
    fn test_punctuation_does_not_count_as_words() {
        let buckets = bucketize(&comments(&["!!! ... ???"]));
        assert_eq!(buckets[0].count, 1);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(LengthBand::Short.display_label(), "Short (<20 words)");
        assert_eq!(LengthBand::Long.to_string(), "Long");
    }
}
