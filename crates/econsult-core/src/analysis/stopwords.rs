//! Stopword filtering for frequency analysis

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Function words excluded from the top-words ranking
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is",
        "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
        "these", "they", "this", "to", "was", "will", "with", "we", "you", "your", "our", "from",
        "have", "has", "had", "i", "he", "she", "them", "his", "her", "were", "also", "can",
        "could", "should", "would", "do", "does", "did", "about",
    ]
    .into_iter()
    .collect()
});

/// Check whether a normalized token is a stopword
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
