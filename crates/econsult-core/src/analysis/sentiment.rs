//! Lexicon-based sentiment classification
//!
//! Each comment is scored by counting tokens found in a fixed positive and a
//! fixed negative lexicon. The larger count wins; equal counts, including no
//! hits at all, are neutral. Word order and negation are not considered, so
//! "not good" scores as positive.

use super::tokenizer::tokenize;
use crate::comment::Comment;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "excellent", "nice", "love", "like", "helpful", "quick", "fast",
        "improve", "improved", "improves", "clear", "effective", "enjoy", "awesome", "amazing",
        "fantastic", "well", "happy", "satisfied", "smooth",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "poor", "slow", "bug", "issue", "error", "problem", "confusing", "hate",
        "dislike", "overlap", "crash", "fail", "delay", "difficult", "hard", "worst",
        "terrible", "broken",
    ]
    .into_iter()
    .collect()
});

/// Sentiment category of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All categories in report order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        })
    }
}

/// Lexicon hit counts for a single text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentScore {
    /// Majority vote over the two counts
    pub fn sentiment(&self) -> Sentiment {
        use std::cmp::Ordering;

        match self.positive.cmp(&self.negative) {
            Ordering::Greater => Sentiment::Positive,
            Ordering::Less => Sentiment::Negative,
            Ordering::Equal => Sentiment::Neutral,
        }
    }
}

/// Count positive and negative lexicon hits in `text`
pub fn score(text: &str) -> SentimentScore {
    let mut score = SentimentScore::default();
    for token in tokenize(text) {
        if POSITIVE_WORDS.contains(token.as_str()) {
            score.positive += 1;
        }
        if NEGATIVE_WORDS.contains(token.as_str()) {
            score.negative += 1;
        }
    }
    score
}

/// Classify a single text
pub fn classify(text: &str) -> Sentiment {
    score(text).sentiment()
}

/// Per-category comment counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    /// Count for one category
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Total number of classified comments
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Classify every comment and tally the categories
pub fn distribution(comments: &[Comment]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for comment in comments {
        counts.record(classify(&comment.text));
    }
    counts
}
