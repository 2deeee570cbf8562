//! Comment analytics engine
//!
//! Pure functions over an ordered slice of [`Comment`](crate::comment::Comment)s.
//! Nothing in this module keeps state between calls: every result is
//! recomputed from the collection it is given, and the same input always
//! produces the same output.
//!
//! # Overview
//!
//! - [`tokenize`] normalizes text into lowercase `[a-z0-9]+` tokens
//! - [`top_words`] ranks non-stopword tokens by frequency
//! - [`bucketize`] sorts comments into Short/Medium/Long bands
//! - [`classify`] and [`distribution`] apply the sentiment lexicons
//! - [`summarize`] builds a bounded extractive summary of the corpus
//!
//! # Example
//!
//! ```ignore
//! use econsult_core::analysis::{classify, summarize, top_words, Sentiment};
//!
//! assert_eq!(classify("good good bad"), Sentiment::Positive);
//! let ranking = top_words(&comments, 8);
//! let summary = summarize(&comments, 100, 150);
//! ```

mod frequency;
mod length;
mod sentiment;
mod stopwords;
mod summary;
mod tokenizer;

pub use frequency::{top_words, WordFrequency, NO_DATA};
pub use length::{bucketize, LengthBand, LengthBucket};
pub use sentiment::{classify, distribution, score, Sentiment, SentimentCounts, SentimentScore};
pub use stopwords::is_stopword;
pub use summary::{split_sentences, summarize, ELLIPSIS};
pub use tokenizer::{tokenize, word_count};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::comment::Comment;
    use crate::types::CommentId;

    /// Build an in-order comment collection from raw texts
    pub fn comments(texts: &[&str]) -> Vec<Comment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Comment {
                id: CommentId::from_legacy_millis(1_726_000_000_000 + i as u64),
                text: text.to_string(),
                timestamp: String::new(),
                author_id: "tester".to_string(),
            })
            .collect()
    }
}
