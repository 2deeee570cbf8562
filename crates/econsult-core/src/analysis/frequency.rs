//! Word frequency ranking

use super::stopwords::is_stopword;
use super::tokenizer::tokenize;
use crate::comment::Comment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Word reported when no token qualifies for the ranking
pub const NO_DATA: &str = "no-data";

/// Tokens of this length or shorter are not ranked
const MAX_IGNORED_LEN: usize = 2;

/// A ranked word and its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

impl WordFrequency {
    /// The placeholder entry returned for an empty ranking
    pub fn no_data() -> Self {
        Self {
            word: NO_DATA.to_string(),
            count: 0,
        }
    }

    /// Whether this is the placeholder entry
    pub fn is_no_data(&self) -> bool {
        self.count == 0 && self.word == NO_DATA
    }
}

/// Counter that remembers the order in which words were first seen.
///
/// Ranking ties are broken by that order, so it must not depend on hash map
/// iteration.
#[derive(Debug, Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<WordFrequency>,
}

impl OrderedCounter {
    fn add(&mut self, word: String) {
        match self.index.get(&word) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push(WordFrequency { word, count: 1 });
            }
        }
    }

    /// Entries by count descending, first-seen order within equal counts
    fn into_ranked(self) -> Vec<WordFrequency> {
        let mut entries = self.entries;
        // sort_by is stable
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

fn qualifies(token: &str) -> bool {
    token.len() > MAX_IGNORED_LEN && !is_stopword(token)
}

/// Rank the `n` most frequent content words across all comments.
///
/// Never returns an empty vector: when nothing qualifies (including `n == 0`)
/// the result is the single [`WordFrequency::no_data`] entry.
pub fn top_words(comments: &[Comment], n: usize) -> Vec<WordFrequency> {
    let mut counter = OrderedCounter::default();
    for comment in comments {
        for token in tokenize(&comment.text) {
            if qualifies(&token) {
                counter.add(token);
            }
        }
    }

    let mut ranked = counter.into_ranked();
    ranked.truncate(n);

    if ranked.is_empty() {
        vec![WordFrequency::no_data()]
    } else {
        ranked
    }
}
