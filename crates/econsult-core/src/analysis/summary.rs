//! Extractive corpus summary
//!
//! The summary is built from whole sentences of the concatenated comments,
//! stopping once it holds at least `min_words` words without ever exceeding
//! `max_words`. Corpora short enough to fit are returned untouched.

use super::tokenizer::{tokenize, word_count};
use crate::comment::Comment;

/// Marker appended when the summary had to cut mid-sentence
pub const ELLIPSIS: char = '…';

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Replace every run of whitespace with a single space
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Split text into sentences.
///
/// A sentence is a non-empty run of non-terminal characters followed by one
/// of `.`, `!` or `?`. Terminal marks with nothing before them are skipped,
/// and a trailing fragment without a terminal mark is dropped. Surrounding
/// spaces stay attached to the sentence, so concatenating the result
/// reproduces the covered text.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_terminal(c) {
            if let Some(begin) = start.take() {
                sentences.push(&text[begin..i + c.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    sentences
}

/// Summarize the comment corpus within `[min_words, max_words]` words.
///
/// `min_words` is expected to be at most `max_words`. When the corpus has no
/// more than `max_words` tokens it is returned trimmed. Otherwise whole
/// sentences are taken in order; if not even the first sentence fits, the
/// first `min(min_words, max_words)` tokens are returned followed by
/// [`ELLIPSIS`].
pub fn summarize(comments: &[Comment], min_words: usize, max_words: usize) -> String {
    let corpus = comments
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let words = tokenize(&corpus);
    if words.len() <= max_words {
        return corpus.trim().to_string();
    }

    let collapsed = collapse_whitespace(&corpus);
    let mut sentences = split_sentences(&collapsed);
    if sentences.is_empty() {
        sentences.push(corpus.as_str());
    }

    let mut result = String::new();
    let mut count = 0;
    for sentence in sentences {
        let sentence_words = word_count(sentence);
        if count + sentence_words > max_words {
            break;
        }
        result.push_str(sentence);
        count += sentence_words;
        if count >= min_words {
            break;
        }
    }

    if result.trim().is_empty() {
        let cut_at = min_words.min(max_words);
        result = words[..cut_at].join(" ");
        result.push(ELLIPSIS);
    }

    result.trim().to_string()
}
