//! Report assembly
//!
//! A [`Report`] gathers every analytics result for one comment collection so
//! exporters can render it in a single pass. It is recomputed from scratch
//! each time; nothing is cached between reports.

use crate::analysis::{
    bucketize, classify, distribution, summarize, top_words, word_count, LengthBand,
    LengthBucket, Sentiment, SentimentCounts, WordFrequency,
};
use crate::comment::Comment;
use crate::config::AnalyticsConfig;
use crate::store::CommentStore;
use crate::types::{CommentId, DocumentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A comment as listed in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub id: CommentId,
    pub text: String,
    pub timestamp: String,
    pub author_id: String,
    pub words: usize,
    pub band: LengthBand,
    pub sentiment: Sentiment,
}

impl ReportEntry {
    fn from_comment(comment: &Comment) -> Self {
        let words = word_count(&comment.text);
        Self {
            id: comment.id.clone(),
            text: comment.text.clone(),
            timestamp: comment.timestamp.clone(),
            author_id: comment.author_id.clone(),
            words,
            band: LengthBand::for_word_count(words),
            sentiment: classify(&comment.text),
        }
    }
}

/// Analytics for one document's comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub document: DocumentId,
    /// Draft title from the catalog, when the document has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub comment_count: usize,
    pub summary: String,
    pub top_words: Vec<WordFrequency>,
    pub length_buckets: [LengthBucket; 3],
    pub sentiment: SentimentCounts,
    pub comments: Vec<ReportEntry>,
}

impl Report {
    /// Compute a report over `comments`
    pub fn compute(document: &DocumentId, comments: &[Comment], config: &AnalyticsConfig) -> Self {
        debug!(
            "Computing report for {} ({} comments)",
            document,
            comments.len()
        );

        Self {
            document: document.clone(),
            title: None,
            generated_at: Utc::now(),
            comment_count: comments.len(),
            summary: summarize(comments, config.summary_min_words, config.summary_max_words),
            top_words: top_words(comments, config.top_words),
            length_buckets: bucketize(comments),
            sentiment: distribution(comments),
            comments: comments.iter().map(ReportEntry::from_comment).collect(),
        }
    }

    /// Compute a report over the current contents of a store.
    ///
    /// Unreadable or missing documents produce an empty report. The title
    /// is taken from the draft catalog.
    pub fn from_store(
        store: &dyn CommentStore,
        document: &DocumentId,
        config: &AnalyticsConfig,
    ) -> Self {
        let comments = store.load_or_empty(document);
        let mut report = Self::compute(document, &comments, config);
        report.title = store.find_draft(document).map(|draft| draft.title);
        report
    }

    /// Whether the report covers no comments
    pub fn is_empty(&self) -> bool {
        self.comment_count == 0
    }
}
