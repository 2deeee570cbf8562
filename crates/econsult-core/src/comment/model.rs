//! Comment data models

use crate::types::CommentId;
use serde::{Deserialize, Serialize};

/// Author id stamped on comments when none is supplied
pub const ANONYMOUS_AUTHOR: &str = "anonymous";

/// A stakeholder comment on a draft
///
/// Comments are immutable once created; the store owns them and analytics
/// only ever borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier, ordered by creation
    pub id: CommentId,
    /// Free-text content
    pub text: String,
    /// Creation time as recorded by the producer
    #[serde(default)]
    pub timestamp: String,
    /// Author of the comment
    #[serde(default = "default_author", alias = "authorId", alias = "userID")]
    pub author_id: String,
}

fn default_author() -> String {
    ANONYMOUS_AUTHOR.to_string()
}

/// Characters shown when a comment is listed on one line
pub const PREVIEW_CHARS: usize = 72;

/// Flatten whitespace and cut `text` to `max_chars` characters, marking the
/// cut with `…`.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

impl Comment {
    /// Short single-line preview
    pub fn preview(&self, max_chars: usize) -> String {
        preview(&self.text, max_chars)
    }
}
