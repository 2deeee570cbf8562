//! Comment builder for fluent API

use super::model::{Comment, ANONYMOUS_AUTHOR};
use super::validator::CommentValidator;
use crate::error::{EconsultError, Result};
use crate::types::CommentId;
use chrono::{SecondsFormat, Utc};

/// Builder for creating comments with fluent API
pub struct CommentBuilder {
    text: Option<String>,
    author_id: String,
    timestamp: Option<String>,
    validator: CommentValidator,
}

impl CommentBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            text: None,
            author_id: ANONYMOUS_AUTHOR.to_string(),
            timestamp: None,
            validator: CommentValidator::new(),
        }
    }

    /// Set the comment text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the author
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author_id = author.into();
        self
    }

    /// Override the creation timestamp
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Limit the accepted text length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.validator = CommentValidator::with_max_length(max_length);
        self
    }

    /// Build and validate the comment. The text is stored as entered.
    pub fn build(self) -> Result<Comment> {
        let text = self
            .text
            .ok_or_else(|| EconsultError::Validation("Comment text is required".to_string()))?;

        self.validator.validate_text(&text)?;
        self.validator.validate_author(&self.author_id)?;

        Ok(Comment {
            id: CommentId::new(),
            text,
            timestamp: self
                .timestamp
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            author_id: self.author_id,
        })
    }
}

impl Default for CommentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
