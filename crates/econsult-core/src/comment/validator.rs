//! Comment validation

use crate::error::{EconsultError, Result};

/// Maximum comment length (default)
pub const MAX_COMMENT_LENGTH: usize = 10000;

/// Validator for comment text
pub struct CommentValidator {
    max_length: usize,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            max_length: MAX_COMMENT_LENGTH,
        }
    }

    /// Create a new validator with custom max length
    pub fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Validate comment text. Blank text is rejected; length is counted in
    /// characters after trimming.
    pub fn validate_text(&self, text: &str) -> Result<()> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(EconsultError::Validation(
                "Comment text cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > self.max_length {
            return Err(EconsultError::Validation(format!(
                "Comment text exceeds maximum length of {} characters",
                self.max_length
            )));
        }

        Ok(())
    }

    /// Validate an author id
    pub fn validate_author(&self, author: &str) -> Result<()> {
        if author.trim().is_empty() {
            return Err(EconsultError::Validation(
                "Author id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}
