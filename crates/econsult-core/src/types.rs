//! Core type definitions for econsult

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a comment
///
/// Backed by a UUID v7, so identifiers sort in creation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Generate a new CommentId
    pub fn new() -> Self {
        CommentId(Uuid::now_v7())
    }

    /// Map a legacy millisecond-timestamp id onto a UUID v7.
    ///
    /// The random section is zeroed so the same legacy id always maps to the
    /// same UUID.
    pub fn from_legacy_millis(millis: u64) -> Self {
        CommentId(uuid::Builder::from_unix_timestamp_millis(millis, &[0u8; 10]).into_uuid())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for CommentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Uuid(Uuid),
            Millis(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Uuid(uuid) => CommentId(uuid),
            RawId::Millis(millis) => CommentId::from_legacy_millis(millis),
        })
    }
}

/// Maximum length of a document identifier
pub const MAX_DOCUMENT_ID_LENGTH: usize = 64;

/// Identifier of a comment collection in the store
///
/// Format: `[A-Za-z0-9_-]{1,64}`, or `d_<12 hex>` when derived from a title.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    /// Document used when none is selected
    pub const DEFAULT: &'static str = "draftComments";

    /// Create from a string with validation
    pub fn from_string(s: impl Into<String>) -> crate::Result<Self> {
        let s = s.into();
        if Self::validate(&s) {
            Ok(DocumentId(s))
        } else {
            Err(crate::EconsultError::Validation(format!(
                "Invalid document ID: {:?} (expected 1-{} characters of [A-Za-z0-9_-])",
                s, MAX_DOCUMENT_ID_LENGTH
            )))
        }
    }

    /// Derive a stable DocumentId from a draft title
    pub fn from_title(title: &str) -> Self {
        let hash = blake3::hash(title.trim().to_lowercase().as_bytes());
        DocumentId(format!("d_{}", &hash.to_hex()[..12]))
    }

    /// Validate document ID format
    fn validate(s: &str) -> bool {
        !s.is_empty()
            && s.len() <= MAX_DOCUMENT_ID_LENGTH
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        DocumentId(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
