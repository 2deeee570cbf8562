//! Draft catalog entries
//!
//! A draft is a titled document open for consultation. Its [`DocumentId`] is
//! derived from the title, so the catalog maps the opaque id back to
//! something a reader recognizes.

use crate::error::{EconsultError, Result};
use crate::types::DocumentId;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A titled draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub id: DocumentId,
    pub title: String,
    /// Optional introduction shown with the draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Draft {
    /// Create a draft from a title and an optional introduction.
    ///
    /// Both are trimmed; a blank title is rejected and a blank introduction
    /// is dropped.
    pub fn new(title: &str, introduction: Option<&str>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(EconsultError::Validation(
                "Draft title cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: DocumentId::from_title(title),
            title: title.to_string(),
            introduction: introduction
                .map(str::trim)
                .filter(|intro| !intro.is_empty())
                .map(str::to_string),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Case-insensitive title substring match. An empty query matches all.
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.trim().to_lowercase())
    }
}

/// Drafts whose title contains `query`, in catalog order
pub fn search<'a>(drafts: &'a [Draft], query: &str) -> Vec<&'a Draft> {
    drafts.iter().filter(|draft| draft.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_draft() {
        let draft = Draft::new("  Digital Data Bill ", Some("  Protects personal data. ")).unwrap();
        assert_eq!(draft.title, "Digital Data Bill");
        assert_eq!(draft.id, DocumentId::from_title("Digital Data Bill"));
        assert_eq!(draft.introduction.as_deref(), Some("Protects personal data."));
    }

    #[test]
    fn test_blank_title_and_intro() {
        assert!(Draft::new("   ", None).is_err());

        let draft = Draft::new("Companies Act", Some("  ")).unwrap();
        assert_eq!(draft.introduction, None);
    }

    #[test]
    fn test_search_by_title() {
        let drafts = vec![
            Draft::new("Companies Act 2024 Amendments", None).unwrap(),
            Draft::new("Direct and Indirect Taxation Bill 2025", None).unwrap(),
            Draft::new("National Environmental Policy", None).unwrap(),
        ];

        let titles = |query: &str| {
            search(&drafts, query)
                .into_iter()
                .map(|d| d.title.as_str())
                .collect::<Vec<_>>()
        };

        assert_eq!(titles("TAX"), vec!["Direct and Indirect Taxation Bill 2025"]);
        assert_eq!(
            titles("20"),
            vec!["Companies Act 2024 Amendments", "Direct and Indirect Taxation Bill 2025"]
        );
        assert_eq!(titles("").len(), 3);
        assert!(titles("forest").is_empty());
    }

    #[test]
    fn test_deserialize_without_intro() {
        let json = r#"{"id": "d_0123456789ab", "title": "IT Rules"}"#;
        let draft: Draft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.introduction, None);
        assert_eq!(draft.created_at, "");
    }
}
