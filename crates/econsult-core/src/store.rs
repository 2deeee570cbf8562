//! Comment store trait and abstractions
//!
//! The store persists one ordered comment collection per [`DocumentId`],
//! plus a catalog of titled [`Draft`]s. Analytics never talk to a store
//! directly; callers read a snapshot with [`CommentStore::load_or_empty`] and
//! hand the slice to the engine.

use crate::comment::Comment;
use crate::draft::{self, Draft};
use crate::error::{EconsultError, Result};
use crate::types::DocumentId;
use tracing::warn;

/// Trait for comment store implementations
pub trait CommentStore: Send + Sync {
    /// Load the comments of a document, in stored order.
    ///
    /// Fails with [`EconsultError::DocumentNotFound`] when the document has
    /// never been written.
    fn load(&self, document: &DocumentId) -> Result<Vec<Comment>>;

    /// Replace the comments of a document
    fn save(&self, document: &DocumentId, comments: &[Comment]) -> Result<()>;

    /// Remove a document. Clearing a missing document is a no-op.
    fn clear(&self, document: &DocumentId) -> Result<()>;

    /// List stored documents, sorted by id
    fn documents(&self) -> Result<Vec<DocumentId>>;

    /// Check if a document exists
    fn exists(&self, document: &DocumentId) -> bool;

    /// Load the draft catalog. A store without drafts yields an empty list.
    fn drafts(&self) -> Result<Vec<Draft>>;

    /// Replace the draft catalog
    fn save_drafts(&self, drafts: &[Draft]) -> Result<()>;

    /// Load a document, substituting an empty collection for missing or
    /// unreadable data.
    fn load_or_empty(&self, document: &DocumentId) -> Vec<Comment> {
        match self.load(document) {
            Ok(comments) => comments,
            Err(EconsultError::DocumentNotFound(_)) => Vec::new(),
            Err(e) => {
                warn!("Ignoring unreadable comments for {}: {}", document, e);
                Vec::new()
            }
        }
    }

    /// Append a comment to a document.
    ///
    /// Unreadable existing data is replaced by the new single-comment
    /// collection.
    fn append(&self, document: &DocumentId, comment: Comment) -> Result<()> {
        let mut comments = self.load_or_empty(document);
        comments.push(comment);
        self.save(document, &comments)
    }

    /// Load the draft catalog, substituting an empty one for unreadable data
    fn drafts_or_empty(&self) -> Vec<Draft> {
        self.drafts().unwrap_or_else(|e| {
            warn!("Ignoring unreadable draft catalog: {}", e);
            Vec::new()
        })
    }

    /// Add a draft to the catalog and return the stored entry.
    ///
    /// A draft with the same id is kept; only a missing introduction is
    /// filled in.
    fn register_draft(&self, draft: Draft) -> Result<Draft> {
        let mut drafts = self.drafts_or_empty();

        let stored = match drafts.iter_mut().find(|d| d.id == draft.id) {
            Some(existing) => {
                if existing.introduction.is_none() && draft.introduction.is_some() {
                    existing.introduction = draft.introduction;
                }
                existing.clone()
            }
            None => {
                drafts.push(draft.clone());
                draft
            }
        };

        self.save_drafts(&drafts)?;
        Ok(stored)
    }

    /// Look up the catalog entry of a document
    fn find_draft(&self, document: &DocumentId) -> Option<Draft> {
        self.drafts_or_empty().into_iter().find(|d| &d.id == document)
    }

    /// Drafts whose title contains `query`, case-insensitively
    fn search_drafts(&self, query: &str) -> Vec<Draft> {
        let drafts = self.drafts_or_empty();
        draft::search(&drafts, query).into_iter().cloned().collect()
    }
}

/// In-memory store for testing
#[cfg(test)]
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::RwLock;

    /// Stored value: either comments or a corrupted payload
    #[derive(Clone)]
    enum Entry {
        Comments(Vec<Comment>),
        Corrupted,
    }

    /// In-memory comment store for testing
    #[derive(Default)]
    pub struct MemoryStore {
        documents: RwLock<BTreeMap<DocumentId, Entry>>,
        drafts: RwLock<Vec<Draft>>,
    }

    impl MemoryStore {
        /// Create a new in-memory store
        pub fn new() -> Self {
            Self::default()
        }

        /// Mark a document as holding unreadable data
        pub fn corrupt(&self, document: &DocumentId) {
            let mut documents = self.documents.write().unwrap();
            documents.insert(document.clone(), Entry::Corrupted);
        }
    }

    impl CommentStore for MemoryStore {
        fn load(&self, document: &DocumentId) -> Result<Vec<Comment>> {
            let documents = self.documents.read().unwrap();
            match documents.get(document) {
                Some(Entry::Comments(comments)) => Ok(comments.clone()),
                Some(Entry::Corrupted) => Err(EconsultError::Validation(format!(
                    "Stored value for {} is not a comment list",
                    document
                ))),
                None => Err(EconsultError::DocumentNotFound(document.to_string())),
            }
        }

        fn save(&self, document: &DocumentId, comments: &[Comment]) -> Result<()> {
            let mut documents = self.documents.write().unwrap();
            documents.insert(document.clone(), Entry::Comments(comments.to_vec()));
            Ok(())
        }

        fn clear(&self, document: &DocumentId) -> Result<()> {
            let mut documents = self.documents.write().unwrap();
            documents.remove(document);
            Ok(())
        }

        fn documents(&self) -> Result<Vec<DocumentId>> {
            let documents = self.documents.read().unwrap();
            Ok(documents.keys().cloned().collect())
        }

        fn exists(&self, document: &DocumentId) -> bool {
            let documents = self.documents.read().unwrap();
            documents.contains_key(document)
        }

        fn drafts(&self) -> Result<Vec<Draft>> {
            Ok(self.drafts.read().unwrap().clone())
        }

        fn save_drafts(&self, drafts: &[Draft]) -> Result<()> {
            *self.drafts.write().unwrap() = drafts.to_vec();
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::comment::CommentBuilder;

        fn comment(text: &str) -> Comment {
            CommentBuilder::new().text(text).build().unwrap()
        }

        #[test]
        fn test_memory_store_append_and_load() {
            let store = MemoryStore::new();
            let doc = DocumentId::default();

            store.append(&doc, comment("first")).unwrap();
            store.append(&doc, comment("second")).unwrap();

            let loaded = store.load(&doc).unwrap();
            assert_eq!(loaded.len(), 2);
            assert_eq!(loaded[0].text, "first");
            assert_eq!(loaded[1].text, "second");
        }

        #[test]
        fn test_missing_document() {
            let store = MemoryStore::new();
            let doc = DocumentId::default();

            assert!(matches!(store.load(&doc), Err(EconsultError::DocumentNotFound(_))));
            assert!(store.load_or_empty(&doc).is_empty());
        }

        #[test]
        fn test_corrupted_document_fails_soft() {
            let store = MemoryStore::new();
            let doc = DocumentId::default();
            store.corrupt(&doc);

            assert!(store.load(&doc).is_err());
            assert!(store.load_or_empty(&doc).is_empty());

            store.append(&doc, comment("fresh start")).unwrap();
            assert_eq!(store.load(&doc).unwrap().len(), 1);
        }

        #[test]
        fn test_clear_and_documents() {
            let store = MemoryStore::new();
            let a = DocumentId::from_string("a").unwrap();
            let b = DocumentId::from_string("b").unwrap();

            store.append(&b, comment("x")).unwrap();
            store.append(&a, comment("y")).unwrap();
            assert_eq!(store.documents().unwrap(), vec![a.clone(), b.clone()]);

            store.clear(&a).unwrap();
            store.clear(&a).unwrap();
            assert!(!store.exists(&a));
            assert_eq!(store.documents().unwrap(), vec![b]);
        }

        #[test]
        fn test_register_draft_is_idempotent() {
            let store = MemoryStore::new();

            let first = store.register_draft(Draft::new("IT Rules", None).unwrap()).unwrap();
            let again = store
                .register_draft(Draft::new("it rules", Some("Intermediary guidelines")).unwrap())
                .unwrap();

            assert_eq!(again.id, first.id);
            assert_eq!(again.title, "IT Rules");
            assert_eq!(again.introduction.as_deref(), Some("Intermediary guidelines"));
            assert_eq!(store.drafts().unwrap().len(), 1);

            let kept = store
                .register_draft(Draft::new("IT Rules", Some("Replaced?")).unwrap())
                .unwrap();
            assert_eq!(kept.introduction.as_deref(), Some("Intermediary guidelines"));
        }

        #[test]
        fn test_find_and_search_drafts() {
            let store = MemoryStore::new();
            let bill = store
                .register_draft(Draft::new("Digital Data Bill", None).unwrap())
                .unwrap();
            store
                .register_draft(Draft::new("National Environmental Policy", None).unwrap())
                .unwrap();

            assert_eq!(store.find_draft(&bill.id).unwrap().title, "Digital Data Bill");
            assert!(store.find_draft(&DocumentId::default()).is_none());

            let hits = store.search_drafts("data");
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].id, bill.id);
        }
    }
}
