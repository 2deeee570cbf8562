//! File system storage for comment collections
//!
//! Each document is a JSON array of comments at
//! `<base>/comments/<document>.json`. The draft catalog lives next to it in
//! `<base>/drafts.json`.

use econsult_core::comment::Comment;
use econsult_core::draft::Draft;
use econsult_core::error::{EconsultError, Result};
use econsult_core::store::CommentStore;
use econsult_core::types::DocumentId;
use serde::Serialize;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Draft catalog file name
const DRAFTS_FILE: &str = "drafts.json";

/// File system based comment store
pub struct FileSystemStore {
    /// Base directory for storage
    base_dir: PathBuf,
    /// Comments subdirectory
    comments_dir: PathBuf,
}

impl FileSystemStore {
    /// Create a new file system store
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let comments_dir = base_dir.join("comments");

        let store = Self {
            base_dir,
            comments_dir,
        };

        store.ensure_dirs()?;
        Ok(store)
    }

    /// Create a store in the user data directory (~/.econsult as fallback)
    pub fn default_location() -> Result<Self> {
        let base_dir = directories::ProjectDirs::from("org", "econsult", "econsult")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".econsult")
            });

        Self::new(base_dir)
    }

    /// Ensure required directories exist
    fn ensure_dirs(&self) -> Result<()> {
        if !self.comments_dir.exists() {
            fs::create_dir_all(&self.comments_dir).map_err(|e| {
                EconsultError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create comments directory: {}", e),
                ))
            })?;
            debug!("Created comments directory: {:?}", self.comments_dir);
        }
        Ok(())
    }

    /// Get the path for a document file
    fn document_path(&self, document: &DocumentId) -> PathBuf {
        self.comments_dir.join(format!("{}.json", document))
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self, document: &DocumentId) -> PathBuf {
        self.comments_dir.join(format!(".{}.json.tmp", document))
    }

    /// Get the path of the draft catalog
    fn drafts_path(&self) -> PathBuf {
        self.base_dir.join(DRAFTS_FILE)
    }

    /// Write JSON atomically (write to temp, then rename).
    ///
    /// The temp file is removed whenever the write does not complete.
    fn atomic_write<T: Serialize + ?Sized>(
        &self,
        value: &T,
        temp_path: &Path,
        final_path: &Path,
    ) -> Result<()> {
        let result = Self::write_json(value, temp_path).and_then(|()| {
            // Rename to final path (atomic on most filesystems)
            fs::rename(temp_path, final_path).map_err(|e| {
                EconsultError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to rename temp file: {}", e),
                ))
            })
        });

        if result.is_err() && temp_path.exists() {
            let _ = fs::remove_file(temp_path);
        }
        result
    }

    fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
        let temp_file = fs::File::create(path).map_err(|e| {
            EconsultError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        Ok(())
    }

    /// Read and parse a document file
    fn read_document(&self, document: &DocumentId, path: &Path) -> Result<Vec<Comment>> {
        let file = fs::File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EconsultError::DocumentNotFound(document.to_string())
            } else {
                EconsultError::Io(e)
            }
        })?;

        let reader = BufReader::new(file);
        let comments: Vec<Comment> = serde_json::from_reader(reader)
            .map_err(EconsultError::from)
            .map_err(|e| e.with_context(format!("Invalid comment file {}", path.display())))?;
        Ok(comments)
    }

    /// Get base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get comments directory
    pub fn comments_dir(&self) -> &PathBuf {
        &self.comments_dir
    }
}

impl CommentStore for FileSystemStore {
    fn load(&self, document: &DocumentId) -> Result<Vec<Comment>> {
        let path = self.document_path(document);
        self.read_document(document, &path)
    }

    fn save(&self, document: &DocumentId, comments: &[Comment]) -> Result<()> {
        let final_path = self.document_path(document);
        self.atomic_write(comments, &self.temp_path(document), &final_path)?;
        debug!(
            "Saved {} comments for {} to {:?}",
            comments.len(),
            document,
            final_path
        );
        Ok(())
    }

    fn clear(&self, document: &DocumentId) -> Result<()> {
        let path = self.document_path(document);

        if !path.exists() {
            debug!("Nothing to clear for {}", document);
            return Ok(());
        }

        fs::remove_file(&path).map_err(|e| {
            EconsultError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to delete comment file: {}", e),
            ))
        })?;

        debug!("Cleared {} at {:?}", document, path);
        Ok(())
    }

    fn documents(&self) -> Result<Vec<DocumentId>> {
        let mut documents = Vec::new();

        let entries = fs::read_dir(&self.comments_dir).map_err(|e| {
            EconsultError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read comments directory: {}", e),
            ))
        })?;

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();

            // Skip non-json files and temp files
            if !path.extension().map(|e| e == "json").unwrap_or(false) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem.starts_with('.') {
                continue;
            }

            match DocumentId::from_string(stem) {
                Ok(id) => documents.push(id),
                Err(e) => warn!("Skipping {:?}: {}", path, e),
            }
        }

        documents.sort();
        Ok(documents)
    }

    fn exists(&self, document: &DocumentId) -> bool {
        self.document_path(document).exists()
    }

    fn drafts(&self) -> Result<Vec<Draft>> {
        let path = self.drafts_path();
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(EconsultError::Io(e)),
        };

        serde_json::from_reader(BufReader::new(file))
            .map_err(EconsultError::from)
            .map_err(|e| e.with_context(format!("Invalid draft catalog {}", path.display())))
    }

    fn save_drafts(&self, drafts: &[Draft]) -> Result<()> {
        let temp_path = self.base_dir.join(format!(".{}.tmp", DRAFTS_FILE));
        self.atomic_write(drafts, &temp_path, &self.drafts_path())?;
        debug!("Saved {} drafts", drafts.len());
        Ok(())
    }
}
