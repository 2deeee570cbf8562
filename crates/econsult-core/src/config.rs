//! Configuration management for econsult

use crate::error::{EconsultError, Result};
use crate::types::DocumentId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default project-local configuration path
pub const DEFAULT_CONFIG_PATH: &str = ".econsult/config.toml";

/// Report formats understood by the export layer
pub const REPORT_FORMATS: &[&str] = &["json", "json-compact", "markdown", "text"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analytics settings
    pub analytics: AnalyticsConfig,
    /// Storage settings
    pub storage: StorageConfig,
    /// Report settings
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(EconsultError::from)
            .map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))?;
        config.validate()?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        self.analytics.validate()?;

        DocumentId::from_string(self.storage.default_document.clone())
            .map_err(|e| EconsultError::Config(format!("storage.default_document: {}", e)))?;

        if self.storage.max_comment_length == 0 {
            return Err(EconsultError::Config(
                "storage.max_comment_length must be greater than 0".to_string(),
            ));
        }

        if !REPORT_FORMATS.contains(&self.report.default_format.as_str()) {
            return Err(EconsultError::Config(format!(
                "report.default_format must be one of {}, got {:?}",
                REPORT_FORMATS.join(", "),
                self.report.default_format
            )));
        }

        Ok(())
    }
}

/// Analytics-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Number of entries in the top-words ranking
    pub top_words: usize,
    /// Summary lower bound in words
    pub summary_min_words: usize,
    /// Summary upper bound in words
    pub summary_max_words: usize,
}

impl AnalyticsConfig {
    /// Check that the bounds are usable
    pub fn validate(&self) -> Result<()> {
        if self.top_words == 0 {
            return Err(EconsultError::Config(
                "analytics.top_words must be greater than 0".to_string(),
            ));
        }
        if self.summary_min_words > self.summary_max_words {
            return Err(EconsultError::Config(format!(
                "analytics.summary_min_words ({}) exceeds summary_max_words ({})",
                self.summary_min_words, self.summary_max_words
            )));
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_words: 8,
            summary_min_words: 100,
            summary_max_words: 150,
        }
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Document used when none is given
    pub default_document: String,
    /// Data directory (project-local `.econsult` when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Maximum comment text length in characters
    pub max_comment_length: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            default_document: DocumentId::DEFAULT.to_string(),
            data_dir: None,
            max_comment_length: 2000,
        }
    }
}

/// Report-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default report format
    pub default_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_format: "markdown".to_string(),
        }
    }
}
