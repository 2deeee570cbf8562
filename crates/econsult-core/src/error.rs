//! Error types for econsult

use thiserror::Error;

/// Main error type for econsult
#[derive(Debug, Error)]
pub enum EconsultError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Document not found in the comment store
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EconsultError>,
    },
}

impl EconsultError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EconsultError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for EconsultError {
    fn from(err: toml::de::Error) -> Self {
        EconsultError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for EconsultError {
    fn from(err: toml::ser::Error) -> Self {
        EconsultError::Toml(err.to_string())
    }
}

/// Result type alias for econsult
pub type Result<T> = std::result::Result<T, EconsultError>;
