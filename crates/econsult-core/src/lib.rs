//! econsult-core - Core library for econsult
//!
//! This crate provides the comment analytics engine used to review public
//! consultation feedback on draft legislation: tokenization, word frequency,
//! length bands, lexicon sentiment and extractive summaries. It also holds the
//! comment model, the storage abstraction, report assembly and exporters.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod draft;
pub mod analysis;
pub mod store;
pub mod report;
pub mod export;

pub use error::{EconsultError, Result};
pub use types::*;
