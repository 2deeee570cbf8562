//! Export functionality for reports
//!
//! This module renders a [`Report`](crate::report::Report) for the
//! presentation layer.
//!
//! # Overview
//!
//! Export functionality supports:
//! - JSON format (pretty-printed, or compact without the comment listing)
//! - Markdown format (headings and tables for the report page)
//! - Plain text (aligned columns for the terminal)
//!
//! # Example
//!
//! ```ignore
//! use econsult_core::export::ExportManager;
//!
//! let manager = ExportManager::new();
//! let json = manager.export(&report, "json")?;
//! let md = manager.export(&report, "markdown")?;
//! ```

mod exporter;
mod json;
mod markdown;
mod text;

pub use exporter::{ExportManager, Exporter};
pub use json::JsonExporter;
pub use markdown::MarkdownExporter;
pub use text::TextExporter;
