//! JSON exporter for reports

use super::exporter::Exporter;
use crate::analysis::{LengthBucket, SentimentCounts, WordFrequency};
use crate::error::Result;
use crate::report::Report;
use serde::Serialize;

/// JSON exporter with compact mode support
pub struct JsonExporter {
    /// Compact output: single line, no comment listing
    compact: bool,
    /// Format name
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(compact: bool) -> Self {
        Self {
            compact,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(false)
    }
}

/// Aggregates only, for dashboards that do not need the comment texts
#[derive(Serialize)]
struct CompactReport<'a> {
    document: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    ts: i64,
    comment_count: usize,
    summary: &'a str,
    top_words: &'a [WordFrequency],
    length_buckets: &'a [LengthBucket; 3],
    sentiment: &'a SentimentCounts,
}

impl<'a> From<&'a Report> for CompactReport<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            document: report.document.as_str(),
            title: report.title.as_deref(),
            ts: report.generated_at.timestamp(),
            comment_count: report.comment_count,
            summary: &report.summary,
            top_words: &report.top_words,
            length_buckets: &report.length_buckets,
            sentiment: &report.sentiment,
        }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, report: &Report) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(&CompactReport::from(report))?
        } else {
            serde_json::to_string_pretty(report)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
