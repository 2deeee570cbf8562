//! Plain text exporter for terminal output

use super::exporter::Exporter;
use crate::analysis::Sentiment;
use crate::comment::{preview, PREVIEW_CHARS};
use crate::error::Result;
use crate::report::Report;

/// Width used for the label column
const LABEL_WIDTH: usize = 20;

/// Plain text exporter
pub struct TextExporter;

impl TextExporter {
    /// Create a new text exporter
    pub fn new() -> Self {
        Self
    }

    fn row(label: &str, value: usize) -> String {
        format!("  {:<width$} {:>5}\n", label, value, width = LABEL_WIDTH)
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for TextExporter {
    fn export(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "Report for {} ({} comments)\n",
            report.document, report.comment_count
        ));
        if let Some(title) = &report.title {
            out.push_str(&format!("Draft: {}\n", title));
        }
        out.push('\n');

        out.push_str("Summary:\n");
        if report.summary.is_empty() {
            out.push_str("  (no comments)\n");
        } else {
            out.push_str(&format!("  {}\n", report.summary));
        }
        out.push('\n');

        out.push_str("Top words:\n");
        for entry in &report.top_words {
            out.push_str(&Self::row(&entry.word, entry.count));
        }
        out.push('\n');

        out.push_str("Comment length:\n");
        for bucket in &report.length_buckets {
            out.push_str(&Self::row(bucket.label.display_label(), bucket.count));
        }
        out.push('\n');

        out.push_str("Sentiment:\n");
        for sentiment in Sentiment::ALL {
            out.push_str(&Self::row(&sentiment.to_string(), report.sentiment.get(sentiment)));
        }

        if !report.comments.is_empty() {
            out.push_str("\nComments:\n");
            for entry in &report.comments {
                out.push_str(&format!(
                    "  [{:<8}] {}\n",
                    entry.sentiment,
                    preview(&entry.text, PREVIEW_CHARS)
                ));
            }
        }

        Ok(out)
    }

    fn format_name(&self) -> &str {
        "text"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}
