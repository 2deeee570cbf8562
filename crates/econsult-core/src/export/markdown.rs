//! Markdown exporter for reports

use super::exporter::Exporter;
use crate::analysis::Sentiment;
use crate::error::Result;
use crate::report::Report;

/// Markdown exporter
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Create a new Markdown exporter
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, report: &Report) -> String {
        let mut header = String::new();
        header.push_str("# Comment Report\n\n");
        if let Some(title) = &report.title {
            header.push_str(&format!("**Draft:** {}\n", title));
        }
        header.push_str(&format!("**Document:** `{}`\n", report.document));
        header.push_str(&format!(
            "**Generated:** {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        header.push_str(&format!("**Comments:** {}\n\n", report.comment_count));
        header
    }

    fn render_summary(&self, report: &Report) -> String {
        let mut out = String::from("## Summary\n\n");
        if report.summary.is_empty() {
            out.push_str("_No comments yet._\n\n");
        } else {
            for line in report.summary.lines() {
                out.push_str("> ");
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    fn render_top_words(&self, report: &Report) -> String {
        let mut out = String::from("## Top Words\n\n| Word | Count |\n|------|------:|\n");
        for entry in &report.top_words {
            out.push_str(&format!("| {} | {} |\n", entry.word, entry.count));
        }
        out.push('\n');
        out
    }

    fn render_lengths(&self, report: &Report) -> String {
        let mut out = String::from("## Comment Length\n\n");
        out.push_str("| Band | Comments |\n|------|---------:|\n");
        for bucket in &report.length_buckets {
            out.push_str(&format!(
                "| {} | {} |\n",
                bucket.label.display_label(),
                bucket.count
            ));
        }
        out.push('\n');
        out
    }

    fn render_sentiment(&self, report: &Report) -> String {
        let mut out = String::from("## Sentiment Distribution\n\n");
        out.push_str("| Sentiment | Comments |\n|-----------|---------:|\n");
        for sentiment in Sentiment::ALL {
            out.push_str(&format!(
                "| {} | {} |\n",
                sentiment,
                report.sentiment.get(sentiment)
            ));
        }
        out.push('\n');
        out
    }

    fn render_comments(&self, report: &Report) -> String {
        if report.comments.is_empty() {
            return String::new();
        }

        let mut out = String::from("## Comments\n\n");
        for (i, entry) in report.comments.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} _({}, {}, {} words)_\n",
                i + 1,
                entry.text.split_whitespace().collect::<Vec<_>>().join(" "),
                entry.sentiment,
                entry.band,
                entry.words
            ));
        }
        out.push('\n');
        out
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.render_header(report));
        output.push_str(&self.render_summary(report));
        output.push_str(&self.render_top_words(report));
        output.push_str(&self.render_lengths(report));
        output.push_str(&self.render_sentiment(report));
        output.push_str(&self.render_comments(report));
        Ok(output)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
