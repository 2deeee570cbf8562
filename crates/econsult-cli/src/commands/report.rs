//! Report command
//!
//! Compute the analytics report for a document and export it.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use econsult_core::export::ExportManager;
use econsult_core::report::Report;

use super::{AppContext, DocumentArgs};

/// Report format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Pretty JSON including every comment
    Json,
    /// Single-line JSON with aggregates only
    JsonCompact,
    /// Markdown report
    Markdown,
    /// Plain text for the terminal
    Text,
}

impl ReportFormat {
    fn format_name(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::JsonCompact => "json-compact",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Text => "text",
        }
    }
}

/// Arguments for the report command
#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Report format (defaults to report.default_format)
    #[arg(long, short, value_enum)]
    pub format: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Number of top words to rank
    #[arg(long)]
    pub top: Option<usize>,

    /// Summary lower bound in words
    #[arg(long)]
    pub min_words: Option<usize>,

    /// Summary upper bound in words
    #[arg(long)]
    pub max_words: Option<usize>,
}

/// Execute the report command
pub fn execute(args: ReportArgs, ctx: &AppContext) -> Result<()> {
    use colored::Colorize;

    let mut analytics = ctx.config.analytics.clone();
    if let Some(top) = args.top {
        analytics.top_words = top;
    }
    if let Some(min_words) = args.min_words {
        analytics.summary_min_words = min_words;
    }
    if let Some(max_words) = args.max_words {
        analytics.summary_max_words = max_words;
    }
    analytics.validate().context("Invalid report options")?;

    let document = args.document.resolve(&ctx.config)?;
    let store = ctx.open_store()?;
    let report = Report::from_store(&store, &document, &analytics);

    let format_name = args
        .format
        .map(ReportFormat::format_name)
        .unwrap_or(ctx.config.report.default_format.as_str());

    let export_manager = ExportManager::new();

    if let Some(output_path) = args.output {
        let written = export_manager
            .export_to_file(&report, format_name, &output_path)
            .context(format!("Failed to write to {}", output_path.display()))?;
        eprintln!(
            "{} Exported report for {} ({} comments) to {}",
            "✓".green(),
            document.to_string().cyan(),
            report.comment_count.to_string().yellow(),
            written.display()
        );
    } else {
        let output = export_manager.export(&report, format_name)?;
        let mut stdout = std::io::stdout();
        stdout
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
        if !output.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
