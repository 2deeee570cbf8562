//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod analyze;
pub mod comment;
pub mod config;
pub mod draft;
pub mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use econsult_core::config::{Config, DEFAULT_CONFIG_PATH};
use econsult_core::draft::Draft;
use econsult_core::types::DocumentId;
use econsult_storage::FileSystemStore;

/// Project-local data directory
const PROJECT_DATA_DIR: &str = ".econsult";

/// econsult - comment analytics for e-consultation drafts
#[derive(Debug, Parser)]
#[command(name = "econsult")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Comment storage directory
    #[arg(long, global = true, env = "ECONSULT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage stakeholder comments
    #[command(subcommand)]
    Comment(comment::CommentCommand),

    /// Manage the titled draft catalog
    #[command(subcommand)]
    Draft(draft::DraftCommand),

    /// Render the analytics report for a document
    Report(report::ReportArgs),

    /// Run a single analysis step on ad-hoc text
    #[command(subcommand)]
    Analyze(analyze::AnalyzeCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Document selection shared by commands that read the store
#[derive(Debug, Clone, Default, Args)]
pub struct DocumentArgs {
    /// Document id (defaults to storage.default_document)
    #[arg(long, short, conflicts_with = "title")]
    pub document: Option<String>,

    /// Derive the document id from a draft title
    #[arg(long)]
    pub title: Option<String>,
}

impl DocumentArgs {
    /// Resolve to a document id
    pub fn resolve(&self, config: &Config) -> Result<DocumentId> {
        if let Some(title) = &self.title {
            return Ok(DocumentId::from_title(title));
        }
        let raw = self
            .document
            .clone()
            .unwrap_or_else(|| config.storage.default_document.clone());
        DocumentId::from_string(raw.clone()).context(format!("Invalid document: {}", raw))
    }

    /// Catalog entry for a document selected by title
    pub fn draft(&self) -> Result<Option<Draft>> {
        self.title
            .as_deref()
            .map(|title| Draft::new(title, None).context("Invalid draft title"))
            .transpose()
    }
}

/// Settings shared by store-backed commands
pub struct AppContext {
    pub config: Config,
    data_dir: Option<PathBuf>,
}

impl AppContext {
    /// Load configuration and resolve the data directory
    pub fn load(cli_config: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config_path = config_path(cli_config);
        let config = Config::load(&config_path).with_context(|| {
            format!("Failed to load configuration from {}", config_path.display())
        })?;
        let data_dir = data_dir.or_else(|| config.storage.data_dir.clone());
        Ok(Self { config, data_dir })
    }

    /// Open the comment store.
    ///
    /// Uses the explicit data directory if any, then a project-local
    /// `.econsult`, then the user data directory.
    pub fn open_store(&self) -> Result<FileSystemStore> {
        let store = match &self.data_dir {
            Some(dir) => FileSystemStore::new(dir),
            None if Path::new(PROJECT_DATA_DIR).is_dir() => FileSystemStore::new(PROJECT_DATA_DIR),
            None => FileSystemStore::default_location(),
        }
        .context("Failed to open comment store")?;

        tracing::debug!("Using comment store at {:?}", store.base_dir());
        Ok(store)
    }
}

/// Configuration file in effect
pub fn config_path(cli_config: Option<&Path>) -> PathBuf {
    cli_config
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler
    match cli.command {
        Commands::Comment(cmd) => {
            let ctx = AppContext::load(cli.config.as_deref(), cli.data_dir)?;
            comment::execute(cmd, &ctx)
        }
        Commands::Draft(cmd) => {
            let ctx = AppContext::load(cli.config.as_deref(), cli.data_dir)?;
            draft::execute(cmd, &ctx)
        }
        Commands::Report(args) => {
            let ctx = AppContext::load(cli.config.as_deref(), cli.data_dir)?;
            report::execute(args, &ctx)
        }
        Commands::Analyze(cmd) => analyze::execute(cmd),
        Commands::Config(cmd) => config::execute(cmd, &config_path(cli.config.as_deref())),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
