//! Draft command
//!
//! Add titled drafts to the catalog and search them by title.

use anyhow::{Context, Result};
use clap::Subcommand;

use econsult_core::comment::{preview, PREVIEW_CHARS};
use econsult_core::draft::Draft;
use econsult_core::store::CommentStore;

use super::AppContext;

/// Draft subcommands
#[derive(Debug, Subcommand)]
pub enum DraftCommand {
    /// Add a draft to the catalog
    Add {
        /// Draft title
        title: String,

        /// Introduction shown with the draft
        #[arg(long, short)]
        intro: Option<String>,
    },

    /// List drafts with their comment counts
    List {
        /// Only show drafts whose title contains this text
        #[arg(long, short)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the draft command
pub fn execute(cmd: DraftCommand, ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store()?;

    match cmd {
        DraftCommand::Add { title, intro } => add_draft(&store, &title, intro.as_deref()),
        DraftCommand::List { search, json } => list_drafts(&store, search.as_deref(), json),
    }
}

fn add_draft(store: &dyn CommentStore, title: &str, intro: Option<&str>) -> Result<()> {
    use colored::Colorize;

    let draft = Draft::new(title, intro).context("Invalid draft")?;
    let stored = store
        .register_draft(draft)
        .context("Failed to save draft catalog")?;

    tracing::info!("Registered draft {} as {}", stored.title, stored.id);
    println!(
        "{} Draft {} is document {}",
        "✓".green(),
        stored.title.bold(),
        stored.id.to_string().cyan()
    );

    Ok(())
}

fn list_drafts(store: &dyn CommentStore, search: Option<&str>, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let drafts = store.search_drafts(search.unwrap_or(""));

    if as_json {
        println!("{}", serde_json::to_string_pretty(&drafts)?);
        return Ok(());
    }

    if drafts.is_empty() {
        println!("No drafts found.");
        return Ok(());
    }

    for draft in drafts {
        let count = store.load_or_empty(&draft.id).len();
        println!(
            "{}\t{}\t{}",
            draft.id.to_string().cyan(),
            count,
            draft.title.bold()
        );
        if let Some(intro) = &draft.introduction {
            println!("    {}", preview(intro, PREVIEW_CHARS).dimmed());
        }
    }

    Ok(())
}
