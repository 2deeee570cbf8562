//! Comment command
//!
//! Record, list and clear stakeholder comments.

use anyhow::{Context, Result};
use clap::Subcommand;

use econsult_core::analysis::classify;
use econsult_core::comment::{CommentBuilder, PREVIEW_CHARS};
use econsult_core::store::CommentStore;

use super::{AppContext, DocumentArgs};

/// Comment subcommands
#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    /// Add a comment to a document
    Add {
        /// Comment text
        text: String,

        #[command(flatten)]
        document: DocumentArgs,

        /// Author id
        #[arg(long, short)]
        author: Option<String>,
    },

    /// List the comments of a document
    List {
        #[command(flatten)]
        document: DocumentArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Limit number of comments
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// Remove all comments of a document
    Clear {
        #[command(flatten)]
        document: DocumentArgs,

        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// List documents that have comments
    Documents,
}

/// Execute the comment command
pub fn execute(cmd: CommentCommand, ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store()?;

    match cmd {
        CommentCommand::Add {
            text,
            document,
            author,
        } => add_comment(&store, ctx, &document, text, author),
        CommentCommand::List {
            document,
            json,
            limit,
        } => list_comments(&store, ctx, &document, json, limit),
        CommentCommand::Clear { document, yes } => clear_comments(&store, ctx, &document, yes),
        CommentCommand::Documents => list_documents(&store),
    }
}

fn add_comment(
    store: &dyn CommentStore,
    ctx: &AppContext,
    document: &DocumentArgs,
    text: String,
    author: Option<String>,
) -> Result<()> {
    use colored::Colorize;

    let draft = document.draft()?;
    let document = document.resolve(&ctx.config)?;

    let mut builder = CommentBuilder::new()
        .text(text)
        .max_length(ctx.config.storage.max_comment_length);
    if let Some(author) = author {
        builder = builder.author(author);
    }
    let comment = builder.build().context("Invalid comment")?;
    let sentiment = classify(&comment.text);
    let id = comment.id.clone();

    if let Some(draft) = draft {
        store
            .register_draft(draft)
            .context("Failed to record draft title")?;
    }

    store
        .append(&document, comment)
        .context(format!("Failed to save comment to {}", document))?;

    tracing::info!("Added comment {} to {}", id, document);
    println!(
        "{} Added comment {} to {} ({})",
        "✓".green(),
        id.to_string().cyan(),
        document.to_string().bold(),
        sentiment
    );

    Ok(())
}

fn list_comments(
    store: &dyn CommentStore,
    ctx: &AppContext,
    document: &DocumentArgs,
    as_json: bool,
    limit: Option<usize>,
) -> Result<()> {
    use colored::Colorize;

    let document = document.resolve(&ctx.config)?;
    let comments = store.load_or_empty(&document);
    let shown: Vec<_> = comments
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No comments yet.");
        return Ok(());
    }

    println!(
        "{} ({} comments)",
        document.to_string().bold().underline(),
        comments.len()
    );
    println!();

    for comment in shown {
        println!(
            "  {} {}",
            format!("[{}]", classify(&comment.text)).yellow(),
            comment.preview(PREVIEW_CHARS)
        );
        let posted = if comment.timestamp.is_empty() {
            format!("Posted by {}", comment.author_id)
        } else {
            format!("Posted by {} on {}", comment.author_id, comment.timestamp)
        };
        println!("    {}", posted.dimmed());
    }

    Ok(())
}

fn clear_comments(
    store: &dyn CommentStore,
    ctx: &AppContext,
    document: &DocumentArgs,
    yes: bool,
) -> Result<()> {
    use colored::Colorize;

    let document = document.resolve(&ctx.config)?;

    if !store.exists(&document) {
        println!("No comments stored for {}.", document);
        return Ok(());
    }

    if !yes {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all comments of {}?", document))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Clear cancelled.");
            return Ok(());
        }
    }

    store
        .clear(&document)
        .context(format!("Failed to clear {}", document))?;
    println!("{} Cleared comments of {}", "✓".green(), document);

    Ok(())
}

fn list_documents(store: &dyn CommentStore) -> Result<()> {
    let documents = store.documents()?;

    if documents.is_empty() {
        println!("No documents found.");
        return Ok(());
    }

    let drafts = store.drafts_or_empty();
    for document in documents {
        let count = store.load_or_empty(&document).len();
        match drafts.iter().find(|draft| draft.id == document) {
            Some(draft) => println!("{}\t{}\t{}", document, count, draft.title),
            None => println!("{}\t{}", document, count),
        }
    }

    Ok(())
}
