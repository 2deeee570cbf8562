//! Analyze command
//!
//! Run tokenization or sentiment scoring on text given on the command line.

use anyhow::Result;
use clap::Subcommand;

use econsult_core::analysis::{score, tokenize};

/// Analyze subcommands
#[derive(Debug, Subcommand)]
pub enum AnalyzeCommand {
    /// Print the normalized tokens of a text
    Tokenize {
        /// Text to tokenize
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify the sentiment of a text
    Classify {
        /// Text to classify
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the analyze command
pub fn execute(cmd: AnalyzeCommand) -> Result<()> {
    match cmd {
        AnalyzeCommand::Tokenize { text, json } => {
            let tokens = tokenize(&text);
            if json {
                println!("{}", serde_json::to_string(&tokens)?);
            } else {
                for token in tokens {
                    println!("{}", token);
                }
            }
        }
        AnalyzeCommand::Classify { text, json } => {
            let score = score(&text);
            let sentiment = score.sentiment();
            if json {
                let value = serde_json::json!({
                    "sentiment": sentiment,
                    "positive": score.positive,
                    "negative": score.negative,
                });
                println!("{}", value);
            } else {
                println!(
                    "{} (positive: {}, negative: {})",
                    sentiment, score.positive, score.negative
                );
            }
        }
    }

    Ok(())
}
