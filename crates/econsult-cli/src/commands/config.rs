//! Config command
//!
//! Manage econsult configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::Path;

use econsult_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration
    Init {
        /// Overwrite an existing file (a backup is kept)
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate,

    /// Print the configuration file path
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Init { force } => init_config(config_path, force),
        ConfigCommand::Validate => validate_config(config_path),
        ConfigCommand::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn show_config(config_path: &Path, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if config_path.exists() {
        println!("{}", "Configuration:".bold().underline());
        println!("{}", config_path.display().to_string().dimmed());
    } else {
        println!("{}", "Configuration (defaults):".bold().underline());
    }
    println!();
    println!("{}", config.to_toml()?);

    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if config_path.exists() {
        if !force {
            eprintln!(
                "{} Configuration already exists at {}. Use --force to overwrite.",
                "⚠".yellow(),
                config_path.display()
            );
            return Ok(());
        }

        let backup_path = format!(
            "{}.backup-{}",
            config_path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(config_path, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let content = format!("# econsult configuration\n\n{}", Config::default().to_toml()?);
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Wrote default configuration to {}",
        "✓".green(),
        config_path.display()
    );

    Ok(())
}

fn validate_config(config_path: &Path) -> Result<()> {
    use colored::Colorize;

    if !config_path.exists() {
        anyhow::bail!("Configuration not found at {}", config_path.display());
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid TOML in {}", config_path.display()))?;
    config.validate()?;

    println!("{} Configuration is valid.", "✓".green());
    Ok(())
}
