//! econsult - comment analytics for e-consultation drafts
//!
//! Collects stakeholder comments per draft document and reports word
//! frequencies, comment length bands, sentiment and an extractive summary.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a project-local configuration
//! econsult config init
//!
//! # Record comments
//! econsult comment add "The definition of e-consultation module is clear."
//!
//! # Render the report
//! econsult report --format markdown
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
