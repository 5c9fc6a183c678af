//! Sift CLI - sift command

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod util;

/// Sift - sparse checkout manager for your working tree
#[derive(Parser)]
#[command(name = "sift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enable sparse checkout and seed the pattern file
    Init {
        /// Initial pattern (repeatable); defaults to root-level entries only
        #[arg(long = "pattern", value_name = "PATTERN")]
        patterns: Vec<String>,
    },
    /// List the configured patterns
    List,
    /// Replace the configured patterns
    Set {
        /// Patterns in file order (later rules override earlier ones)
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Append patterns after the existing ones
    Add {
        /// Patterns to append
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Turn sparse checkout off (the pattern file is kept)
    Disable,
    /// Classify paths against the configured patterns
    Check {
        /// Repo-relative paths; a trailing slash marks a directory
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { patterns } => cmd::init::run(patterns),
        Commands::List => cmd::list::run(),
        Commands::Set { patterns } => cmd::set::run(patterns),
        Commands::Add { patterns } => cmd::add::run(patterns),
        Commands::Disable => cmd::disable::run(),
        Commands::Check { paths } => cmd::check::run(paths),
    }
}
