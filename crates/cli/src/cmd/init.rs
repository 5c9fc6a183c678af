//! Enable sparse checkout in a repository

use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use sift_checkout::InitOptions;
use sift_core::Repository;

pub fn run(patterns: Vec<String>) -> Result<()> {
    let cwd = util::current_dir()?;

    // Reuse an enclosing repository, or start one here
    let repo = match Repository::discover(&cwd) {
        Ok(repo) => repo,
        Err(_) => Repository::create(&cwd)
            .with_context(|| format!("Failed to initialize repository at {}", cwd.display()))?,
    };

    let seeded = !repo.sparse_file().exists();
    let opts = InitOptions { patterns };
    sift_checkout::init(&repo, &opts).context("Failed to enable sparse checkout")?;

    println!(
        "{} sparse checkout enabled at {}",
        "✓".green(),
        repo.root().display()
    );
    if seeded {
        println!("  patterns seeded in {}", repo.sparse_file().display());
    } else {
        println!(
            "  existing patterns kept in {}",
            repo.sparse_file().display()
        );
    }
    Ok(())
}
