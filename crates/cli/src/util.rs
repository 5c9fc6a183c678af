//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use sift_core::Repository;
use std::path::PathBuf;

/// Find the enclosing repository by walking up from cwd to find `.sift/`.
pub fn find_repo() -> Result<Repository> {
    let cwd = current_dir()?;
    let repo = Repository::discover(&cwd)
        .context("Not a sift repository (no .sift directory found); run 'sift init' first")?;
    tracing::debug!(root = %repo.root().display(), "using repository");
    Ok(repo)
}

/// Current working directory.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}
