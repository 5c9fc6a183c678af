//! Turn sparse checkout off

use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let repo = util::find_repo()?;
    sift_checkout::disable(&repo).context("Failed to update configuration")?;

    println!("{} sparse checkout disabled", "✓".green());
    println!(
        "  pattern file kept at {}",
        repo.sparse_file().display()
    );
    Ok(())
}
