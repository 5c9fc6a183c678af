//! Replace the configured sparse-checkout patterns

use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run(patterns: Vec<String>) -> Result<()> {
    let repo = util::find_repo()?;
    sift_checkout::set_patterns(&repo, &patterns).context("Failed to write the pattern file")?;

    println!(
        "{} wrote {} pattern{}",
        "✓".green(),
        patterns.len(),
        if patterns.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
