//! Append sparse-checkout patterns

use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run(patterns: Vec<String>) -> Result<()> {
    let repo = util::find_repo()?;

    if !sift_checkout::is_enabled(&repo)? {
        println!(
            "{}",
            "sparse checkout is not enabled; nothing added (run 'sift init' first)".yellow()
        );
        return Ok(());
    }

    sift_checkout::add_patterns(&repo, &patterns).context("Failed to update the pattern file")?;

    println!(
        "{} added {} pattern{}",
        "✓".green(),
        patterns.len(),
        if patterns.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
