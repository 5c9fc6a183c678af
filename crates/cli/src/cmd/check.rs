//! Classify paths against the sparse-checkout rules

use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use sift_checkout::Decision;

pub fn run(paths: Vec<String>) -> Result<()> {
    let repo = util::find_repo()?;

    for path in &paths {
        let decision = sift_checkout::check_path(&repo, path)
            .with_context(|| format!("Failed to classify {path}"))?;
        match decision {
            Decision::Included => println!("{} {}", "included".green(), path),
            Decision::Excluded => println!("{} {}", "excluded".dimmed(), path),
        }
    }
    Ok(())
}
