//! List the configured sparse-checkout patterns

use crate::util;
use anyhow::{Context, Result};

pub fn run() -> Result<()> {
    let repo = util::find_repo()?;
    let patterns =
        sift_checkout::list_patterns(&repo).context("Failed to read the pattern file")?;

    for pattern in patterns {
        println!("{pattern}");
    }
    Ok(())
}
