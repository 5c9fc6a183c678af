//! Text-level pattern store: list / set / add
//!
//! These operations work on the raw pattern file, bypassing the rule parser
//! entirely — comments, skipped lines, and eliminated rules all round-trip
//! untouched.

use crate::sparse::Sparse;
use crate::Result;
use sift_core::fsutil;
use std::fs;

impl Sparse<'_> {
    /// Patterns currently in the file, in file order.
    ///
    /// Line terminators may be LF, CRLF, or lone CR; empty lines are not
    /// returned. Fails if the file is unreadable.
    pub fn list(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(self.file())?;
        Ok(split_patterns(&text))
    }

    /// Overwrite the file with `patterns`, one per line, LF-terminated.
    ///
    /// This is a truncate-then-write: a failure in between can leave the
    /// file empty, and concurrent writers resolve to last-writer-wins.
    pub fn set(&self, patterns: &[String]) -> Result<()> {
        let mut content = patterns.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }

        fsutil::truncate_and_write(&self.file(), &content)?;
        tracing::debug!(count = patterns.len(), "rewrote pattern file");
        self.invalidate_rules();
        Ok(())
    }

    /// Append `patterns` after the existing ones.
    ///
    /// No deduplication and no reordering; the read and the rewrite are not
    /// one atomic step, so two concurrent adders can lose one addition.
    pub fn add(&self, patterns: &[String]) -> Result<()> {
        let mut combined = self.list()?;
        combined.extend(patterns.iter().cloned());
        self.set(&combined)
    }
}

/// Split pattern-file text into non-empty tokens.
fn split_patterns(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
