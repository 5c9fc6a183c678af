//! Path classification: reverse-order rule scan with a leaf-to-root walk

use crate::rule::Rule;
use crate::ruleset::RuleSet;

/// Whether a path should materialize in the working tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The path is part of the sparse checkout.
    Included,
    /// The path is left out of the working tree.
    Excluded,
}

/// What the caller knows about a candidate path's directory-ness.
///
/// Directory-only rules are skipped only when the path is *known* not to be
/// a directory; `Unknown` leaves them eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirHint {
    /// Known to be a regular file.
    File,
    /// Known to be a directory.
    Dir,
    /// Not determined at the leaf.
    #[default]
    Unknown,
}

/// The path under evaluation: an immutable repo-relative string plus a
/// cursor that only ever shortens as the walk moves toward the root.
#[derive(Debug, Clone)]
pub struct CandidatePath<'a> {
    full: &'a str,
    end: usize,
    hint: DirHint,
}

impl<'a> CandidatePath<'a> {
    /// Build a candidate from a repo-relative path.
    ///
    /// Leading and trailing separators are ignored; `hint` describes the
    /// leaf only — every ancestor prefix is a directory by construction.
    pub fn new(path: &'a str, hint: DirHint) -> Self {
        let full = path.trim_matches('/');
        Self {
            full,
            end: full.len(),
            hint,
        }
    }

    /// Current path prefix under evaluation.
    pub fn prefix(&self) -> &str {
        &self.full[..self.end]
    }

    /// Final segment of the current prefix.
    pub fn basename(&self) -> &str {
        let prefix = self.prefix();
        match prefix.rfind('/') {
            Some(idx) => &prefix[idx + 1..],
            None => prefix,
        }
    }

    /// Directory hint for the current prefix.
    pub fn hint(&self) -> DirHint {
        self.hint
    }

    /// Shorten the prefix to its parent directory.
    ///
    /// Returns `false` once the prefix has no parent left above the root.
    pub fn ascend(&mut self) -> bool {
        match self.prefix().rfind('/') {
            Some(idx) => {
                self.end = idx;
                self.hint = DirHint::Dir;
                true
            }
            None => false,
        }
    }
}

impl RuleSet {
    /// Classify `path` against this rule set. Never fails.
    ///
    /// At each directory level, rules are scanned in reverse insertion order
    /// and the first match is terminal: a negated rule excludes, any other
    /// rule includes. If nothing matches, the walk moves one level toward
    /// the root (marking the shortened prefix as a directory) and retries.
    /// A path that matches nothing anywhere up to the root is excluded.
    pub fn lookup(&self, path: &str, hint: DirHint) -> Decision {
        let mut candidate = CandidatePath::new(path, hint);

        loop {
            if let Some(rule) = self.match_at(&candidate) {
                tracing::trace!(
                    prefix = candidate.prefix(),
                    pattern = rule.pattern(),
                    negated = rule.is_negated(),
                    "rule matched"
                );
                return if rule.is_negated() {
                    Decision::Excluded
                } else {
                    Decision::Included
                };
            }
            if !candidate.ascend() {
                return Decision::Excluded;
            }
        }
    }

    /// First matching rule at the candidate's current level, scanning in
    /// reverse insertion order.
    fn match_at(&self, candidate: &CandidatePath<'_>) -> Option<&Rule> {
        self.iter().rev().find(|rule| {
            if rule.is_dir_only() && candidate.hint() == DirHint::File {
                return false;
            }
            rule.matches(candidate.prefix(), candidate.basename())
        })
    }
}
