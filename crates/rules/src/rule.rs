//! One parsed pattern line

use globset::{GlobBuilder, GlobMatcher};

/// Glob metacharacters that mark a pattern as wildcarded.
const WILDCARD_CHARS: &[char] = &['*', '?', '['];

/// A single parsed sparse-checkout rule.
///
/// Rules are immutable once constructed; all flags are derived from the
/// pattern text at parse time except `ignore_case`, which is copied from the
/// repository-wide setting.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    negated: bool,
    dir_only: bool,
    wildcard: bool,
    anchored: bool,
    ignore_case: bool,
    matcher: GlobMatcher,
}

impl Rule {
    /// Parse one pattern-file line.
    ///
    /// Returns `None` for lines that carry no rule: empty lines, `#` comments,
    /// lines that reduce to an empty pattern, and patterns `globset` rejects.
    /// A skipped line is never an error.
    ///
    /// Recognized syntax:
    /// - leading `!` negates the rule (`\!` for a literal `!`)
    /// - trailing `/` restricts the rule to directories
    /// - a `/` anywhere else anchors the pattern to the repository root;
    ///   without one the pattern matches against basenames at any depth
    /// - trailing unescaped spaces are stripped, interior spaces are kept
    pub fn parse(line: &str, ignore_case: bool) -> Option<Rule> {
        let line = trim_trailing_spaces(line);
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (negated, rest) = match line.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, line),
        };

        // \! and \# escape the markers that are special at line start
        let rest = rest
            .strip_prefix("\\!")
            .map(|r| format!("!{r}"))
            .or_else(|| rest.strip_prefix("\\#").map(|r| format!("#{r}")))
            .unwrap_or_else(|| rest.to_string());

        let (dir_only, rest) = match rest.strip_suffix('/') {
            Some(stripped) if !stripped.ends_with('\\') => (true, stripped),
            _ => (false, rest.as_str()),
        };

        let pattern = rest.trim_start_matches('/').to_string();
        if pattern.is_empty() {
            return None;
        }

        let anchored = rest.starts_with('/') || pattern.contains('/');
        let wildcard = pattern.contains(WILDCARD_CHARS);

        let matcher = match GlobBuilder::new(&pattern)
            .literal_separator(anchored)
            .case_insensitive(ignore_case)
            .backslash_escape(true)
            .build()
        {
            Ok(glob) => glob.compile_matcher(),
            Err(e) => {
                tracing::debug!(line, error = %e, "skipping unparsable pattern");
                return None;
            }
        };

        Some(Rule {
            pattern,
            negated,
            dir_only,
            wildcard,
            anchored,
            ignore_case,
            matcher,
        })
    }

    /// Pattern text with markers stripped (no `!`, no trailing `/`, no
    /// leading `/`).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the rule began with an unescaped `!`.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the rule only applies to directories.
    pub fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// Whether the pattern contains glob metacharacters.
    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Whether the pattern is matched against the whole repo-relative path
    /// rather than the basename.
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Whether matching folds case.
    pub fn is_case_insensitive(&self) -> bool {
        self.ignore_case
    }

    /// Match this rule at one directory level of the ancestor walk.
    ///
    /// `prefix` is the current repo-relative path prefix and `basename` its
    /// final segment; anchored rules see the former, unanchored rules the
    /// latter.
    pub fn matches(&self, prefix: &str, basename: &str) -> bool {
        if self.anchored {
            self.matcher.is_match(prefix)
        } else {
            self.matcher.is_match(basename)
        }
    }

    /// Match this rule against raw pattern text (used to decide whether a
    /// wildcard rule could be negated by a later literal negation).
    pub fn matches_pattern_text(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Strip trailing unescaped spaces from a line.
fn trim_trailing_spaces(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut end = line.len();
    while end > 0 && bytes[end - 1] == b' ' {
        if end >= 2 && bytes[end - 2] == b'\\' {
            break;
        }
        end -= 1;
    }
    &line[..end]
}
