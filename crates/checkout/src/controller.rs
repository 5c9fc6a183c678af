//! Public sparse-checkout entry points
//!
//! The system has exactly two persistent states, tracked by the
//! `checkout.sparse` configuration flag. The pattern file's existence and
//! contents are independent of that flag and are never implicitly deleted.

use crate::sparse::Sparse;
use crate::Result;
use sift_core::config::keys;
use sift_core::Repository;
use sift_rules::{Decision, DirHint};

/// Patterns seeded by [`init`] when the file does not exist and the caller
/// supplied none: every root-level entry, no subdirectories.
pub const DEFAULT_PATTERNS: [&str; 2] = ["/*", "!/*/"];

/// Options for [`init`].
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Initial patterns to seed an absent pattern file with. When empty,
    /// [`DEFAULT_PATTERNS`] is used instead.
    pub patterns: Vec<String>,
}

/// Whether sparse checkout is enabled for `repo`. An absent flag means
/// disabled.
pub fn is_enabled(repo: &Repository) -> Result<bool> {
    Ok(repo.config().get_bool(keys::SPARSE)?.unwrap_or(false))
}

/// Enable sparse checkout, seeding the pattern file if it does not exist.
///
/// An existing pattern file is never overwritten; calling `init` twice
/// leaves the file exactly as the first call did.
pub fn init(repo: &Repository, opts: &InitOptions) -> Result<()> {
    repo.config().set_bool(keys::SPARSE, true)?;

    let sparse = Sparse::open(repo)?;
    if !sparse.file_existed() {
        if opts.patterns.is_empty() {
            let defaults: Vec<String> = DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect();
            sparse.set(&defaults)?;
        } else {
            sparse.set(&opts.patterns)?;
        }
        tracing::debug!("seeded sparse-checkout pattern file");
    }

    Ok(())
}

/// Turn sparse checkout off.
///
/// Only the configuration flag flips; the pattern file is left intact and
/// the working tree is not restored.
pub fn disable(repo: &Repository) -> Result<()> {
    repo.config().set_bool(keys::SPARSE, false)?;
    Ok(())
}

/// Patterns currently configured, in file order.
pub fn list_patterns(repo: &Repository) -> Result<Vec<String>> {
    Sparse::open(repo)?.list()
}

/// Replace the configured patterns, enabling sparse checkout first if it
/// is not already on.
pub fn set_patterns(repo: &Repository, patterns: &[String]) -> Result<()> {
    if !is_enabled(repo)? {
        init(repo, &InitOptions::default())?;
    }
    Sparse::open(repo)?.set(patterns)
}

/// Append patterns after the existing ones.
///
/// When sparse checkout is not enabled this is a no-op: patterns are not
/// appended to a disabled configuration.
pub fn add_patterns(repo: &Repository, patterns: &[String]) -> Result<()> {
    if !is_enabled(repo)? {
        return Ok(());
    }
    Sparse::open(repo)?.add(patterns)
}

/// Classify a repo-relative path.
///
/// Short-circuits to [`Decision::Included`] whenever sparse checkout is
/// disabled, regardless of what the pattern file says.
pub fn check_path(repo: &Repository, path: &str) -> Result<Decision> {
    if !is_enabled(repo)? {
        return Ok(Decision::Included);
    }

    let sparse = Sparse::open(repo)?;
    sparse.lookup(path, dir_hint(path))
}

/// Directory hint derived from the path form alone.
///
/// The root is always a directory and an explicit trailing separator marks
/// a directory; everything else is treated as a file. The lookup never
/// stats the working tree.
fn dir_hint(path: &str) -> DirHint {
    if path.is_empty() || path.ends_with('/') {
        DirHint::Dir
    } else {
        DirHint::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn repo_in(temp_dir: &TempDir) -> Repository {
        Repository::create(temp_dir.path()).unwrap()
    }

    #[test]
    fn test_init_enables_and_seeds_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        init(&repo, &InitOptions::default()).unwrap();

        assert!(is_enabled(&repo).unwrap());
        assert_eq!(list_patterns(&repo).unwrap(), strings(&["/*", "!/*/"]));
    }

    #[test]
    fn test_init_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        init(&repo, &InitOptions::default()).unwrap();
        set_patterns(&repo, &strings(&["docs/"])).unwrap();

        // a second init must not overwrite the existing file
        init(&repo, &InitOptions::default()).unwrap();
        assert_eq!(list_patterns(&repo).unwrap(), strings(&["docs/"]));
    }

    #[test]
    fn test_init_with_caller_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        let opts = InitOptions {
            patterns: strings(&["src/", "Cargo.toml"]),
        };
        init(&repo, &opts).unwrap();
        assert_eq!(
            list_patterns(&repo).unwrap(),
            strings(&["src/", "Cargo.toml"])
        );
    }

    #[test]
    fn test_init_ignores_caller_patterns_when_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        fs::write(
            temp_dir.path().join(".sift/info/sparse-checkout"),
            "kept/\n",
        )
        .unwrap();

        let opts = InitOptions {
            patterns: strings(&["ignored/"]),
        };
        init(&repo, &opts).unwrap();
        assert_eq!(list_patterns(&repo).unwrap(), strings(&["kept/"]));
    }

    #[test]
    fn test_set_implicitly_enables() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        set_patterns(&repo, &strings(&["src/"])).unwrap();
        assert!(is_enabled(&repo).unwrap());
        assert_eq!(list_patterns(&repo).unwrap(), strings(&["src/"]));
    }

    #[test]
    fn test_add_is_noop_when_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        add_patterns(&repo, &strings(&["src/"])).unwrap();
        assert!(!is_enabled(&repo).unwrap());
        // nothing was appended, not even an empty file write
        assert!(!repo.sparse_file().exists());
    }

    #[test]
    fn test_add_appends_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        init(&repo, &InitOptions::default()).unwrap();
        add_patterns(&repo, &strings(&["docs/"])).unwrap();
        assert_eq!(
            list_patterns(&repo).unwrap(),
            strings(&["/*", "!/*/", "docs/"])
        );
    }

    #[test]
    fn test_disable_preserves_pattern_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        set_patterns(&repo, &strings(&["src/", "!src/gen/"])).unwrap();
        let before = fs::read_to_string(repo.sparse_file()).unwrap();

        disable(&repo).unwrap();

        assert!(!is_enabled(&repo).unwrap());
        let after = fs::read_to_string(repo.sparse_file()).unwrap();
        assert_eq!(before, after);
        assert_eq!(
            list_patterns(&repo).unwrap(),
            strings(&["src/", "!src/gen/"])
        );
    }

    #[test]
    fn test_check_path_short_circuits_when_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        // no flag at all
        assert_eq!(
            check_path(&repo, "anything").unwrap(),
            Decision::Included
        );

        // explicitly disabled, with patterns that would exclude everything
        init(&repo, &InitOptions::default()).unwrap();
        set_patterns(&repo, &strings(&["!*"])).unwrap();
        disable(&repo).unwrap();
        assert_eq!(
            check_path(&repo, "anything").unwrap(),
            Decision::Included
        );
    }

    #[test]
    fn test_check_path_with_default_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        init(&repo, &InitOptions::default()).unwrap();

        assert_eq!(check_path(&repo, "root_file").unwrap(), Decision::Included);
        assert_eq!(
            check_path(&repo, "sub/dir_file").unwrap(),
            Decision::Excluded
        );
        assert_eq!(check_path(&repo, "sub/").unwrap(), Decision::Excluded);
    }

    #[test]
    fn test_check_path_trailing_separator_marks_directory() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        init(&repo, &InitOptions::default()).unwrap();
        set_patterns(&repo, &strings(&["build/"])).unwrap();

        // without the separator the leaf is treated as a file, so the
        // directory-only rule is skipped at the leaf level
        assert_eq!(check_path(&repo, "build").unwrap(), Decision::Excluded);
        assert_eq!(check_path(&repo, "build/").unwrap(), Decision::Included);
    }

    #[test]
    fn test_check_path_default_is_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        init(&repo, &InitOptions::default()).unwrap();
        set_patterns(&repo, &strings(&["docs/"])).unwrap();

        assert_eq!(
            check_path(&repo, "src/main.rs").unwrap(),
            Decision::Excluded
        );
    }
}
