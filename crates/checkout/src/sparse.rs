//! Per-operation sparse-checkout handle

use crate::Result;
use sift_core::config::keys;
use sift_core::{fsutil, Repository};
use sift_rules::{Decision, DirHint, RuleCache, RuleSet};
use std::path::PathBuf;
use std::sync::Arc;

/// Handle bundling a repository, the case-insensitivity flag, and the parsed
/// rule set for the duration of one logical operation.
///
/// The flag is read once at construction; the rule set is built lazily under
/// the cache's lock and shared as an immutable snapshot. Handles are meant to
/// be constructed per operation and dropped at its end, not held across
/// unrelated calls.
pub struct Sparse<'r> {
    repo: &'r Repository,
    ignore_case: bool,
    file_existed: bool,
    cache: RuleCache,
}

impl<'r> Sparse<'r> {
    /// Open a sparse-checkout handle for `repo`.
    ///
    /// Reads `checkout.ignore_case` (absent means case-sensitive) and
    /// materializes an empty pattern file if none exists yet — an existing
    /// file is never touched.
    pub fn open(repo: &'r Repository) -> Result<Sparse<'r>> {
        let ignore_case = repo
            .config()
            .get_bool(keys::IGNORE_CASE)?
            .unwrap_or(false);

        let created = fsutil::create_file_with_path(&repo.sparse_file())?;
        if created {
            tracing::debug!(path = %repo.sparse_file().display(), "created empty pattern file");
        }

        Ok(Sparse {
            repo,
            ignore_case,
            file_existed: !created,
            cache: RuleCache::new(),
        })
    }

    /// The repository this handle operates on.
    pub fn repo(&self) -> &Repository {
        self.repo
    }

    /// Whether the pattern file already existed before [`Sparse::open`].
    pub fn file_existed(&self) -> bool {
        self.file_existed
    }

    /// Whether rule matching folds case.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Path of the backing pattern file.
    pub(crate) fn file(&self) -> PathBuf {
        self.repo.sparse_file()
    }

    /// Parsed rules, built at most once per handle (and rebuilt after a
    /// text-level write invalidates the snapshot).
    pub fn rules(&self) -> Result<Arc<RuleSet>> {
        let path = self.file();
        self.cache.get_or_build(&path, || {
            let text = fsutil::read_opt(&path)?.unwrap_or_default();
            Ok(RuleSet::parse(&text, self.ignore_case))
        })
    }

    /// Forget the parsed snapshot after the backing file changed.
    pub(crate) fn invalidate_rules(&self) {
        self.cache.invalidate(&self.file());
    }

    /// Classify a repo-relative path against the parsed rules.
    pub fn lookup(&self, path: &str, hint: DirHint) -> Result<Decision> {
        Ok(self.rules()?.lookup(path, hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_materializes_pattern_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::create(temp_dir.path()).unwrap();

        assert!(!repo.sparse_file().exists());
        let sparse = Sparse::open(&repo).unwrap();
        assert!(repo.sparse_file().exists());
        assert!(!sparse.file_existed());

        // a second open sees the existing file and leaves it alone
        std::fs::write(repo.sparse_file(), "/*\n").unwrap();
        let sparse = Sparse::open(&repo).unwrap();
        assert!(sparse.file_existed());
        assert_eq!(std::fs::read_to_string(repo.sparse_file()).unwrap(), "/*\n");
    }

    #[test]
    fn test_lookup_uses_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::create(temp_dir.path()).unwrap();
        std::fs::write(
            temp_dir.path().join(".sift/info/sparse-checkout"),
            "/*\n!/*/\n",
        )
        .unwrap();

        let sparse = Sparse::open(&repo).unwrap();
        assert_eq!(
            sparse.lookup("root_file", DirHint::File).unwrap(),
            Decision::Included
        );
        assert_eq!(
            sparse.lookup("sub/file", DirHint::File).unwrap(),
            Decision::Excluded
        );
    }

    #[test]
    fn test_ignore_case_flag_copied_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::create(temp_dir.path()).unwrap();
        repo.config().set_bool(keys::IGNORE_CASE, true).unwrap();

        let sparse = Sparse::open(&repo).unwrap();
        assert!(sparse.ignore_case());

        std::fs::write(repo.sparse_file(), "/README\n").unwrap();
        assert_eq!(
            sparse.lookup("readme", DirHint::File).unwrap(),
            Decision::Included
        );
    }
}
