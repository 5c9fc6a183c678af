//! Repository handle and metadata paths
//!
//! Manages the `.sift/` directory structure:
//! ```text
//! .sift/
//!   config.toml         key/value configuration
//!   info/
//!     sparse-checkout   sparse-checkout pattern file
//! ```

use crate::config::ConfigStore;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the repository metadata directory.
pub const META_DIR: &str = ".sift";

/// Name of the configuration file inside the metadata directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Name of the sparse-checkout pattern file inside `info/`.
pub const SPARSE_FILE: &str = "sparse-checkout";

/// Handle to a sift repository.
pub struct Repository {
    /// Root of the working tree
    root: PathBuf,
    /// Path to the `.sift` directory
    meta_dir: PathBuf,
}

impl Repository {
    /// Open the repository whose working tree root is `root`.
    ///
    /// Fails with [`Error::NotARepository`] if `root/.sift` does not exist.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(META_DIR);
        if !meta_dir.is_dir() {
            return Err(Error::NotARepository(root));
        }

        Ok(Self { root, meta_dir })
    }

    /// Create the `.sift` metadata directory at `root` and open it.
    ///
    /// Re-opening an already initialized repository is not an error.
    pub fn create(root: impl AsRef<Path>) -> Result<Self> {
        let meta_dir = root.as_ref().join(META_DIR);
        fs::create_dir_all(meta_dir.join("info"))?;
        Self::open(root)
    }

    /// Find a repository by walking up from `start` to the filesystem root.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        let start = start.as_ref();
        let mut current = start.to_path_buf();

        loop {
            if current.join(META_DIR).is_dir() {
                return Self::open(current);
            }
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(Error::NotARepository(start.to_path_buf())),
            }
        }
    }

    /// Root of the working tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the `.sift` metadata directory.
    pub fn meta_dir(&self) -> &Path {
        &self.meta_dir
    }

    /// Path of the `info/` directory holding the pattern file.
    pub fn info_dir(&self) -> PathBuf {
        self.meta_dir.join("info")
    }

    /// Path of the sparse-checkout pattern file.
    pub fn sparse_file(&self) -> PathBuf {
        self.info_dir().join(SPARSE_FILE)
    }

    /// Configuration store for this repository.
    pub fn config(&self) -> ConfigStore {
        ConfigStore::new(self.meta_dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_requires_meta_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Repository::open(temp_dir.path()).is_err());

        Repository::create(temp_dir.path()).unwrap();
        assert!(Repository::open(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        Repository::create(temp_dir.path()).unwrap();

        let nested = temp_dir.path().join("src/deep/dir");
        fs::create_dir_all(&nested).unwrap();

        let repo = Repository::discover(&nested).unwrap();
        assert_eq!(repo.root(), temp_dir.path());
    }

    #[test]
    fn test_discover_fails_outside_repository() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Repository::discover(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::create(temp_dir.path()).unwrap();

        repo.config()
            .set_bool(crate::config::keys::SPARSE, true)
            .unwrap();
        let repo = Repository::open(temp_dir.path()).unwrap();
        assert_eq!(
            repo.config().get_bool(crate::config::keys::SPARSE).unwrap(),
            Some(true)
        );
    }

    #[test]
    fn test_metadata_paths() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::create(temp_dir.path()).unwrap();

        assert_eq!(repo.meta_dir(), temp_dir.path().join(META_DIR));
        assert_eq!(
            repo.sparse_file(),
            temp_dir.path().join(".sift/info/sparse-checkout")
        );
    }
}
