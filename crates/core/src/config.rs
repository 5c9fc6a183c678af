//! Key/value configuration store backed by `.sift/config.toml`
//!
//! Higher layers address settings by fixed dotted keys (`checkout.sparse`,
//! `checkout.ignore_case`). A missing file or missing key is
//! reported as `None`, never as an error; writes are read-modify-write over
//! the whole file.

use crate::{fsutil, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Well-known configuration keys.
pub mod keys {
    /// Whether sparse checkout is enabled for the repository.
    pub const SPARSE: &str = "checkout.sparse";
    /// Whether pattern matching ignores case.
    pub const IGNORE_CASE: &str = "checkout.ignore_case";
}

/// Parsed configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// `[checkout]` section
    #[serde(default)]
    pub checkout: CheckoutSection,
}

/// `[checkout]` settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutSection {
    /// Sparse checkout enabled flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparse: Option<bool>,
    /// Case-insensitive pattern matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

/// Configuration store bound to one file path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the given configuration file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration; an absent file yields the defaults.
    pub fn load(&self) -> Result<Config> {
        match fsutil::read_opt(&self.path)? {
            Some(text) => toml::from_str(&text).map_err(|source| Error::ConfigParse {
                path: self.path.clone(),
                source,
            }),
            None => Ok(Config::default()),
        }
    }

    /// Persist the configuration, creating parent directories as needed.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string(config)?;
        fsutil::truncate_and_write(&self.path, &text)?;
        Ok(())
    }

    /// Look up a boolean setting. Absent file or key yields `Ok(None)`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        let config = self.load()?;
        match key {
            keys::SPARSE => Ok(config.checkout.sparse),
            keys::IGNORE_CASE => Ok(config.checkout.ignore_case),
            _ => Err(Error::UnknownConfigKey(key.to_string())),
        }
    }

    /// Set a boolean setting via read-modify-write of the backing file.
    pub fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        let mut config = self.load()?;
        match key {
            keys::SPARSE => config.checkout.sparse = Some(value),
            keys::IGNORE_CASE => config.checkout.ignore_case = Some(value),
            _ => return Err(Error::UnknownConfigKey(key.to_string())),
        }
        tracing::debug!(key, value, "updating config");
        self.save(&config)
    }
}
