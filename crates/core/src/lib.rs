//! Sift Core - Repository handle and configuration for the sift sparse-checkout system
//!
//! This crate provides the foundational layer:
//! - Repository discovery and metadata paths
//! - Key/value configuration store (TOML-backed)
//! - File I/O helpers shared by the higher crates

pub mod config;
pub mod fsutil;
pub mod repo;

// Re-export main types for convenience
pub use config::{Config, ConfigStore};
pub use repo::Repository;

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by repository and configuration access.
#[derive(Debug, Error)]
pub enum Error {
    /// No `.sift` directory was found at or above the given path.
    #[error("not a sift repository (no .sift directory found above {})", .0.display())]
    NotARepository(PathBuf),

    /// The configuration file exists but is not valid TOML.
    #[error("invalid configuration in {}", .path.display())]
    ConfigParse {
        /// Path of the offending configuration file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be serialized back to TOML.
    #[error("failed to serialize configuration")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The caller asked for a configuration key this store does not know.
    #[error("unknown config key: {0}")]
    UnknownConfigKey(String),

    /// Underlying file I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Common result type used throughout sift-core
pub type Result<T> = std::result::Result<T, Error>;
