//! Sparse-checkout operations over a sift repository
//!
//! This crate provides:
//! - [`Sparse`], the per-operation handle that parses the pattern file
//! - Text-level pattern store operations (list / set / add)
//! - The public entry points: [`init`], [`set_patterns`], [`add_patterns`],
//!   [`disable`], [`check_path`]

pub mod controller;
pub mod sparse;
pub mod store;

// Re-exports
pub use controller::{
    add_patterns, check_path, disable, init, is_enabled, list_patterns, set_patterns, InitOptions,
};
pub use sift_rules::{Decision, DirHint};
pub use sparse::Sparse;

use thiserror::Error;

/// Errors produced by sparse-checkout operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Repository or configuration access failed.
    #[error(transparent)]
    Core(#[from] sift_core::Error),

    /// Pattern-file I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Common result type used throughout sift-checkout
pub type Result<T> = std::result::Result<T, Error>;
