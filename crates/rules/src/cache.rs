//! Lock-guarded rule-set cache
//!
//! Translating pattern-file text into a [`RuleSet`] must happen under mutual
//! exclusion so that two threads initializing rules for the same source do
//! not race. The cache holds its lock for the whole build and hands out
//! reference-counted snapshots; readers never observe a set under
//! construction, and lookups take no lock at all.

use crate::ruleset::RuleSet;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Cache of parsed rule sets keyed by their source path.
#[derive(Debug, Default)]
pub struct RuleCache {
    entries: Mutex<HashMap<PathBuf, Arc<RuleSet>>>,
}

impl RuleCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached rule set for `key`, building it first if absent.
    ///
    /// The internal lock is held for the full duration of `build`; a second
    /// caller for the same key blocks until the first build finishes and
    /// then receives the same snapshot. A failed build caches nothing.
    pub fn get_or_build<E, F>(&self, key: &Path, build: F) -> Result<Arc<RuleSet>, E>
    where
        F: FnOnce() -> Result<RuleSet, E>,
    {
        let mut entries = self.entries.lock();
        if let Some(set) = entries.get(key) {
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(build()?);
        entries.insert(key.to_path_buf(), Arc::clone(&set));
        Ok(set)
    }

    /// Drop the cached set for `key`, forcing the next access to rebuild.
    pub fn invalidate(&self, key: &Path) {
        self.entries.lock().remove(key);
    }
}
