use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::types::CacheStats;

/// Memo of lookup key to resolved executable path.
///
/// Keys are the caller's raw strings, so `"Foo"` and `"foo.exe"` are cached
/// separately even when they resolve to the same file. Only successful
/// lookups are stored, and entries are never re-validated against the
/// filesystem; [`clear`](Self::clear) is the only way to drop them.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: Mutex<HashMap<String, PathBuf>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<PathBuf> {
        self.lock().get(key).cloned()
    }

    pub fn insert(&self, key: impl Into<String>, path: PathBuf) {
        self.lock().insert(key.into(), path);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.lock();
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            size: entries.len(),
            keys,
        }
    }

    /// Hold the cache for a whole read-lookup-write sequence.
    ///
    /// Recovers from poisoning; every write is a single map operation.
    pub(crate) fn lock(&self) -> MutexGuard<'_, HashMap<String, PathBuf>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
