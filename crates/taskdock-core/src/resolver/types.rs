use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

/// One step of the lookup cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The name is itself an existing path.
    DirectPath,
    /// Executable search path (`PATH`).
    SearchPath,
    /// Installed-application registry (App Paths).
    AppPaths,
    /// Per-user store app alias directory.
    StoreApps,
    /// Subdirectories of the well-known install roots.
    InstallDirs,
}

impl Strategy {
    /// Cascade order. Cheapest first; directory enumeration last.
    pub const CASCADE: [Strategy; 5] = [
        Strategy::DirectPath,
        Strategy::SearchPath,
        Strategy::AppPaths,
        Strategy::StoreApps,
        Strategy::InstallDirs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::DirectPath => "direct_path",
            Strategy::SearchPath => "search_path",
            Strategy::AppPaths => "app_paths",
            Strategy::StoreApps => "store_apps",
            Strategy::InstallDirs => "install_dirs",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Cache,
    Lookup(Strategy),
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionSource::Cache => f.write_str("cache"),
            ResolutionSource::Lookup(strategy) => strategy.fmt(f),
        }
    }
}

impl Serialize for ResolutionSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub path: PathBuf,
    pub source: ResolutionSource,
}

/// Diagnostic snapshot of the resolution cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    /// Cached lookup keys, sorted.
    pub keys: Vec<String>,
}
