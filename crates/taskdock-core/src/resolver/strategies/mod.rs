//! The lookup strategies, one module each.
//!
//! Every strategy is a plain function `(ctx, name) -> Option<PathBuf>` that
//! only reports paths the filesystem probe confirms exist. Ordering lives in
//! [`Strategy::CASCADE`]; reordering the cascade is a data change.

mod app_paths;
mod direct;
mod install_dirs;
mod search_path;
mod store_apps;

use std::path::PathBuf;

use super::probes::Probes;
use super::roots::SearchRoots;
use super::types::Strategy;

/// Everything a strategy may consult.
pub struct LookupContext<'a> {
    pub roots: &'a SearchRoots,
    pub probes: &'a Probes,
}

impl Strategy {
    /// Run this strategy for `name`.
    pub fn lookup(self, ctx: &LookupContext<'_>, name: &str) -> Option<PathBuf> {
        match self {
            Strategy::DirectPath => direct::lookup(ctx, name),
            Strategy::SearchPath => search_path::lookup(ctx, name),
            Strategy::AppPaths => app_paths::lookup(ctx, name),
            Strategy::StoreApps => store_apps::lookup(ctx, name),
            Strategy::InstallDirs => install_dirs::lookup(ctx, name),
        }
    }
}
