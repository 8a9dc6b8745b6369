use std::path::PathBuf;

use tracing::debug;

use super::LookupContext;

/// Executable search path lookup for the name exactly as given.
pub(super) fn lookup(ctx: &LookupContext<'_>, name: &str) -> Option<PathBuf> {
    let found = ctx.probes.search.find(name)?;

    if ctx.probes.fs.exists(&found) {
        Some(found)
    } else {
        debug!(
            event = "core.resolver.search_path_stale",
            name = name,
            path = %found.display()
        );
        None
    }
}
