use std::path::PathBuf;

use super::LookupContext;
use crate::resolver::variations::name_variations;

/// Installed-application registry lookup.
///
/// Locations are the outer loop, so a machine-wide registration of any
/// variation wins over a per-user one. A recorded path must still exist.
pub(super) fn lookup(ctx: &LookupContext<'_>, name: &str) -> Option<PathBuf> {
    let variations = name_variations(name);

    for location in &ctx.roots.registry_locations {
        for variation in &variations {
            if let Some(path) = ctx.probes.registry.query(location, variation)
                && ctx.probes.fs.exists(&path)
            {
                return Some(path);
            }
        }
    }

    None
}
