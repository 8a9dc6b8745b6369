use std::path::PathBuf;

use tracing::debug;

use super::LookupContext;
use crate::resolver::variations::name_variations;

/// Scan `root/<subdir>/<variation>` for every install root.
///
/// Cost grows with subdirectories times variations, which is why this runs
/// last in the cascade. Only one level deep.
pub(super) fn lookup(ctx: &LookupContext<'_>, name: &str) -> Option<PathBuf> {
    let variations = name_variations(name);

    for root in &ctx.roots.install_roots {
        let subdirectories = ctx.probes.fs.subdirectories(root);
        debug!(
            event = "core.resolver.install_root_scanned",
            root = %root.display(),
            subdirectory_count = subdirectories.len()
        );

        for app_dir in &subdirectories {
            for variation in &variations {
                let candidate = app_dir.join(variation);
                if ctx.probes.fs.exists(&candidate) {
                    return Some(candidate);
                }
            }
        }
    }

    None
}
