use std::path::PathBuf;

use super::LookupContext;
use crate::resolver::variations::store_variations;

/// Store app execution alias lookup inside the per-user alias directory.
pub(super) fn lookup(ctx: &LookupContext<'_>, name: &str) -> Option<PathBuf> {
    let store_dir = ctx.roots.store_dir.as_ref()?;

    store_variations(name)
        .into_iter()
        .map(|variation| store_dir.join(variation))
        .find(|candidate| ctx.probes.fs.exists(candidate))
}
