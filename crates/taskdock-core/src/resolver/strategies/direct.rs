use std::path::{Path, PathBuf};

use super::LookupContext;

/// The name already is a path to an existing file.
pub(super) fn lookup(ctx: &LookupContext<'_>, name: &str) -> Option<PathBuf> {
    let path = Path::new(name);
    ctx.probes.fs.exists(path).then(|| path.to_path_buf())
}
