//! Decide whether a path is further traversal work under the symlink policy.

use anyhow::{Result, bail};
use std::io;
use std::path::Path;

use crate::pipeline::MetadataProvider;
use crate::{DirId, FileKind};

/// Probe `path` (following links only when `follow_links`) and return its [`DirId`] when it
/// should be queued for listing.
///
/// - symlink: never queued. With `follow_links` the probe already resolved the link, so a link
///   to a directory comes back as a directory.
/// - directory: queued.
/// - anything else: not queued.
///
/// Probe errors are returned; callers treat them as "not expandable".
pub fn classify<P>(provider: &P, path: &Path, follow_links: bool) -> io::Result<Option<DirId>>
where
    P: MetadataProvider + ?Sized,
{
    let snap = provider.probe(path, follow_links)?;
    Ok(match snap.kind {
        FileKind::Directory => Some(snap.dir_id()),
        _ => None,
    })
}

/// Pre-traversal check: `root` must exist and classify as expandable.
pub fn validate_root<P>(provider: &P, root: &Path, follow_links: bool) -> Result<DirId>
where
    P: MetadataProvider + ?Sized,
{
    match classify(provider, root, follow_links) {
        Ok(Some(id)) => Ok(id),
        Ok(None) => bail!("'{}' is not a dir", root.display()),
        Err(e) => bail!("cannot access '{}': {}", root.display(), e),
    }
}
