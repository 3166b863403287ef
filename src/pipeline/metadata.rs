//! Metadata provider: the single seam through which classification and rendering touch the
//! filesystem. [`FsMetadata`] is the real implementation; tests substitute their own.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::Snapshot;
use crate::pipeline::identity::{lookup_group_name, lookup_user_name};

/// Filesystem access used by the traversal engine.
pub trait MetadataProvider {
    /// One stat-family call on `path`. With `follow` the symlink target is reported (`stat`),
    /// otherwise the link itself (`lstat`).
    fn probe(&self, path: &Path, follow: bool) -> io::Result<Snapshot>;

    /// Names of the immediate children of `dir`, in the order the listing yields them.
    ///
    /// `Err` only when the directory cannot be opened. A read error after that ends the listing
    /// and is carried in [`DirListing::error`] next to the names read before it.
    fn list_dir(&self, dir: &Path) -> io::Result<DirListing>;

    /// User name for `uid`.
    fn user_name(&self, uid: u32) -> io::Result<String>;

    /// Group name for `gid`.
    fn group_name(&self, gid: u32) -> io::Result<String>;
}

/// Children of one directory.
#[derive(Debug, Default)]
pub struct DirListing {
    pub names: Vec<OsString>,
    /// Read error that cut the listing short.
    pub error: Option<io::Error>,
}

/// Real filesystem and system user/group database.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsMetadata;

impl MetadataProvider for FsMetadata {
    fn probe(&self, path: &Path, follow: bool) -> io::Result<Snapshot> {
        let meta = if follow {
            fs::metadata(path)?
        } else {
            fs::symlink_metadata(path)?
        };
        Ok(Snapshot::from(&meta))
    }

    fn list_dir(&self, dir: &Path) -> io::Result<DirListing> {
        let mut listing = DirListing::default();
        for entry in fs::read_dir(dir)? {
            match entry {
                Ok(e) => listing.names.push(e.file_name()),
                Err(e) => {
                    listing.error = Some(e);
                    break;
                }
            }
        }
        Ok(listing)
    }

    fn user_name(&self, uid: u32) -> io::Result<String> {
        lookup_user_name(uid)
    }

    fn group_name(&self, gid: u32) -> io::Result<String> {
        lookup_group_name(gid)
    }
}
