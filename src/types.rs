//! Public and internal types for the bftree API and traversal.

use std::fs::{FileType, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::PathBuf;

/// File type as reported by one metadata probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Socket,
    Symlink,
    Regular,
    BlockDevice,
    CharDevice,
    Directory,
    Fifo,
    Unknown,
}

impl From<FileType> for FileKind {
    fn from(ft: FileType) -> Self {
        if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_file() {
            FileKind::Regular
        } else if ft.is_socket() {
            FileKind::Socket
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else if ft.is_fifo() {
            FileKind::Fifo
        } else {
            FileKind::Unknown
        }
    }
}

/// Device + inode pair. Identifies a directory independent of the path used to reach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirId {
    pub dev: u64,
    pub ino: u64,
}

/// Point-in-time metadata for a single path: the result of one stat-family call.
///
/// Taken at visit time and never reused for another entry.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub kind: FileKind,
    /// Permission bits (`mode & 0o777`).
    pub perm: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    /// Size in bytes.
    pub size: u64,
    /// Last modification, seconds since epoch.
    pub mtime: i64,
    pub dev: u64,
    pub ino: u64,
}

impl Snapshot {
    pub fn dir_id(&self) -> DirId {
        DirId {
            dev: self.dev,
            ino: self.ino,
        }
    }
}

impl From<&Metadata> for Snapshot {
    fn from(meta: &Metadata) -> Self {
        Snapshot {
            kind: FileKind::from(meta.file_type()),
            perm: meta.mode() & 0o777,
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            mtime: meta.mtime(),
            dev: meta.dev(),
            ino: meta.ino(),
        }
    }
}

/// Size unit chosen by repeated division by 1024.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kibi,
    Mebi,
    Gibi,
    /// Beyond the named units.
    Unknown,
}

impl SizeUnit {
    /// One-letter unit name. The size column prints no suffix for bytes.
    pub fn suffix(self) -> char {
        match self {
            SizeUnit::Bytes => 'b',
            SizeUnit::Kibi => 'K',
            SizeUnit::Mebi => 'M',
            SizeUnit::Gibi => 'G',
            SizeUnit::Unknown => '?',
        }
    }

    /// The next larger unit, or `None` once past the named units.
    pub fn larger(self) -> Option<SizeUnit> {
        match self {
            SizeUnit::Bytes => Some(SizeUnit::Kibi),
            SizeUnit::Kibi => Some(SizeUnit::Mebi),
            SizeUnit::Mebi => Some(SizeUnit::Gibi),
            SizeUnit::Gibi => Some(SizeUnit::Unknown),
            SizeUnit::Unknown => None,
        }
    }
}

/// Traversal and output options. Built once (CLI, settings file or lib caller) and never mutated
/// while a traversal runs.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Follow symbolic links: probe the target instead of the link, and expand links to directories.
    pub follow_links: bool,
    /// Print the file type character.
    pub show_file_type: bool,
    /// Print the 9-character permission string.
    pub show_permissions: bool,
    /// Print the hard link count.
    pub show_link_count: bool,
    /// Print the owner's user name.
    pub show_owner: bool,
    /// Print the owning group's name.
    pub show_group: bool,
    /// Print the size column.
    pub show_size: bool,
    /// Render size scaled to K/M/G instead of raw bytes.
    pub size_in_units: bool,
    /// Print the last modification date.
    pub show_last_modified: bool,
    /// Debug logging.
    pub verbose: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            follow_links: false,
            show_file_type: false,
            show_permissions: false,
            show_link_count: false,
            show_owner: false,
            show_group: false,
            show_size: true,
            size_in_units: false,
            show_last_modified: false,
            verbose: false,
        }
    }
}

impl Opts {
    /// Long listing shortcut: type, permissions, link count, owner, group and size in units.
    pub fn enable_long_format(&mut self) {
        self.show_file_type = true;
        self.show_permissions = true;
        self.show_link_count = true;
        self.show_owner = true;
        self.show_group = true;
        self.size_in_units = true;
    }
}

/// Outcome of a completed traversal.
#[derive(Clone, Debug, Default)]
pub struct TraversalReport {
    /// Lines written to the output.
    pub visited: usize,
    /// Directories successfully listed.
    pub expanded: usize,
    /// Recoverable failures: (path, message).
    pub skipped: Vec<(PathBuf, String)>,
}
