//! In-memory filesystem for traversal tests: deterministic listing order, injectable failures.

#![allow(dead_code)]

use bftree::pipeline::{DirListing, MetadataProvider};
use bftree::{FileKind, Opts, Snapshot};
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

const MAX_LINK_HOPS: usize = 40;

#[derive(Clone, Debug)]
enum NodeKind {
    Dir(Vec<OsString>),
    File,
    Fifo,
    Symlink(PathBuf),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    perm: u32,
    size: u64,
    uid: u32,
    gid: u32,
    mtime: i64,
    ino: u64,
}

pub struct MemFs {
    nodes: HashMap<PathBuf, Node>,
    unlistable: HashSet<PathBuf>,
    /// Listing yields this many names, then a read error.
    cut_short: HashMap<PathBuf, usize>,
    unprobeable: HashSet<PathBuf>,
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
    next_ino: u64,
}

impl MemFs {
    /// Filesystem with a single empty directory at `root`.
    pub fn new(root: &str) -> Self {
        let mut fs = Self {
            nodes: HashMap::new(),
            unlistable: HashSet::new(),
            cut_short: HashMap::new(),
            unprobeable: HashSet::new(),
            users: HashMap::from([(1000, "alice".to_string())]),
            groups: HashMap::from([(100, "staff".to_string())]),
            next_ino: 1,
        };
        fs.insert(root, NodeKind::Dir(Vec::new()), 0o755, 4096);
        fs
    }

    fn insert(&mut self, path: &str, kind: NodeKind, perm: u32, size: u64) {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent()
            && let Some(Node {
                kind: NodeKind::Dir(children),
                ..
            }) = self.nodes.get_mut(parent)
        {
            children.push(path.file_name().unwrap().to_os_string());
        }
        let ino = self.next_ino;
        self.next_ino += 1;
        self.nodes.insert(
            path,
            Node {
                kind,
                perm,
                size,
                uid: 1000,
                gid: 100,
                mtime: 1_704_067_200,
                ino,
            },
        );
    }

    /// Add an empty directory; appended to its parent's listing.
    pub fn dir(mut self, path: &str) -> Self {
        self.insert(path, NodeKind::Dir(Vec::new()), 0o755, 4096);
        self
    }

    pub fn file(mut self, path: &str, size: u64) -> Self {
        self.insert(path, NodeKind::File, 0o644, size);
        self
    }

    pub fn fifo(mut self, path: &str) -> Self {
        self.insert(path, NodeKind::Fifo, 0o600, 0);
        self
    }

    pub fn symlink(mut self, path: &str, target: &str) -> Self {
        self.insert(path, NodeKind::Symlink(PathBuf::from(target)), 0o777, 7);
        self
    }

    pub fn perm(mut self, path: &str, perm: u32) -> Self {
        self.nodes.get_mut(Path::new(path)).unwrap().perm = perm;
        self
    }

    pub fn owner(mut self, path: &str, uid: u32, gid: u32) -> Self {
        let node = self.nodes.get_mut(Path::new(path)).unwrap();
        node.uid = uid;
        node.gid = gid;
        self
    }

    /// Listing `path` fails (e.g. permission denied).
    pub fn unlistable(mut self, path: &str) -> Self {
        self.unlistable.insert(PathBuf::from(path));
        self
    }

    /// Listing `path` returns its first `n` names, then fails (e.g. I/O error mid-read).
    pub fn cut_short(mut self, path: &str, n: usize) -> Self {
        self.cut_short.insert(PathBuf::from(path), n);
        self
    }

    /// Probing `path` fails (e.g. removed mid-run).
    pub fn unprobeable(mut self, path: &str) -> Self {
        self.unprobeable.insert(PathBuf::from(path));
        self
    }

    /// Real path of `path`: links in intermediate components are always resolved, the last
    /// component only when `follow_last`. Link targets are absolute.
    fn lookup(&self, path: &Path, follow_last: bool) -> io::Result<PathBuf> {
        let not_found = || io::Error::new(io::ErrorKind::NotFound, "no such entry");
        let comps: Vec<Component> = path.components().collect();
        let mut resolved = PathBuf::new();
        let mut hops = 0;
        for (i, comp) in comps.iter().enumerate() {
            resolved.push(comp);
            if !matches!(comp, Component::Normal(_)) {
                continue;
            }
            let is_last = i + 1 == comps.len();
            loop {
                match self.nodes.get(&resolved).map(|n| &n.kind) {
                    Some(NodeKind::Symlink(target)) if !is_last || follow_last => {
                        hops += 1;
                        if hops > MAX_LINK_HOPS {
                            return Err(io::Error::other("too many levels of symbolic links"));
                        }
                        resolved = target.clone();
                    }
                    Some(_) => break,
                    None => return Err(not_found()),
                }
            }
        }
        Ok(resolved)
    }
}

impl MetadataProvider for MemFs {
    fn probe(&self, path: &Path, follow: bool) -> io::Result<Snapshot> {
        if self.unprobeable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "vanished"));
        }
        let node = &self.nodes[&self.lookup(path, follow)?];
        let kind = match node.kind {
            NodeKind::Dir(_) => FileKind::Directory,
            NodeKind::File => FileKind::Regular,
            NodeKind::Fifo => FileKind::Fifo,
            NodeKind::Symlink(_) => FileKind::Symlink,
        };
        Ok(Snapshot {
            kind,
            perm: node.perm,
            nlink: if kind == FileKind::Directory { 2 } else { 1 },
            uid: node.uid,
            gid: node.gid,
            size: node.size,
            mtime: node.mtime,
            dev: 1,
            ino: node.ino,
        })
    }

    fn list_dir(&self, dir: &Path) -> io::Result<DirListing> {
        if self.unlistable.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        let real = self.lookup(dir, true)?;
        match &self.nodes[&real].kind {
            NodeKind::Dir(children) => match self.cut_short.get(dir) {
                Some(&n) => Ok(DirListing {
                    names: children.iter().take(n).cloned().collect(),
                    error: Some(io::Error::other("input/output error")),
                }),
                None => Ok(DirListing {
                    names: children.clone(),
                    error: None,
                }),
            },
            _ => Err(io::Error::other("not a directory")),
        }
    }

    fn user_name(&self, uid: u32) -> io::Result<String> {
        self.users
            .get(&uid)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "unknown uid"))
    }

    fn group_name(&self, gid: u32) -> io::Result<String> {
        self.groups
            .get(&gid)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "unknown gid"))
    }
}

/// Options printing only the path.
pub fn paths_only() -> Opts {
    Opts {
        show_size: false,
        ..Default::default()
    }
}

/// Run a traversal over `fs` and return (stdout lines, report).
pub fn walk(
    fs: &MemFs,
    root: &str,
    opts: &Opts,
) -> anyhow::Result<(Vec<String>, bftree::TraversalReport)> {
    let mut out = Vec::new();
    let report = bftree::engine::Traverser::new(fs, opts, &mut out).run(Path::new(root))?;
    let text = String::from_utf8(out)?;
    Ok((text.lines().map(str::to_string).collect(), report))
}

/// Writer accepting `lines` writes, then failing every write with `kind`.
pub struct FailingWriter {
    pub buf: Vec<u8>,
    lines: usize,
    kind: io::ErrorKind,
}

impl FailingWriter {
    pub fn new(lines: usize, kind: io::ErrorKind) -> Self {
        Self {
            buf: Vec::new(),
            lines,
            kind,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.lines == 0 {
            return Err(io::Error::from(self.kind));
        }
        if data.ends_with(b"\n") {
            self.lines -= 1;
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
