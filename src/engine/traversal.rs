//! Breadth-first driver: visit the root, then drain the directory queue level by level.

use anyhow::{Context, Result};
use log::debug;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;

use crate::engine::classify::{classify, validate_root};
use crate::engine::queue::DirQueue;
use crate::engine::visit::render_line;
use crate::pipeline::{Diagnostics, MetadataProvider};
use crate::{DirId, Opts, TraversalReport};

/// One breadth-first traversal writing to `out`. Single-threaded; consumed by [`Traverser::run`].
pub struct Traverser<'a, P: MetadataProvider + ?Sized, W: Write> {
    provider: &'a P,
    opts: &'a Opts,
    out: W,
    queue: DirQueue,
    /// Directories already queued, so a target reachable through several links is listed once.
    scheduled: HashSet<DirId>,
    diagnostics: Diagnostics,
    visited: usize,
    expanded: usize,
    /// The reader went away (broken pipe); nothing more is written.
    closed: bool,
}

impl<'a, P, W> Traverser<'a, P, W>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    pub fn new(provider: &'a P, opts: &'a Opts, out: W) -> Self {
        Self {
            provider,
            opts,
            out,
            queue: DirQueue::new(),
            scheduled: HashSet::new(),
            diagnostics: Diagnostics::new(),
            visited: 0,
            expanded: 0,
            closed: false,
        }
    }

    /// Walk `root`. Fails before writing anything if `root` is not an accessible directory; after
    /// that only queue allocation or output write failures are fatal. A broken pipe ends the walk
    /// early without an error.
    pub fn run(mut self, root: &Path) -> Result<TraversalReport> {
        let root_id = validate_root(self.provider, root, self.opts.follow_links)?;

        self.visit(root)?;
        self.scheduled.insert(root_id);
        self.queue.enqueue(root.to_path_buf())?;

        while !self.closed
            && let Some(dir) = self.queue.dequeue()
        {
            self.expand(&dir)?;
        }

        if !self.closed {
            let flushed = self.out.flush();
            self.check_write(flushed).context("failed to flush output")?;
        }
        debug!(
            "traversal done: {} lines, {} directories listed, {} errors",
            self.visited,
            self.expanded,
            self.diagnostics.len()
        );
        Ok(TraversalReport {
            visited: self.visited,
            expanded: self.expanded,
            skipped: self.diagnostics.into_entries(),
        })
    }

    /// List `dir`, schedule its expandable children and visit every child in listing order.
    fn expand(&mut self, dir: &Path) -> Result<()> {
        let listing = match self.provider.list_dir(dir) {
            Ok(listing) => listing,
            Err(e) => {
                self.diagnostics
                    .record(dir, format!("cannot open directory: {e}"));
                return Ok(());
            }
        };
        self.expanded += 1;
        debug!(
            "{}: {} entries, {} dirs pending",
            dir.display(),
            listing.names.len(),
            self.queue.len()
        );

        for name in listing.names {
            if self.closed {
                return Ok(());
            }
            if name == "." || name == ".." {
                continue;
            }
            let child = dir.join(&name);
            self.schedule(&child)?;
            self.visit(&child)?;
        }
        if let Some(e) = listing.error {
            self.diagnostics
                .record(dir, format!("directory listing cut short: {e}"));
        }
        Ok(())
    }

    /// Queue `path` if it classifies as a directory not yet scheduled. Probe failures are
    /// reported and the path is left unexpanded.
    fn schedule(&mut self, path: &Path) -> Result<()> {
        match classify(self.provider, path, self.opts.follow_links) {
            Ok(Some(id)) => {
                if self.scheduled.insert(id) {
                    self.queue.enqueue(path.to_path_buf())?;
                } else {
                    debug!("{}: directory already scheduled", path.display());
                }
            }
            Ok(None) => {}
            Err(e) => self
                .diagnostics
                .record(path, format!("cannot classify: {e}")),
        }
        Ok(())
    }

    /// Print one line for `path`. The line is written whole or not at all.
    fn visit(&mut self, path: &Path) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        match render_line(self.provider, self.opts, path, &mut self.diagnostics) {
            Ok(line) => {
                let written = writeln!(self.out, "{line}");
                self.check_write(written).context("failed to write output")?;
                if !self.closed {
                    self.visited += 1;
                }
            }
            Err(e) => self.diagnostics.record(path, format!("cannot stat: {e}")),
        }
        Ok(())
    }

    /// Pass write errors through, except a broken pipe, which marks the output closed.
    fn check_write(&mut self, res: io::Result<()>) -> io::Result<()> {
        match res {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("output closed, stopping traversal");
                self.closed = true;
                Ok(())
            }
            other => other,
        }
    }
}
