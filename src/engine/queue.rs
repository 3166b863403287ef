//! FIFO of directories waiting to be listed. Owned by the traverser only.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Pending directories, oldest first. Draining in insertion order is what makes the walk
/// breadth-first.
#[derive(Debug, Default)]
pub struct DirQueue {
    pending: VecDeque<PathBuf>,
}

impl DirQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` as the new tail. Allocation failure is returned to the caller and is fatal
    /// for the traversal.
    pub fn enqueue(&mut self, path: PathBuf) -> Result<()> {
        self.pending
            .try_reserve(1)
            .with_context(|| format!("failed to queue directory {}", path.display()))?;
        self.pending.push_back(path);
        Ok(())
    }

    /// Remove and return the head, or `None` when nothing is pending.
    pub fn dequeue(&mut self) -> Option<PathBuf> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
