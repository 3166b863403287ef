use log::warn;
use std::path::{Path, PathBuf};

use crate::Opts;

/// Recoverable failures seen during one traversal. Each is logged when recorded; the list is
/// handed back in the report.
#[derive(Debug, Default)]
pub struct Diagnostics {
    skipped: Vec<(PathBuf, String)>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and keep one failure for `path`.
    pub fn record(&mut self, path: &Path, msg: impl Into<String>) {
        let msg = msg.into();
        warn!("{}: {}", path.display(), msg);
        self.skipped.push((path.to_path_buf(), msg));
    }

    pub fn len(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn into_entries(self) -> Vec<(PathBuf, String)> {
        self.skipped
    }
}

/// Summarize recoverable failures after a traversal. Never turns them into an error.
pub fn report_skipped_paths(opts: &Opts, skipped: &[(PathBuf, String)]) {
    if skipped.is_empty() {
        return;
    }
    warn!(
        "{} entries reported errors (unreadable directories, failed probes or lookups)",
        skipped.len()
    );
    if opts.verbose {
        for (p, msg) in skipped {
            eprintln!("  skipped: {} ({})", p.display(), msg);
        }
    }
}
