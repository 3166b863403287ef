//! bftree: breadth-first directory tree reporter

#[cfg(not(unix))]
compile_error!("bftree reads Unix file modes and ownership and only builds for Unix targets");

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::io::Write;
use std::path::Path;

use crate::engine::Traverser;
use crate::pipeline::FsMetadata;

/// Result alias used by public bftree API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Walk `root` breadth-first on the real filesystem, writing one line per entry to `out`.
///
/// Errors only when `root` is not an accessible directory (before anything is written) or when
/// the queue or `out` fails. Unreadable entries are logged and listed in
/// [`TraversalReport::skipped`].
///
/// ```ignore
/// let opts = bftree::Opts { show_file_type: true, ..Default::default() };
/// let report = bftree::bft_dir(std::path::Path::new("."), &opts, std::io::stdout())?;
/// ```
pub fn bft_dir<W: Write>(root: &Path, opts: &Opts, out: W) -> Result<TraversalReport> {
    debug!("walking {}", root.display());
    Traverser::new(&FsMetadata, opts, out).run(root)
}
