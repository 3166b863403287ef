//! CLI command handler: resolve options and root, run the traversal on stdout.

use anyhow::{Context, Result};
use log::debug;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::pipeline::report_skipped_paths;
use crate::utils::{apply_file_to_opts, load_settings, setup_logging};

/// Defaults, then the settings file, then command-line flags (flags only switch columns on).
pub fn setup_opts(cli: &Cli, cwd: &Path) -> Result<Opts> {
    let mut opts = Opts::default();
    if let Some(file) = load_settings(cli.config.as_deref(), cwd)? {
        apply_file_to_opts(&file, &mut opts);
    }
    if cli.long {
        opts.enable_long_format();
    }
    opts.follow_links |= cli.follow_links;
    opts.show_file_type |= cli.file_type;
    opts.show_permissions |= cli.permissions;
    opts.show_link_count |= cli.links;
    opts.show_owner |= cli.owner;
    opts.show_group |= cli.group;
    opts.size_in_units |= cli.size_units;
    opts.show_last_modified |= cli.last_modified;
    opts.verbose |= cli.verbose;
    if cli.no_size {
        opts.show_size = false;
    }
    Ok(opts)
}

/// DIR as given, or the absolute working directory.
fn resolve_root(cli: &Cli, cwd: &Path) -> PathBuf {
    cli.dir.clone().unwrap_or_else(|| cwd.to_path_buf())
}

/// Run one traversal to stdout. Returns an error only for fatal failures; per-entry problems are
/// logged and summarized.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let opts = setup_opts(cli, &cwd)?;
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let root = resolve_root(cli, &cwd);
    let stdout = io::stdout();
    let report = crate::bft_dir(&root, &opts, BufWriter::new(stdout.lock()))?;
    report_skipped_paths(&opts, &report.skipped);
    Ok(())
}
