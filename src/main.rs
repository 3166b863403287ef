//! bftree CLI: print a directory tree breadth-first, one line per entry.

use anyhow::Result;
use bftree::engine::arg_parser::Cli;
use bftree::engine::handle_run;
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
