use clap::Parser;
use std::path::PathBuf;

/// Breadth-first directory tree reporter.
#[derive(Clone, Debug, Parser)]
#[command(name = "bftree")]
#[command(about = "Print every entry under DIR in breadth-first order, one line each.")]
pub struct Cli {
    /// Directory to traverse. Default: current directory (printed as an absolute path).
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Follow symbolic links.
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Show the time of last modification.
    #[arg(short = 'd', long)]
    pub last_modified: bool,

    /// Show the file type.
    #[arg(short = 't', long)]
    pub file_type: bool,

    /// Show permission bits.
    #[arg(short = 'p', long)]
    pub permissions: bool,

    /// Show the number of hard links.
    #[arg(short = 'i', long)]
    pub links: bool,

    /// Show the owner's user name.
    #[arg(short = 'u', long)]
    pub owner: bool,

    /// Show the owning group's name.
    #[arg(short = 'g', long)]
    pub group: bool,

    /// Show size in K/M/G units instead of bytes.
    #[arg(short = 's', long)]
    pub size_units: bool,

    /// Long listing: same as -t -p -i -u -g -s.
    #[arg(short = 'l', long)]
    pub long: bool,

    /// Hide the size column.
    #[arg(long)]
    pub no_size: bool,

    /// Settings file. Default: `.bftree.toml` in the working directory, if present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose (debug) logging on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
