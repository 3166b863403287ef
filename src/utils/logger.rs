//! stderr logging. Diagnostics for unreadable entries go through here, never to stdout.

use colored::Colorize;
use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};
use std::io::Write;

use crate::utils::config::PackagePaths;

/// Logger configuration: warnings only for dependencies, info (or debug when `verbose`) for this
/// crate. Directives from `env` are applied last and take precedence.
pub fn logger_builder(verbose: bool, env: Env<'_>) -> Builder {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let name = PackagePaths::get().pkg_name();

    let mut builder = Builder::new();
    builder
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module(name, level)
        .parse_env(env)
        .format(move |buf, record| {
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        _ => "ERROR".red(),
                    };
                    let target = record.target().to_string().white();
                    format!("[{} {} {}] {}", name.cyan(), level_str, target, record.args())
                }
                Level::Debug | Level::Trace => {
                    format!("[{} {}] {}", name.cyan(), "debug".dimmed(), record.args())
                }
                Level::Info => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        });
    builder
}

/// Install the global logger, honouring `RUST_LOG`. Safe to call more than once: later calls
/// are ignored.
pub fn setup_logging(verbose: bool) {
    let _ = logger_builder(verbose, Env::default()).try_init();
}
