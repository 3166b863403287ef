//! Application configuration constants.
//! Column widths, unit steps and lookup buffer sizes in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    settings_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                settings_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Crate name, used as the log target and line prefix.
    pub fn pkg_name(&self) -> &'static str {
        self.pkg_name
    }

    /// Settings file looked up in the working directory when `--config` is not given.
    pub fn settings_filename(&self) -> &str {
        &self.settings_filename
    }
}

// ---- Size column ----

/// Size rendering: unit step and column widths.
pub struct SizeConsts;

impl SizeConsts {
    /// Divide while the value is strictly greater than this.
    pub const UNIT_STEP: u64 = 1024;
    /// Width of a raw byte count.
    pub const BYTES_WIDTH: usize = 10;
    /// Width of a scaled value; the unit letter follows and fills the tenth column.
    pub const SCALED_WIDTH: usize = 9;
}

// ---- Other columns ----

/// Left-justified width of owner and group names.
pub const NAME_WIDTH: usize = 10;

/// strftime-style format for the last-modified column (e.g. `Jan 05, 2024`).
pub const MTIME_FORMAT: &str = "%b %d, %Y";

// ---- Identity lookup ----

/// Buffer sizes for `getpwuid_r` / `getgrgid_r`.
pub struct LookupBufConsts;

impl LookupBufConsts {
    /// Used when sysconf gives no hint.
    pub const DEFAULT: usize = 1024;
    /// Give up growing past this (ERANGE loop guard).
    pub const MAX: usize = 1024 * 1024;
}
