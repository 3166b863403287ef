//! Load `.bftree.toml` (or the file given with `--config`). Lib callers build [`Opts`] directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BftreeToml {
    #[serde(default)]
    settings: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    follow_links: Option<bool>,
    file_type: Option<bool>,
    permissions: Option<bool>,
    links: Option<bool>,
    owner: Option<bool>,
    group: Option<bool>,
    size: Option<bool>,
    size_units: Option<bool>,
    last_modified: Option<bool>,
    long: Option<bool>,
}

impl BftreeToml {
    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// Load settings. An explicit `path` must exist and parse. Without one, `.bftree.toml` in `cwd`
/// is used when present; a broken implicit file is logged and ignored.
pub fn load_settings(path: Option<&Path>, cwd: &Path) -> Result<Option<BftreeToml>> {
    if let Some(path) = path {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let file = BftreeToml::parse(&s)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        return Ok(Some(file));
    }
    let implicit = cwd.join(PackagePaths::get().settings_filename());
    let Ok(s) = std::fs::read_to_string(&implicit) else {
        return Ok(None);
    };
    Ok(BftreeToml::parse(&s)
        .map_err(|e| log::warn!("{}: {:#}", implicit.display(), e))
        .ok())
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $opts:expr, $file_field:ident => $opts_field:ident) => {
        if let Some(v) = $section.$file_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file settings to opts (only fields present in the file). Call before applying CLI flags.
/// `long = true` switches on the long-format columns before the individual keys are applied,
/// so `long = true` + `owner = false` hides the owner.
pub fn apply_file_to_opts(file: &BftreeToml, opts: &mut Opts) {
    let s = &file.settings;
    if s.long == Some(true) {
        opts.enable_long_format();
    }
    apply_file_opt!(s, opts, follow_links => follow_links);
    apply_file_opt!(s, opts, file_type => show_file_type);
    apply_file_opt!(s, opts, permissions => show_permissions);
    apply_file_opt!(s, opts, links => show_link_count);
    apply_file_opt!(s, opts, owner => show_owner);
    apply_file_opt!(s, opts, group => show_group);
    apply_file_opt!(s, opts, size => show_size);
    apply_file_opt!(s, opts, size_units => size_in_units);
    apply_file_opt!(s, opts, last_modified => show_last_modified);
}
