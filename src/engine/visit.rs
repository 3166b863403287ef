//! Render the output line for one entry.

use std::io;
use std::path::Path;

use crate::Opts;
use crate::engine::tools::{
    file_type_char, format_mtime, format_name, format_size, permission_string,
};
use crate::pipeline::{Diagnostics, MetadataProvider};

/// Probe `path` and build its full line (no trailing newline).
///
/// Enabled columns come in a fixed order, each followed by one space, with the path last. A
/// failed probe is returned as an error and nothing is rendered. A failed owner or group lookup
/// is recorded in `diagnostics` and the numeric id is printed in its place.
pub fn render_line<P>(
    provider: &P,
    opts: &Opts,
    path: &Path,
    diagnostics: &mut Diagnostics,
) -> io::Result<String>
where
    P: MetadataProvider + ?Sized,
{
    let snap = provider.probe(path, opts.follow_links)?;
    let mut line = String::new();

    if opts.show_file_type {
        line.push(file_type_char(snap.kind));
        line.push(' ');
    }
    if opts.show_permissions {
        line.push_str(&permission_string(snap.perm));
        line.push(' ');
    }
    if opts.show_link_count {
        line.push_str(&snap.nlink.to_string());
        line.push(' ');
    }
    if opts.show_owner {
        let name = provider.user_name(snap.uid).unwrap_or_else(|e| {
            diagnostics.record(path, format!("owner lookup for uid {} failed: {}", snap.uid, e));
            snap.uid.to_string()
        });
        line.push_str(&format_name(&name));
        line.push(' ');
    }
    if opts.show_group {
        let name = provider.group_name(snap.gid).unwrap_or_else(|e| {
            diagnostics.record(path, format!("group lookup for gid {} failed: {}", snap.gid, e));
            snap.gid.to_string()
        });
        line.push_str(&format_name(&name));
        line.push(' ');
    }
    if opts.show_size {
        line.push_str(&format_size(snap.size, opts.size_in_units));
        line.push(' ');
    }
    if opts.show_last_modified {
        line.push_str(&format_mtime(snap.mtime));
        line.push(' ');
    }

    line.push_str(&path.display().to_string());
    Ok(line)
}
