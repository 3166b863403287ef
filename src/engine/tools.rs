//! Column formatting: pure functions over snapshot fields.

use chrono::{DateTime, Local, Utc};
use log::debug;

use crate::utils::config::{MTIME_FORMAT, NAME_WIDTH, SizeConsts};
use crate::{FileKind, SizeUnit};

/// Single-character file type marker.
pub fn file_type_char(kind: FileKind) -> char {
    match kind {
        FileKind::Socket => 's',
        FileKind::Symlink => 'l',
        FileKind::Regular => '-',
        FileKind::BlockDevice => 'b',
        FileKind::CharDevice => 'c',
        FileKind::Directory => 'd',
        FileKind::Fifo => '|',
        FileKind::Unknown => '?',
    }
}

/// `rwxrwxrwx` string for the low nine permission bits, `-` where a bit is unset.
pub fn permission_string(perm: u32) -> String {
    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    BITS.iter()
        .map(|&(bit, c)| if perm & bit != 0 { c } else { '-' })
        .collect()
}

/// Scale `size` by 1024 while it exceeds 1024, stopping after the last named unit.
/// Returns the integer-divided value and its unit. 1024 itself stays in bytes.
pub fn size_unit(size: u64) -> (u64, SizeUnit) {
    let mut value = size;
    let mut unit = SizeUnit::Bytes;
    while value > SizeConsts::UNIT_STEP {
        let Some(next) = unit.larger() else {
            break;
        };
        value /= SizeConsts::UNIT_STEP;
        unit = next;
    }
    (value, unit)
}

/// Size column: 10-wide byte count, or (with `in_units`) a 9-wide scaled value plus unit letter.
pub fn format_size(size: u64, in_units: bool) -> String {
    if in_units {
        let (value, unit) = size_unit(size);
        if unit != SizeUnit::Bytes {
            return format!(
                "{:>width$}{}",
                value,
                unit.suffix(),
                width = SizeConsts::SCALED_WIDTH
            );
        }
    }
    format!("{:>width$}", size, width = SizeConsts::BYTES_WIDTH)
}

/// Owner or group column, left-justified.
pub fn format_name(name: &str) -> String {
    format!("{:<width$}", name, width = NAME_WIDTH)
}

/// Last-modified column in local time, e.g. `Jan 05, 2024`.
///
/// A timestamp chrono cannot represent is shown as the epoch date.
pub fn format_mtime(secs: i64) -> String {
    let utc = DateTime::from_timestamp(secs, 0).unwrap_or_else(|| {
        debug!("mtime {secs} out of range, showing epoch");
        DateTime::<Utc>::UNIX_EPOCH
    });
    utc.with_timezone(&Local).format(MTIME_FORMAT).to_string()
}
