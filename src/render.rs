//! Per-entry output formatting.
//!
//! Short form is the bare name; long form is
//! `type+permissions links owner group size time name`. Names are written
//! as raw bytes, so entries that are not valid UTF-8 round-trip unchanged.

use std::io::Write;

use crate::common::{EntryMetadata, Options};
use crate::error::ListError;
use crate::identity::IdentityCache;
use crate::timefmt;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Render one entry into `out` as a single newline-terminated line.
/// `now_sec` anchors the recent/old timestamp split.
pub fn render_entry<W: Write>(
    out: &mut W,
    entry: &EntryMetadata,
    opts: &Options,
    ids: &mut IdentityCache,
    now_sec: i64,
) -> Result<(), ListError> {
    // The line is assembled in memory so the stream sees one write per
    // entry; a broken pipe then cuts cleanly between lines.
    let mut line: Vec<u8> = Vec::with_capacity(80);
    if opts.long_format {
        let size = if opts.human_readable {
            human_size(entry.size)
        } else {
            entry.size.to_string()
        };
        let user = ids.resolve_user(entry.uid).to_string();
        let group = ids.resolve_group(entry.gid).to_string();
        write!(
            line,
            "{}{} {:>3} {} {} {:>8} {} ",
            entry.kind.type_char(),
            permission_string(entry.mode),
            entry.nlink,
            user,
            group,
            size,
            timefmt::format_mtime(entry.mtime_sec, now_sec),
        )
        .map_err(ListError::output)?;
    }
    line.extend_from_slice(entry.name.as_encoded_bytes());
    line.push(b'\n');
    out.write_all(&line).map_err(ListError::output)
}

/// Expand the nine low mode bits into `rwxrwxrwx` form, each position an
/// independent `r`/`w`/`x`/`-`.
pub fn permission_string(mode: u32) -> String {
    let mut out = String::with_capacity(9);
    for shift in (0..3).rev() {
        let bits = mode >> (shift * 3);
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

/// Compact size with a `B`/`K`/`M`/`G` suffix: the largest unit where the
/// value is at least 1, integer division, no fractional digit — 1536 bytes
/// is `1K`, not `1.5K`.
pub fn human_size(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{}G", bytes / GIB)
    } else if bytes >= MIB {
        format!("{}M", bytes / MIB)
    } else if bytes >= KIB {
        format!("{}K", bytes / KIB)
    } else {
        format!("{}B", bytes)
    }
}
