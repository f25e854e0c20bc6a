//! Path -> metadata snapshot.
//!
//! Thin wrapper over lstat/stat that shapes the platform result into an
//! [`EntryMetadata`] or a classified failure. A probe failure for a child
//! entry during collection is non-fatal (the entry is dropped); a failure
//! for an operand is surfaced by the traverser.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;

use crate::common::{EntryMetadata, FileKind};
use crate::error::ListError;

/// Lstat `path` and snapshot the result under `name`. Symlinks are reported
/// as symlinks, not their targets.
///
/// `name` is kept separate from `path` so directory entries carry their
/// bare name while operands carry the path exactly as the user typed it.
pub fn probe_entry(name: OsString, path: &Path) -> Result<EntryMetadata, ListError> {
    let meta = fs::symlink_metadata(path).map_err(|e| ListError::access(path, &e))?;
    Ok(snapshot(name, &meta))
}

/// Stat `path` following symlinks; used for operand resolution so a symlink
/// operand behaves like its target.
pub fn probe_operand(name: OsString, path: &Path) -> Result<EntryMetadata, ListError> {
    let meta = fs::metadata(path).map_err(|e| ListError::access(path, &e))?;
    Ok(snapshot(name, &meta))
}

fn snapshot(name: OsString, meta: &Metadata) -> EntryMetadata {
    let ft = meta.file_type();
    let kind = if ft.is_dir() {
        FileKind::Directory
    } else if ft.is_symlink() {
        FileKind::Symlink
    } else if ft.is_block_device() {
        FileKind::BlockDevice
    } else if ft.is_char_device() {
        FileKind::CharDevice
    } else if ft.is_fifo() {
        FileKind::Fifo
    } else if ft.is_socket() {
        FileKind::Socket
    } else if ft.is_file() {
        FileKind::Regular
    } else {
        FileKind::Other
    };
    EntryMetadata {
        name,
        kind,
        mode: meta.mode(),
        nlink: meta.nlink(),
        uid: meta.uid(),
        gid: meta.gid(),
        size: meta.size(),
        mtime_sec: meta.mtime(),
        mtime_nsec: meta.mtime_nsec(),
    }
}
