//! Common data model shared by the listing pipeline.
// Options, file kinds, and the per-entry metadata snapshot.

use std::ffi::OsString;

/// Immutable per-invocation configuration derived from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub show_all: bool,
    pub show_almost_all: bool,
    pub long_format: bool,
    pub human_readable: bool,
    pub reverse: bool,
    pub sort_by_time: bool,
    pub recursive: bool,
    /// Accepted for compatibility; output is already one entry per line.
    pub one_per_line: bool,
}

impl Options {
    /// Dotfiles are listed when either of the "all" flags is present.
    pub fn show_hidden(&self) -> bool {
        self.show_all || self.show_almost_all
    }
}

/// File type as reported by lstat, reduced to the classes the long format
/// distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
    Other,
}

impl FileKind {
    /// The leading character of a long-format line.
    pub fn type_char(self) -> char {
        match self {
            FileKind::Directory => 'd',
            FileKind::Symlink => 'l',
            FileKind::BlockDevice => 'b',
            FileKind::CharDevice => 'c',
            FileKind::Fifo => 'p',
            FileKind::Socket => 's',
            FileKind::Regular | FileKind::Other => '-',
        }
    }

    pub fn is_directory(self) -> bool {
        self == FileKind::Directory
    }
}

/// Metadata snapshot for a single entry, taken once at collection time.
/// Entries are never re-stat'ed afterwards; rename races during a run are
/// out of scope.
#[derive(Debug, Clone)]
pub struct EntryMetadata {
    /// The bare entry name for directory entries, or the operand exactly as
    /// the user typed it. Raw OS bytes, no lossy conversion.
    pub name: OsString,
    pub kind: FileKind,
    /// Full mode word; only the low nine permission bits are rendered.
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub mtime_sec: i64,
    pub mtime_nsec: i64,
}

/// The entries of one directory level, in collection order until sorted.
pub type DirectoryListing = Vec<EntryMetadata>;
