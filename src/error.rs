use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Classification of a failed filesystem access, used to select the short
/// diagnostic phrase shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AccessDenied,
    NotADirectory,
    NameTooLong,
    TooManyOpenFiles,
    Other,
}

impl ErrorKind {
    /// Map an OS-level error onto the taxonomy. The raw errno is consulted
    /// first because `io::ErrorKind` cannot distinguish ENAMETOOLONG or
    /// EMFILE/ENFILE on every platform.
    pub fn from_io(err: &io::Error) -> Self {
        if let Some(code) = err.raw_os_error() {
            match code {
                libc::ENOENT => return ErrorKind::NotFound,
                libc::EACCES => return ErrorKind::AccessDenied,
                libc::ENOTDIR => return ErrorKind::NotADirectory,
                libc::ENAMETOOLONG => return ErrorKind::NameTooLong,
                libc::EMFILE | libc::ENFILE => return ErrorKind::TooManyOpenFiles,
                _ => {}
            }
        }
        match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::AccessDenied,
            _ => ErrorKind::Other,
        }
    }

    /// The fixed human-readable phrase for this kind of failure.
    pub fn reason(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "No such file or directory",
            ErrorKind::AccessDenied => "Permission denied",
            ErrorKind::NotADirectory => "Not a directory",
            ErrorKind::NameTooLong => "File name too long",
            ErrorKind::TooManyOpenFiles => "Too many open files",
            ErrorKind::Other => "Unknown error",
        }
    }
}

/// The primary error type for all operations in the `lsr` crate.
#[derive(Debug, Error)]
pub enum ListError {
    /// A path could not be stat'ed or opened. Carries the path and the
    /// classified failure so one diagnostic line can name both.
    #[error("cannot access '{}': {}", .path.display(), .kind.reason())]
    Access { path: PathBuf, kind: ErrorKind },

    /// The output stream went away mid-render (e.g. a downstream pager
    /// closed). Rendering stops; this is not a run failure.
    #[error("output stream closed")]
    BrokenPipe,

    /// Any other failure writing to the output stream.
    #[error("write error: {0}")]
    Output(#[source] io::Error),
}

impl ListError {
    /// Classify an I/O failure against the path it occurred on.
    pub fn access(path: &Path, err: &io::Error) -> Self {
        ListError::Access {
            path: path.to_path_buf(),
            kind: ErrorKind::from_io(err),
        }
    }

    /// Wrap an output-stream failure, folding broken pipes into their own
    /// variant so the traverser can terminate output silently.
    pub fn output(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::BrokenPipe {
            ListError::BrokenPipe
        } else {
            ListError::Output(err)
        }
    }
}
