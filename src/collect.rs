//! One directory level -> entry list, applying the hidden-entry policy.

use std::fs;
use std::path::Path;

use crate::common::{DirectoryListing, Options};
use crate::error::ListError;
use crate::probe::probe_entry;

/// Read `dir` and produce its listing in collection order (filesystem
/// dependent); sorting is a separate, later step.
///
/// Entries whose metadata cannot be resolved are dropped from the listing.
/// Only a failure to open the directory itself is an error.
pub fn collect_dir(dir: &Path, opts: &Options) -> Result<DirectoryListing, ListError> {
    let mut listing = DirectoryListing::new();

    if opts.show_all {
        // Synthetic self/parent entries are added explicitly, ahead of the
        // scan, and suppressed from duplication below.
        for name in [".", ".."] {
            match probe_entry(name.into(), &dir.join(name)) {
                Ok(meta) => listing.push(meta),
                Err(err) => tracing::debug!(%err, "skipping synthetic entry"),
            }
        }
    }

    let reader = fs::read_dir(dir).map_err(|e| ListError::access(dir, &e))?;
    for dirent in reader {
        let dirent = match dirent {
            Ok(d) => d,
            Err(err) => {
                tracing::debug!(dir = %dir.display(), %err, "skipping unreadable directory entry");
                continue;
            }
        };
        let name = dirent.file_name();
        let bytes = name.as_encoded_bytes();
        if bytes == b"." || bytes == b".." {
            continue;
        }
        if bytes.starts_with(b".") && !opts.show_hidden() {
            continue;
        }
        match probe_entry(name, &dirent.path()) {
            Ok(meta) => listing.push(meta),
            Err(err) => tracing::debug!(%err, "dropping entry with unreadable metadata"),
        }
    }

    Ok(listing)
}
