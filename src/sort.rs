//! Ordering of one collected directory level.

use crate::common::{DirectoryListing, Options};

/// Sort `listing` in place by the selected key, then apply the reversal
/// modifier. Reversal composes with either key as a final pass; it never
/// selects a third ordering.
pub fn sort_listing(listing: &mut DirectoryListing, opts: &Options) {
    if opts.sort_by_time {
        // Most recent first. The sort is stable, so ties keep collection order.
        listing.sort_by(|a, b| (b.mtime_sec, b.mtime_nsec).cmp(&(a.mtime_sec, a.mtime_nsec)));
    } else {
        // Byte-wise, no locale collation.
        listing.sort_by(|a, b| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()));
    }
    if opts.reverse {
        listing.reverse();
    }
}
