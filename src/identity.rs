//! Numeric owner/group IDs -> display names, memoized for one invocation.
//!
//! The long format wants account names, but resolving one means scanning a
//! line-oriented, colon-delimited database (`/etc/passwd`, `/etc/group`).
//! The cache guarantees at most one scan per distinct ID per run: whatever
//! the scan produced — the account name or the decimal fallback — is stored
//! and never retried or evicted. The cache is per-invocation state passed
//! explicitly into the renderer, so tests can point it at fixture files.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Memoizing ID -> name resolver. Insert-only; size is bounded by the
/// number of distinct IDs encountered, which is inherently small.
#[derive(Debug)]
pub struct IdentityCache {
    passwd_path: PathBuf,
    group_path: PathBuf,
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl IdentityCache {
    /// Cache backed by the system account databases.
    pub fn new() -> Self {
        Self::with_sources("/etc/passwd", "/etc/group")
    }

    /// Cache backed by explicit database files instead of the live system.
    pub fn with_sources(passwd: impl Into<PathBuf>, group: impl Into<PathBuf>) -> Self {
        IdentityCache {
            passwd_path: passwd.into(),
            group_path: group.into(),
            users: HashMap::new(),
            groups: HashMap::new(),
        }
    }

    /// Display name for a user ID.
    pub fn resolve_user(&mut self, uid: u32) -> &str {
        let db = &self.passwd_path;
        self.users
            .entry(uid)
            .or_insert_with(|| lookup_name(db, uid))
            .as_str()
    }

    /// Display name for a group ID.
    pub fn resolve_group(&mut self, gid: u32) -> &str {
        let db = &self.group_path;
        self.groups
            .entry(gid)
            .or_insert_with(|| lookup_name(db, gid))
            .as_str()
    }
}

impl Default for IdentityCache {
    fn default() -> Self {
        Self::new()
    }
}

/// One database scan for `id`. Any failure — unreadable database, malformed
/// line, no matching record — degrades to the decimal rendering of the ID.
/// Never escalated to an error.
fn lookup_name(db: &Path, id: u32) -> String {
    match scan_database(db, id) {
        Some(name) => name,
        None => {
            tracing::debug!(db = %db.display(), id, "account lookup failed, using numeric id");
            id.to_string()
        }
    }
}

/// Scan a colon-delimited account database: field 0 is the name, field 2
/// the numeric ID. Lines that do not fit the shape are skipped.
fn scan_database(db: &Path, id: u32) -> Option<String> {
    let file = File::open(db).ok()?;
    for line in BufReader::new(file).lines() {
        let line = line.ok()?;
        let mut fields = line.split(':');
        let name = match fields.next() {
            Some(n) if !n.is_empty() => n,
            _ => continue,
        };
        let Some(id_field) = fields.nth(1) else { continue };
        if id_field.parse::<u32>() == Ok(id) {
            return Some(name.to_string());
        }
    }
    None
}
