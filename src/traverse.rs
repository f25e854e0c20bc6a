//! Top-level control: operand resolution, the per-directory pipeline, and
//! recursive descent.
//!
//! Each operand is resolved in order. Non-directories render as a single
//! entry; directories run collect -> sort -> render, and with recursion on,
//! child directories are taken up depth-first from an explicit work-list —
//! the parent level is always fully rendered before any descent, and a
//! pathological directory depth cannot grow the call stack.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::collect::collect_dir;
use crate::common::Options;
use crate::error::ListError;
use crate::identity::IdentityCache;
use crate::probe::probe_operand;
use crate::render::render_entry;
use crate::sort::sort_listing;

/// Name under which diagnostics are reported on stderr.
pub const TOOL_NAME: &str = "lsr";

/// Drives one whole invocation and owns its aggregate success flag.
/// Partial output already written is never rolled back.
pub struct Traverser<'a, W: Write> {
    opts: &'a Options,
    ids: &'a mut IdentityCache,
    out: &'a mut W,
    now_sec: i64,
    printed: bool,
    failed: bool,
}

impl<'a, W: Write> Traverser<'a, W> {
    pub fn new(opts: &'a Options, ids: &'a mut IdentityCache, out: &'a mut W) -> Self {
        let now_sec = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Traverser {
            opts,
            ids,
            out,
            now_sec,
            printed: false,
            failed: false,
        }
    }

    /// Process all operands in order. Returns true only when every operand
    /// and every recursive descent succeeded; failures have already been
    /// diagnosed on stderr and do not stop the remaining operands.
    pub fn run(&mut self, operands: &[PathBuf]) -> bool {
        let with_headers = operands.len() > 1;
        for operand in operands {
            match self.list_operand(operand, with_headers) {
                Ok(()) => {}
                // Downstream closed the pipe: stop quietly, keep the verdict.
                Err(ListError::BrokenPipe) => return !self.failed,
                Err(err) => self.report(&err),
            }
        }
        !self.failed
    }

    /// One operand: stat it, then either render it as a single entry or run
    /// the directory pipeline with optional descent.
    fn list_operand(&mut self, operand: &Path, with_headers: bool) -> Result<(), ListError> {
        let meta = probe_operand(operand.as_os_str().to_os_string(), operand)?;
        if !meta.kind.is_directory() {
            self.separator()?;
            render_entry(self.out, &meta, self.opts, self.ids, self.now_sec)?;
            self.printed = true;
            return Ok(());
        }

        // Pending directories, deepest on top. Children are pushed in
        // reverse listing order so the first child is popped first.
        let mut pending: Vec<(PathBuf, bool)> = vec![(operand.to_path_buf(), with_headers)];
        while let Some((dir, headed)) = pending.pop() {
            let mut listing = match collect_dir(&dir, self.opts) {
                Ok(listing) => listing,
                Err(err) => {
                    // Abandon this branch; pending siblings keep going.
                    self.report(&err);
                    continue;
                }
            };
            sort_listing(&mut listing, self.opts);

            self.separator()?;
            if headed {
                writeln!(self.out, "{}:", dir.display()).map_err(ListError::output)?;
            }
            for entry in &listing {
                render_entry(self.out, entry, self.opts, self.ids, self.now_sec)?;
            }
            self.printed = true;

            if self.opts.recursive {
                for entry in listing.iter().rev() {
                    let name = entry.name.as_encoded_bytes();
                    if entry.kind.is_directory() && name != b"." && name != b".." {
                        tracing::debug!(parent = %dir.display(), child = %entry.name.to_string_lossy(), "queueing descent");
                        pending.push((dir.join(&entry.name), true));
                    }
                }
            }
        }
        Ok(())
    }

    /// Blank line between output sections, never before the first.
    fn separator(&mut self) -> Result<(), ListError> {
        if self.printed {
            writeln!(self.out).map_err(ListError::output)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &ListError) {
        eprintln!("{}: {}", TOOL_NAME, err);
        self.failed = true;
    }
}
