//! Atomic file writer.
//!
//! ## Protocol
//!
//! 1. Compare the new content with what was read at prepare time — skip the
//!    write when byte-identical (a no-op operation leaves the file and its
//!    mtime untouched).
//! 2. Write to `<path>.tinct.tmp`.
//! 3. Rename to the final path (atomic on POSIX); remove the tmp file if
//!    the rename fails.

use std::path::{Path, PathBuf};

use crate::error::{io_err, EngineError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed).
    Written { path: PathBuf },
    /// File was skipped — the new content matches what was read.
    Unchanged { path: PathBuf },
}

/// Atomically write `next` to `path` unless it matches `previous`.
pub fn write_if_changed(
    path: &Path,
    previous: &str,
    next: &str,
) -> Result<WriteResult, EngineError> {
    if previous == next {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    let tmp = PathBuf::from(format!("{}.tinct.tmp", path.display()));
    std::fs::write(&tmp, next).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
