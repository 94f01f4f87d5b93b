//! Scoped workspace directory for benchmark output files
//!
//! The workspace is the only artifact the benchmark persists, and it is
//! scoped to one run: created before the loop, removed when the guard drops,
//! on every exit path including the early aborts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Guard over the benchmark output directory.
///
/// Dropping the guard recursively removes the directory tree. Removal is
/// best-effort: a failure is logged at debug level, never surfaced.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Create the workspace directory, tolerating one that already exists.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let root = path.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory of the workspace.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path for the output file of iteration `index`.
    pub fn file_path(&self, index: u64) -> PathBuf {
        self.root.join(format!("inverted_{index}.bin"))
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.root) {
            tracing::debug!(
                "failed to remove workspace {}: {}",
                self.root.display(),
                err
            );
        }
    }
}
