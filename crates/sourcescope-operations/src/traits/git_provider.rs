use std::path::Path;

use sourcescope_git::FileChange;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// Files changed since the merge base of `base` and `HEAD`, including uncommitted
    /// changes, with paths relative to `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened, `base` cannot be resolved, or
    /// the diff fails.
    fn changed_files(&self, root: &Path, base: &str) -> Result<Vec<FileChange>>;
}
