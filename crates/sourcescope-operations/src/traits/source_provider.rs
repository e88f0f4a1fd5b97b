use std::path::{Path, PathBuf};

pub trait SourceProvider: Send + Sync {
    /// Lazily lists the source files under `root`, as root-relative paths, skipping the
    /// `excluded_dirs` subtrees. Unreadable entries are skipped.
    fn source_files(&self, root: &Path, excluded_dirs: &[String])
    -> Box<dyn Iterator<Item = PathBuf>>;
}
