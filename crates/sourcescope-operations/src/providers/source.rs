use std::path::{Path, PathBuf};

use sourcescope_project::walk_sources;

use crate::traits::SourceProvider;

pub struct FileSystemSourceProvider;

impl FileSystemSourceProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemSourceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceProvider for FileSystemSourceProvider {
    fn source_files(
        &self,
        root: &Path,
        excluded_dirs: &[String],
    ) -> Box<dyn Iterator<Item = PathBuf>> {
        Box::new(walk_sources(root, excluded_dirs))
    }
}
