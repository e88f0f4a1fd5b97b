use std::path::Path;

use sourcescope_imports::{ImportParseError, ImportSection, read_imports};

use crate::traits::ImportReader;

pub struct TreeSitterImportReader;

impl TreeSitterImportReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TreeSitterImportReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportReader for TreeSitterImportReader {
    fn read_imports(&self, path: &Path) -> Result<ImportSection, ImportParseError> {
        read_imports(path)
    }
}
