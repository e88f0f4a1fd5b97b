use std::path::Path;

use sourcescope_imports::{ImportParseError, ImportSection};

/// Reads the import section of one source file.
///
/// Failures are returned per file rather than as [`crate::OperationError`], so a scan can
/// collect them and carry on.
pub trait ImportReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its import section cannot be parsed.
    fn read_imports(&self, path: &Path) -> Result<ImportSection, ImportParseError>;
}
