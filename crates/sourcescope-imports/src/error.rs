use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportParseError {
    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load the Go grammar")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser produced no syntax tree for '{path}'")]
    NoTree { path: PathBuf },

    #[error("'{path}' has no package clause")]
    MissingPackageClause { path: PathBuf },

    #[error("malformed import section in '{path}' at line {line}")]
    MalformedImports { path: PathBuf, line: usize },
}
