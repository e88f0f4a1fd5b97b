use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("cannot access start directory '{path}'")]
    StartDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config at '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read go.mod at '{path}'")]
    GoModRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "no import prefix configured for '{root}' (add a go.mod, set import-prefix in .sourcescope.toml, or pass --prefix)"
    )]
    MissingImportPrefix { root: PathBuf },

    #[error("excluded directory '{entry}' does not name a directory below the project root")]
    InvalidExcludedDir { entry: String },

    #[error("invalid glob pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
