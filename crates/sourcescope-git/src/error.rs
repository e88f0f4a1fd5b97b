use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("repository at '{path}' has no working tree")]
    BareRepository { path: PathBuf },

    #[error("failed to resolve reference '{refspec}'")]
    RefNotFound { refspec: String },

    #[error("no merge base between '{base}' and HEAD")]
    NoMergeBase {
        base: String,
        #[source]
        source: git2::Error,
    },

    #[error("'{path}' is outside the repository at '{root}'")]
    OutsideRepository { path: PathBuf, root: PathBuf },

    #[error("diff delta has no file path")]
    MissingDeltaPath,
}
