use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] sourcescope_git::GitError),

    #[error(transparent)]
    Project(#[from] sourcescope_project::ProjectError),
}

pub type Result<T> = std::result::Result<T, OperationError>;
