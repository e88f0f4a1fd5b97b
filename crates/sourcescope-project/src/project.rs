use std::path::{Path, PathBuf};

use crate::error::ProjectError;
use crate::gomod::parse_module_path;
use crate::{CONFIG_FILE_NAME, GO_MOD_FILE_NAME};

/// A Go source tree rooted at the directory holding `go.mod` or `.sourcescope.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoProject {
    pub root: PathBuf,
    pub module_path: Option<String>,
}

impl GoProject {
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }
}

/// Walks up from `start_dir` to the nearest directory containing `go.mod` or
/// `.sourcescope.toml`. Falls back to `start_dir` itself when neither exists.
///
/// # Errors
///
/// Returns `ProjectError` if `start_dir` cannot be canonicalized or `go.mod` cannot be read.
pub fn discover_project(start_dir: &Path) -> Result<GoProject, ProjectError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ProjectError::StartDir {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let root = find_project_root(&start_dir).unwrap_or(start_dir);
    let module_path = read_module_path(&root)?;

    Ok(GoProject { root, module_path })
}

fn find_project_root(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find(|dir| dir.join(GO_MOD_FILE_NAME).is_file() || dir.join(CONFIG_FILE_NAME).is_file())
        .map(Path::to_path_buf)
}

fn read_module_path(root: &Path) -> Result<Option<String>, ProjectError> {
    let go_mod = root.join(GO_MOD_FILE_NAME);
    if !go_mod.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&go_mod).map_err(|source| ProjectError::GoModRead {
        path: go_mod.clone(),
        source,
    })?;
    Ok(parse_module_path(&content))
}
