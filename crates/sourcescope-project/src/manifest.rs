use std::path::Path;

use serde::Deserialize;

use crate::config::ParseErrorPolicy;
use crate::error::ProjectError;

/// On-disk shape of `.sourcescope.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ScopeFile {
    #[serde(default, rename = "import-prefix")]
    pub(crate) import_prefix: Option<String>,
    #[serde(default)]
    pub(crate) base: Option<String>,
    #[serde(default, rename = "excluded-dirs")]
    pub(crate) excluded_dirs: Option<Vec<String>>,
    #[serde(default, rename = "excluded-packages")]
    pub(crate) excluded_packages: Option<Vec<String>>,
    #[serde(default, rename = "ignored-files")]
    pub(crate) ignored_files: Vec<String>,
    #[serde(default, rename = "on-parse-error")]
    pub(crate) on_parse_error: Option<ParseErrorPolicy>,
}

pub(crate) fn read_scope_file(path: &Path) -> Result<ScopeFile, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ProjectError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
