use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use tracing::debug;

use crate::error::ProjectError;
use crate::manifest::{ScopeFile, read_scope_file};
use crate::project::GoProject;
use crate::walk::normalize_dir;

pub const DEFAULT_BASE: &str = "master";
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["vendor", "third_party", "sql", "bin"];
pub const DEFAULT_EXCLUDED_PACKAGES: &[&str] = &["test"];

/// What to do with a source file whose import section cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Fail the run without publishing any result.
    #[default]
    Abort,
    /// Log the file and keep scanning the rest of the tree.
    Skip,
}

/// Settings for one analysis run, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct ScopeConfig {
    import_prefix: String,
    base: String,
    excluded_dirs: Vec<String>,
    excluded_packages: Vec<String>,
    ignored_files: GlobSet,
    on_parse_error: ParseErrorPolicy,
}

impl ScopeConfig {
    #[must_use]
    pub fn new(import_prefix: impl Into<String>) -> Self {
        Self {
            import_prefix: import_prefix.into(),
            base: DEFAULT_BASE.to_string(),
            excluded_dirs: to_owned_list(DEFAULT_EXCLUDED_DIRS),
            excluded_packages: to_owned_list(DEFAULT_EXCLUDED_PACKAGES),
            ignored_files: GlobSet::empty(),
            on_parse_error: ParseErrorPolicy::default(),
        }
    }

    #[must_use]
    pub fn import_prefix(&self) -> &str {
        &self.import_prefix
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn excluded_dirs(&self) -> &[String] {
        &self.excluded_dirs
    }

    #[must_use]
    pub fn excluded_packages(&self) -> &[String] {
        &self.excluded_packages
    }

    /// Exact string comparison; `test` does not exclude `pkg/test`.
    #[must_use]
    pub fn is_package_excluded(&self, package: &str) -> bool {
        self.excluded_packages.iter().any(|p| p == package)
    }

    #[must_use]
    pub fn is_file_ignored(&self, path: &Path) -> bool {
        self.ignored_files.is_match(path)
    }

    #[must_use]
    pub fn on_parse_error(&self) -> ParseErrorPolicy {
        self.on_parse_error
    }

    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    #[must_use]
    pub fn with_excluded_dirs(mut self, dirs: Vec<String>) -> Self {
        self.excluded_dirs = dirs;
        self
    }

    #[must_use]
    pub fn with_excluded_packages(mut self, packages: Vec<String>) -> Self {
        self.excluded_packages = packages;
        self
    }

    /// # Errors
    ///
    /// Returns [`ProjectError::GlobPattern`] if any pattern is invalid.
    pub fn with_ignored_files(mut self, patterns: &[String]) -> Result<Self, ProjectError> {
        self.ignored_files = build_glob_set(patterns)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_on_parse_error(mut self, policy: ParseErrorPolicy) -> Self {
        self.on_parse_error = policy;
        self
    }
}

/// Values supplied by the caller that take precedence over `.sourcescope.toml`.
///
/// Extra excluded directories and packages are added to the configured lists.
#[derive(Debug, Clone, Default)]
pub struct ScopeOverrides {
    pub import_prefix: Option<String>,
    pub base: Option<String>,
    pub extra_excluded_dirs: Vec<String>,
    pub extra_excluded_packages: Vec<String>,
    pub on_parse_error: Option<ParseErrorPolicy>,
}

/// Builds the run configuration for `project`.
///
/// Precedence, lowest first: built-in defaults, the `go.mod` module path,
/// `.sourcescope.toml`, then `overrides`.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or parsed, a glob pattern is
/// invalid, or no import prefix can be determined.
pub fn load_config(
    project: &GoProject,
    overrides: &ScopeOverrides,
) -> Result<ScopeConfig, ProjectError> {
    let config_path = project.config_path();
    let file = if config_path.is_file() {
        debug!(path = %config_path.display(), "reading config file");
        read_scope_file(&config_path)?
    } else {
        ScopeFile::default()
    };

    let import_prefix = overrides
        .import_prefix
        .clone()
        .or(file.import_prefix)
        .or_else(|| project.module_path.clone())
        .map(|prefix| prefix.trim_end_matches('/').to_string())
        .filter(|prefix| !prefix.is_empty())
        .ok_or_else(|| ProjectError::MissingImportPrefix {
            root: project.root.clone(),
        })?;

    let mut config = ScopeConfig::new(import_prefix).with_ignored_files(&file.ignored_files)?;

    if let Some(base) = overrides.base.clone().or(file.base) {
        config = config.with_base(base);
    }

    let mut excluded_dirs = file
        .excluded_dirs
        .unwrap_or_else(|| to_owned_list(DEFAULT_EXCLUDED_DIRS));
    excluded_dirs.extend(overrides.extra_excluded_dirs.iter().cloned());
    let excluded_dirs = excluded_dirs
        .iter()
        .map(|entry| normalize_excluded_dir(entry))
        .collect::<Result<Vec<_>, _>>()?;
    config = config.with_excluded_dirs(dedup(excluded_dirs));

    let mut excluded_packages = file
        .excluded_packages
        .unwrap_or_else(|| to_owned_list(DEFAULT_EXCLUDED_PACKAGES));
    excluded_packages.extend(overrides.extra_excluded_packages.iter().cloned());
    config = config.with_excluded_packages(dedup(excluded_packages));

    if let Some(policy) = overrides.on_parse_error.or(file.on_parse_error) {
        config = config.with_on_parse_error(policy);
    }

    debug!(
        import_prefix = config.import_prefix(),
        base = config.base(),
        excluded_dirs = ?config.excluded_dirs(),
        excluded_packages = ?config.excluded_packages(),
        "loaded configuration"
    );

    Ok(config)
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, ProjectError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ProjectError::GlobPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ProjectError::GlobPattern {
        pattern: patterns.join(", "),
        source,
    })
}

/// `./vendor/` becomes `vendor`. Entries naming the root itself or leaving it are rejected.
fn normalize_excluded_dir(entry: &str) -> Result<String, ProjectError> {
    normalize_dir(entry)
        .map(|dir| dir.to_string_lossy().replace('\\', "/"))
        .ok_or_else(|| ProjectError::InvalidExcludedDir {
            entry: entry.to_string(),
        })
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
