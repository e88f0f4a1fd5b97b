use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sourcescope_core::ImportDeclaration;
use sourcescope_git::{FileChange, FileStatus, GitError};
use sourcescope_imports::{ImportParseError, ImportSection};
use sourcescope_project::{GoProject, ScopeConfig, ScopeOverrides};

use crate::Result;
use crate::traits::{GitProvider, ImportReader, ProjectProvider, SourceProvider};

pub const MOCK_ROOT: &str = "/mock/project";
pub const MOCK_PREFIX: &str = "github.com/org/proj";

pub struct MockProjectProvider {
    project: GoProject,
    config: ScopeConfig,
    received_overrides: Mutex<Option<ScopeOverrides>>,
}

impl MockProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            project: GoProject {
                root: PathBuf::from(MOCK_ROOT),
                module_path: Some(MOCK_PREFIX.to_string()),
            },
            config: ScopeConfig::new(MOCK_PREFIX),
            received_overrides: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScopeConfig) -> Self {
        self.config = config;
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn received_overrides(&self) -> Option<ScopeOverrides> {
        self.received_overrides
            .lock()
            .expect("overrides mutex poisoned")
            .clone()
    }
}

impl Default for MockProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for MockProjectProvider {
    fn discover_project(&self, _start_path: &Path) -> Result<GoProject> {
        Ok(self.project.clone())
    }

    fn load_config(
        &self,
        _project: &GoProject,
        overrides: &ScopeOverrides,
    ) -> Result<ScopeConfig> {
        *self
            .received_overrides
            .lock()
            .expect("overrides mutex poisoned") = Some(overrides.clone());
        Ok(self.config.clone())
    }
}

pub struct MockGitProvider {
    changes: Vec<FileChange>,
    missing_base: bool,
    requested_base: Mutex<Option<String>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
            missing_base: false,
            requested_base: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn with_changed(mut self, paths: &[&str]) -> Self {
        self.changes.extend(
            paths
                .iter()
                .map(|path| FileChange::new(PathBuf::from(path), FileStatus::Modified)),
        );
        self
    }

    #[must_use]
    pub fn with_change(mut self, change: FileChange) -> Self {
        self.changes.push(change);
        self
    }

    #[must_use]
    pub fn with_missing_base(mut self) -> Self {
        self.missing_base = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn requested_base(&self) -> Option<String> {
        self.requested_base
            .lock()
            .expect("base mutex poisoned")
            .clone()
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn changed_files(&self, _root: &Path, base: &str) -> Result<Vec<FileChange>> {
        *self.requested_base.lock().expect("base mutex poisoned") = Some(base.to_string());

        if self.missing_base {
            return Err(GitError::RefNotFound {
                refspec: base.to_string(),
            }
            .into());
        }
        Ok(self.changes.clone())
    }
}

/// In-memory source tree. Excluded directories are honoured the way the real walker
/// honours them: by leading path components.
pub struct MockSourceProvider {
    files: Vec<PathBuf>,
}

impl MockSourceProvider {
    #[must_use]
    pub fn new(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(PathBuf::from).collect(),
        }
    }
}

impl SourceProvider for MockSourceProvider {
    fn source_files(
        &self,
        _root: &Path,
        excluded_dirs: &[String],
    ) -> Box<dyn Iterator<Item = PathBuf>> {
        let excluded: Vec<PathBuf> = excluded_dirs.iter().map(PathBuf::from).collect();
        let files: Vec<PathBuf> = self
            .files
            .iter()
            .filter(|file| !excluded.iter().any(|dir| file.starts_with(dir)))
            .cloned()
            .collect();
        Box::new(files.into_iter())
    }
}

enum MockSource {
    Imports(Vec<String>),
    Malformed,
}

pub struct MockImportReader {
    root: PathBuf,
    files: HashMap<PathBuf, MockSource>,
}

impl MockImportReader {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            files: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_file(mut self, relative: &str, imports: &[&str]) -> Self {
        self.files.insert(
            self.root.join(relative),
            MockSource::Imports(imports.iter().map(|s| (*s).to_string()).collect()),
        );
        self
    }

    #[must_use]
    pub fn with_malformed(mut self, relative: &str) -> Self {
        self.files
            .insert(self.root.join(relative), MockSource::Malformed);
        self
    }
}

impl ImportReader for MockImportReader {
    fn read_imports(&self, path: &Path) -> std::result::Result<ImportSection, ImportParseError> {
        match self.files.get(path) {
            Some(MockSource::Imports(imports)) => Ok(ImportSection {
                package_name: "mock".to_string(),
                imports: imports.iter().map(ImportDeclaration::new).collect(),
            }),
            Some(MockSource::Malformed) => Err(ImportParseError::MalformedImports {
                path: path.to_path_buf(),
                line: 1,
            }),
            None => Err(ImportParseError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such mock file"),
            }),
        }
    }
}
