use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use sourcescope_core::{PackageSet, is_source_file};
use sourcescope_imports::ImportParseError;
use sourcescope_project::{ParseErrorPolicy, ScopeOverrides, resolve_package, root_folders};
use tracing::debug;

use crate::Result;
use crate::scan::dependent_packages;
use crate::traits::{GitProvider, ImportReader, ProjectProvider, SourceProvider};

pub struct ImpactOutput {
    pub root: PathBuf,
    pub import_prefix: String,
    pub base: String,
    /// Changed source files considered for package resolution, relative to `root`.
    /// Sorted and free of duplicates.
    pub changed_files: Vec<PathBuf>,
    pub changed_packages: PackageSet,
    pub dependent_packages: PackageSet,
    pub root_folders: BTreeSet<String>,
    pub parse_failures: Vec<ImportParseError>,
    pub on_parse_error: ParseErrorPolicy,
}

pub struct ImpactOperation<P, G, S, R> {
    project_provider: P,
    git_provider: G,
    source_provider: S,
    import_reader: R,
}

impl<P, G, S, R> ImpactOperation<P, G, S, R>
where
    P: ProjectProvider,
    G: GitProvider,
    S: SourceProvider,
    R: ImportReader,
{
    pub fn new(project_provider: P, git_provider: G, source_provider: S, import_reader: R) -> Self {
        Self {
            project_provider,
            git_provider,
            source_provider,
            import_reader,
        }
    }

    /// Computes the packages changed since the configured base and the packages that
    /// import them.
    ///
    /// Parse failures do not fail the operation; they are returned in the output together
    /// with the configured policy so the caller can decide whether to publish.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be discovered, the configuration is invalid,
    /// or the repository diff fails.
    pub fn execute(&self, start_path: &Path, overrides: &ScopeOverrides) -> Result<ImpactOutput> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self.project_provider.load_config(&project, overrides)?;

        let changes = self
            .git_provider
            .changed_files(&project.root, config.base())?;
        debug!(count = changes.len(), base = config.base(), "changed files");

        let changed_files: BTreeSet<PathBuf> = changes
            .into_iter()
            .map(|change| change.path)
            .filter(|path| is_source_file(path))
            .filter(|path| {
                let ignored = config.is_file_ignored(path);
                if ignored {
                    debug!(path = %path.display(), "ignoring changed file");
                }
                !ignored
            })
            .collect();

        let changed_packages: PackageSet = changed_files
            .iter()
            .map(|path| resolve_package(path, Path::new("")))
            .filter(|package| !config.is_package_excluded(package.as_str()))
            .collect();
        debug!(count = changed_packages.len(), "changed packages");

        let files = self
            .source_provider
            .source_files(&project.root, config.excluded_dirs());
        let report = dependent_packages(
            &changed_packages,
            files,
            &project.root,
            config.import_prefix(),
            &self.import_reader,
        );

        let root_folders = root_folders(&report.dependents);

        Ok(ImpactOutput {
            root: project.root,
            import_prefix: config.import_prefix().to_string(),
            base: config.base().to_string(),
            changed_files: changed_files.into_iter().collect(),
            changed_packages,
            dependent_packages: report.dependents,
            root_folders,
            parse_failures: report.failures,
            on_parse_error: config.on_parse_error(),
        })
    }
}
