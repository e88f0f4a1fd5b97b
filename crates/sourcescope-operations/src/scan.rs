use std::path::{Path, PathBuf};

use sourcescope_core::{Package, PackageSet};
use sourcescope_imports::ImportParseError;
use sourcescope_project::resolve_package;
use tracing::{debug, trace};

use crate::traits::ImportReader;

/// Outcome of scanning a source tree for packages that import changed packages.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Packages owning at least one file that imports a changed package.
    pub dependents: PackageSet,
    /// Files whose import section could not be read, in scan order.
    pub failures: Vec<ImportParseError>,
    pub files_scanned: usize,
}

/// The text an import path has to contain to depend on `package`.
///
/// The root package is addressed by the bare prefix.
#[must_use]
pub fn import_needle(prefix: &str, package: &Package) -> String {
    if package.is_root() {
        prefix.to_string()
    } else {
        format!("{prefix}/{package}")
    }
}

/// Substring match, not a path-segment match: the needle for `pkg/a` also matches an
/// import of `<prefix>/pkg/abc`.
#[must_use]
pub fn import_matches(import: &str, prefix: &str, needle: &str) -> bool {
    import.starts_with(prefix) && import.contains(needle)
}

/// Finds the packages among `files` that import any of the `changed` packages.
///
/// `files` are relative to `root`. A matching file contributes its own package, never the
/// imported one. Files that fail to parse are collected in the report and do not stop
/// the scan.
pub fn dependent_packages<I, R>(
    changed: &PackageSet,
    files: I,
    root: &Path,
    prefix: &str,
    reader: &R,
) -> ScanReport
where
    I: IntoIterator<Item = PathBuf>,
    R: ImportReader + ?Sized,
{
    let needles: Vec<String> = changed
        .iter()
        .map(|package| import_needle(prefix, package))
        .collect();
    let mut report = ScanReport::default();

    for file in files {
        report.files_scanned += 1;

        let section = match reader.read_imports(&root.join(&file)) {
            Ok(section) => section,
            Err(err) => {
                debug!(file = %file.display(), error = %err, "failed to parse import section");
                report.failures.push(err);
                continue;
            }
        };

        let depends = section.import_paths().any(|import| {
            needles
                .iter()
                .any(|needle| import_matches(import, prefix, needle))
        });

        if depends {
            let package = resolve_package(&file, Path::new(""));
            trace!(file = %file.display(), package = package.display_name(), "dependent file");
            report.dependents.insert(package);
        }
    }

    debug!(
        files = report.files_scanned,
        dependents = report.dependents.len(),
        failures = report.failures.len(),
        "scanned imports"
    );

    report
}
