use std::path::{Component, Path};

use sourcescope_core::{Package, PackageSet, is_source_file};

/// Maps a source file path to the package (directory) containing it.
///
/// The `root` prefix is stripped when present, the remaining segments are joined with
/// `/`, and any segment carrying the source suffix is dropped. A file at the tree root
/// resolves to the root package (the empty identifier).
#[must_use]
pub fn resolve_package(path: &Path, root: &Path) -> Package {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .filter(|segment| !is_source_file(segment))
        .collect();

    Package::new(segments.join("/"))
}

/// Resolves every path and collects the distinct packages.
pub fn resolve_packages<'a, I>(paths: I, root: &Path) -> PackageSet
where
    I: IntoIterator<Item = &'a Path>,
{
    paths
        .into_iter()
        .map(|path| resolve_package(path, root))
        .collect()
}
