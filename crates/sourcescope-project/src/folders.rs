use std::collections::BTreeSet;

use sourcescope_core::Package;

/// Reduces packages to their distinct first path segments, sorted.
pub fn root_folders<'a, I>(packages: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Package>,
{
    packages
        .into_iter()
        .map(|package| package.root_folder().to_string())
        .collect()
}
