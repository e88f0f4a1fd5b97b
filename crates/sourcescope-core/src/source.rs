use std::path::Path;

/// Suffix every analysed source file carries.
pub const GO_SOURCE_SUFFIX: &str = ".go";

/// Whether a file name or path ends with the Go source suffix.
///
/// The check is textual: a bare `.go` name is accepted the same way the
/// package resolver drops any segment carrying the suffix.
#[must_use]
pub fn is_source_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .to_str()
        .is_some_and(|s| s.ends_with(GO_SOURCE_SUFFIX))
}
