use std::collections::BTreeSet;
use std::fmt;

/// A directory of source files, identified by its path relative to the tree root.
///
/// Segments are always joined with `/`. The empty identifier is the root package.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Package(String);

impl Package {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn root() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// First `/`-delimited segment of the identifier.
    #[must_use]
    pub fn root_folder(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// Name used in human-readable output, where the root package shows as `.`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.is_root() { "." } else { &self.0 }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Package {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Package {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Package {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Deduplicated packages, iterated in ascending lexicographic order.
pub type PackageSet = BTreeSet<Package>;

/// One import path declared by a source file, as written (without quotes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    pub path: String,
    pub name: Option<String>,
}

impl ImportDeclaration {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
