use std::path::Path;

use sourcescope_git::{FileChange, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn changed_files(&self, root: &Path, base: &str) -> Result<Vec<FileChange>> {
        let repo = Repository::open(root)?;
        Ok(repo.changed_files_in(root, base)?)
    }
}
