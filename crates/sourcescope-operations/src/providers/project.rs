use std::path::Path;

use sourcescope_project::{GoProject, ScopeConfig, ScopeOverrides};

use crate::Result;
use crate::traits::ProjectProvider;

pub struct FileSystemProjectProvider;

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn discover_project(&self, start_path: &Path) -> Result<GoProject> {
        Ok(sourcescope_project::discover_project(start_path)?)
    }

    fn load_config(
        &self,
        project: &GoProject,
        overrides: &ScopeOverrides,
    ) -> Result<ScopeConfig> {
        Ok(sourcescope_project::load_config(project, overrides)?)
    }
}
