use std::path::Path;

use sourcescope_project::{GoProject, ScopeConfig, ScopeOverrides};

use crate::Result;

pub trait ProjectProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the start path does not exist or cannot be resolved.
    fn discover_project(&self, start_path: &Path) -> Result<GoProject>;

    /// # Errors
    ///
    /// Returns an error if the configuration file is invalid or no import prefix is known.
    fn load_config(&self, project: &GoProject, overrides: &ScopeOverrides)
    -> Result<ScopeConfig>;
}
