mod config;
mod error;
mod folders;
mod gomod;
mod manifest;
mod project;
mod resolve;
mod walk;

pub const CONFIG_FILE_NAME: &str = ".sourcescope.toml";
pub const GO_MOD_FILE_NAME: &str = "go.mod";

pub use config::{
    DEFAULT_BASE, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_PACKAGES, ParseErrorPolicy,
    ScopeConfig, ScopeOverrides, load_config,
};
pub use error::ProjectError;
pub use folders::root_folders;
pub use gomod::parse_module_path;
pub use project::{GoProject, discover_project};
pub use resolve::{resolve_package, resolve_packages};
pub use walk::{SourceWalk, walk_sources};

pub type Result<T> = std::result::Result<T, ProjectError>;
