mod git_provider;
mod import_reader;
mod project_provider;
mod source_provider;

pub use git_provider::GitProvider;
pub use import_reader::ImportReader;
pub use project_provider::ProjectProvider;
pub use source_provider::SourceProvider;
