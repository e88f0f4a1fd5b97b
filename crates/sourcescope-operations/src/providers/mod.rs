mod git;
mod imports;
mod project;
mod source;

pub use git::Git2Provider;
pub use imports::TreeSitterImportReader;
pub use project::FileSystemProjectProvider;
pub use source::FileSystemSourceProvider;
