mod error;
mod parse;

pub use error::ImportParseError;
pub use parse::{ImportSection, parse_imports, read_imports};

pub type Result<T> = std::result::Result<T, ImportParseError>;
