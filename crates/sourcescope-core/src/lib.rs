mod source;
pub mod types;

pub use source::{GO_SOURCE_SUFFIX, is_source_file};
pub use types::*;
