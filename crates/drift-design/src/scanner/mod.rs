//! Scanner module - deterministic source discovery for design scans
//!
//! Walks the project root respecting gitignore-style ignores, include and
//! exclude globs, and returns files in lexicographic order of their
//! root-relative path.

mod ignores;
mod types;
mod walker;

pub use ignores::{IgnorePatterns, DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_FILES};
pub use types::{SourceFile, SourceKind};
pub use walker::FileScanner;
pub(crate) use walker::to_slash;
