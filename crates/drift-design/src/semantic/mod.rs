//! Semantic usage extraction
//!
//! Infers which named tokens components reference (`bg-primary`,
//! `text-muted-foreground`) with usage counts and originating files.
//! Utility palette colors such as `gray-300` are never treated as tokens.

mod extractor;
pub mod predicates;
mod types;

pub use extractor::{extract_semantic_usages, semantic_usage, SemanticIndex};
pub use predicates::{is_palette_scale, is_semantic_name, looks_semantic};
pub use types::{SemanticToken, SemanticUsage, MAX_SEMANTIC_EXAMPLES};
