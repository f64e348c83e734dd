//! Semantic token types

use serde::{Deserialize, Serialize};

use crate::tokens::TokenCategory;

/// Examples kept per semantic token.
pub const MAX_SEMANTIC_EXAMPLES: usize = 5;

/// One reference to a semantic name in a class token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticUsage {
    pub name: String,
    pub category: TokenCategory,
    /// The full class token, e.g. `hover:bg-primary/90`
    pub class_name: String,
}

/// A token inferred from usage rather than declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticToken {
    pub name: String,
    /// Inferred from the property prefix of the first usage
    pub category: TokenCategory,
    pub usage_count: usize,
    /// Files it appears in, in scan order
    pub files: Vec<String>,
    /// Up to `MAX_SEMANTIC_EXAMPLES` distinct class tokens
    pub examples: Vec<String>,
}
