//! Class extraction types

use serde::{Deserialize, Serialize};

/// Where a class string was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassOrigin {
    /// `class="..."`, `className="..."`, `:class`, `[ngClass]`
    Attribute,
    /// Argument of `cn()`, `clsx()`, `cva()` and friends
    Helper,
    /// Value inside a `variants: { ... }` table
    VariantTable,
}

/// One literal class string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassString {
    pub text: String,
    /// 1-based line of the literal
    pub line: u32,
    /// 1-based column of the literal content
    pub column: u32,
    pub origin: ClassOrigin,
}

impl ClassString {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        class_tokens(&self.text)
    }
}

/// One `axis -> key -> classes` entry of a variant table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantEntry {
    /// Variant axis, e.g. `size`
    pub axis: String,
    /// Variant key, e.g. `sm`
    pub key: String,
    /// Class value, whitespace-normalized
    pub classes: String,
    pub line: u32,
}

/// Everything class-related extracted from one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileClasses {
    /// Root-relative path
    pub file: String,
    pub class_strings: Vec<ClassString>,
    pub variants: Vec<VariantEntry>,
}

/// Whitespace-separated class tokens, skipping interpolation fragments.
pub fn class_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|t| !t.contains("${") && !t.contains('{') && !t.contains('}'))
}
