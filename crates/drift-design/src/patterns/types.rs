//! Pattern analysis types

use serde::{Deserialize, Serialize};

/// A class list repeated verbatim (ignoring order) across files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatedClassPattern {
    /// Sorted, single-space-joined class tokens
    pub classes: String,
    /// Distinct files, sorted
    pub files: Vec<String>,
    /// Total occurrences across all files
    pub occurrences: usize,
}

/// One file's definition of a variant entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantLocation {
    pub file: String,
    pub line: u32,
    pub classes: String,
}

/// Same component, axis and key; different classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantInconsistency {
    /// Component name inferred from the file name
    pub component: String,
    /// Variant axis, e.g. `size`
    pub axis: String,
    /// Variant key, e.g. `sm`
    pub key: String,
    /// CSS property judged to differ, e.g. `height`
    pub property: String,
    /// Distinct class values in first-seen order
    pub values: Vec<String>,
    /// Every file/value pair
    pub locations: Vec<VariantLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternCategory {
    Focus,
    Layout,
    Interactive,
    Typography,
    Other,
}

/// A recurring class idiom worth extracting into a component or utility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractablePattern {
    /// Normalized matched class run
    pub pattern: String,
    pub suggested_name: String,
    pub category: PatternCategory,
    pub occurrences: usize,
    /// Distinct files, sorted
    pub files: Vec<String>,
}

/// Output of one pattern analysis pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPatternReport {
    pub duplicates: Vec<DuplicatedClassPattern>,
    pub inconsistencies: Vec<VariantInconsistency>,
    pub extractable: Vec<ExtractablePattern>,
    /// Class strings and variant entries examined
    pub patterns_analyzed: usize,
}

impl ClassPatternReport {
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty() && self.inconsistencies.is_empty() && self.extractable.is_empty()
    }
}
