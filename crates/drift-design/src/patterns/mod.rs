//! Cross-component pattern analysis
//!
//! Three independent passes over per-file class strings and variant tables:
//! duplicated class lists, diverging variant definitions between same-named
//! components, and recurring idioms worth extracting.

mod analyzer;
mod duplicates;
mod extractable;
mod types;
mod variants;

pub use analyzer::ClassPatternAnalyzer;
pub use duplicates::{find_duplicates, normalize_class_list, MIN_DUPLICATE_TOKENS};
pub use extractable::{find_extractable, suggest_name, MIN_EXTRACTABLE_OCCURRENCES};
pub use types::{
    ClassPatternReport, DuplicatedClassPattern, ExtractablePattern, PatternCategory,
    VariantInconsistency, VariantLocation,
};
pub use variants::{component_name, find_variant_inconsistencies, property_for_class};
