//! Class usage extraction
//!
//! Collects literal class strings from attributes, class-combination helper
//! calls, and variant tables, plus the variant tables' `axis -> key -> classes`
//! entries. Shared by semantic token inference and pattern analysis.

mod extractor;
mod types;

pub use extractor::{extract_file_classes, CLASS_HELPERS};
pub use types::{class_tokens, ClassOrigin, ClassString, FileClasses, VariantEntry};
