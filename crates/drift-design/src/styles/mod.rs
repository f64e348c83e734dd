//! Style normalizer
//!
//! Extracts inline-style expressions from four template dialects into one
//! `StyleDeclaration` shape. Each binding syntax is an independent
//! pattern + handler pair; once a span is consumed by one rule it is
//! excluded from every other rule of the same dialect.

pub mod audit;
pub mod dialect;
pub mod normalizer;
mod rules;
pub mod types;

pub use audit::{audit_inline_styles, find_hardcoded, InlineFinding};
pub use dialect::StyleDialect;
pub use normalizer::{StyleDeclarations, StyleNormalizer};
pub use rules::is_css_unit;
pub use types::{placeholder, BindingKind, StyleContext, StyleDeclaration};
