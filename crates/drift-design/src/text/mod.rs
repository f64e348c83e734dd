//! Text primitives shared by every extractor.
//!
//! All extraction in this crate runs over pre-read, in-memory content.
//! Nested constructs (`@layer { :root { ... } }`, `cva(..., { variants: {...} })`)
//! are bounded with an explicit depth-counting scan rather than fixed-depth
//! regexes.

mod balanced;
mod lines;
mod literal;
mod object;

pub use balanced::{find_matching, split_top_level, top_level_positions};
pub use lines::LineIndex;
pub use literal::{
    blank_comments, camel_to_kebab, has_top_level_ternary, is_numeric_literal, string_literals,
    strip_quotes_once, StringLiteral,
};
pub use object::{parse_object, single_literal, ObjectEntry, ObjectValue};
