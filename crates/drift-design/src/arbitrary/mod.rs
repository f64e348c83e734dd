//! Arbitrary value detection
//!
//! Finds bracket-notation literals in utility classes (`bg-[#ff6b6b]`,
//! `p-[13px]`) and groups them into one drift signal per file and category.

mod detector;
mod patterns;
mod types;

pub use detector::ArbitraryValueDetector;
pub use patterns::is_reference_value;
pub use types::{ArbitraryCategory, ArbitraryValue};
