//! Types for arbitrary value detection

use serde::{Deserialize, Serialize};

/// Category of a bracket-notation value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArbitraryCategory {
    /// Literal colors (`bg-[#ff6b6b]`, `text-[rgb(0,0,0)]/50`)
    Color,
    /// Padding, margin, gap, inset
    Spacing,
    /// Width, height, font size, line height
    Size,
    /// Durations, delays, easing
    Timing,
    /// Grid templates and spans
    Grid,
    /// Whole arbitrary properties (`[mask-type:luminance]`, `[--x:1px]`)
    CssProperty,
    /// Shadows and everything else
    Other,
}

impl ArbitraryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::Size => "size",
            Self::Timing => "timing",
            Self::Grid => "grid",
            Self::CssProperty => "css-property",
            Self::Other => "other",
        }
    }
}

/// One bracket-notation literal in class text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbitraryValue {
    pub category: ArbitraryCategory,
    /// Text inside the brackets
    pub value: String,
    /// Full class token including variant prefixes
    pub class_name: String,
    /// Root-relative file path
    pub file: String,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}
