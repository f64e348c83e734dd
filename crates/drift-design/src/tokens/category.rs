//! Name-based category inference.
//!
//! Each heuristic is a standalone predicate so it can be tested in isolation.

use super::types::{TokenCategory, TokenValue};

const RADIUS_WORDS: &[&str] = &["radius", "rounded"];
const SHADOW_WORDS: &[&str] = &["shadow", "elevation"];
const COLOR_WORDS: &[&str] = &[
    "color", "background", "foreground", "bg", "primary", "secondary", "accent", "muted",
    "destructive", "border", "ring", "input", "card", "popover", "chart", "sidebar", "surface",
    "fill", "stroke", "brand", "success", "warning", "danger", "error", "info",
];
const SPACING_WORDS: &[&str] = &["spacing", "space", "gap", "padding", "margin", "gutter", "inset"];
const TYPOGRAPHY_WORDS: &[&str] = &["font", "text", "leading", "tracking", "line-height", "letter-spacing"];
/// Typographic metrics whose names would otherwise read as spacing.
const TYPE_METRIC_WORDS: &[&str] = &["letter-spacing", "tracking", "line-height", "leading"];

fn name_has_any(name: &str, words: &[&str]) -> bool {
    let lower = name.to_ascii_lowercase();
    words.iter().any(|w| lower.contains(w))
}

pub fn is_radius_name(name: &str) -> bool {
    name_has_any(name, RADIUS_WORDS)
}

pub fn is_shadow_name(name: &str) -> bool {
    name_has_any(name, SHADOW_WORDS)
}

pub fn is_color_name(name: &str) -> bool {
    name_has_any(name, COLOR_WORDS)
}

pub fn is_spacing_name(name: &str) -> bool {
    name_has_any(name, SPACING_WORDS)
}

pub fn is_typography_name(name: &str) -> bool {
    name_has_any(name, TYPOGRAPHY_WORDS)
}

pub fn is_type_metric_name(name: &str) -> bool {
    name_has_any(name, TYPE_METRIC_WORDS)
}

/// Infer a category from a variable name, falling back to the parsed value.
pub fn infer_category(name: &str, value: &TokenValue) -> TokenCategory {
    if is_radius_name(name) {
        TokenCategory::Border
    } else if is_shadow_name(name) {
        TokenCategory::Shadow
    } else if is_color_name(name) {
        TokenCategory::Color
    } else if is_type_metric_name(name) {
        TokenCategory::Typography
    } else if is_spacing_name(name) {
        TokenCategory::Spacing
    } else if is_typography_name(name) {
        TokenCategory::Typography
    } else if matches!(value, TokenValue::Color { .. }) {
        TokenCategory::Color
    } else {
        TokenCategory::Other
    }
}
