//! Named predicates deciding whether a referenced name is a design decision.

use once_cell::sync::Lazy;
use regex::Regex;

/// Names accepted as semantic tokens outright.
pub const KNOWN_SEMANTIC: &[&str] = &[
    "background", "foreground", "primary", "primary-foreground", "secondary",
    "secondary-foreground", "muted", "muted-foreground", "accent", "accent-foreground",
    "destructive", "destructive-foreground", "border", "input", "ring", "card",
    "card-foreground", "popover", "popover-foreground", "success", "warning", "danger", "info",
    "error", "surface", "brand",
];

/// Stems that mark a name as semantic when it starts with one.
const SEMANTIC_STEMS: &[&str] = &[
    "primary", "secondary", "accent", "muted", "destructive", "success", "warning", "danger",
    "error", "info", "brand", "surface", "card", "popover", "sidebar", "chart", "content",
    "heading", "body",
];

/// Default utility palette names.
const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

/// Keywords that are never tokens.
const KEYWORDS: &[&str] = &["white", "black", "transparent", "current", "inherit"];

static PALETTE_SCALE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?:{})(?:-(?:50|[1-9]00|950))?$", PALETTE.join("|"))).unwrap()
});

pub fn is_known_semantic(name: &str) -> bool {
    KNOWN_SEMANTIC.contains(&name)
}

/// Ends with `-foreground` or starts with a semantic stem.
pub fn looks_semantic(name: &str) -> bool {
    name.ends_with("-foreground")
        || SEMANTIC_STEMS
            .iter()
            .any(|stem| name == *stem || name.starts_with(&format!("{stem}-")))
}

/// `gray`, `gray-300`, `blue-950`, `white`: utility palette colors.
pub fn is_palette_scale(name: &str) -> bool {
    KEYWORDS.contains(&name) || PALETTE_SCALE_RE.is_match(name)
}

pub fn is_semantic_name(name: &str) -> bool {
    (is_known_semantic(name) || looks_semantic(name)) && !is_palette_scale(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_scale() {
        assert!(is_palette_scale("gray-300"));
        assert!(is_palette_scale("blue"));
        assert!(is_palette_scale("white"));
        assert!(!is_palette_scale("gray-custom"));
        assert!(!is_palette_scale("primary"));
    }

    #[test]
    fn test_looks_semantic() {
        assert!(looks_semantic("sidebar-accent"));
        assert!(looks_semantic("brand-foreground"));
        assert!(looks_semantic("chart-1"));
        assert!(!looks_semantic("primaryish"));
        assert!(!looks_semantic("sm"));
    }

    #[test]
    fn test_is_semantic_name() {
        assert!(is_semantic_name("primary"));
        assert!(is_semantic_name("muted-foreground"));
        assert!(!is_semantic_name("gray-300"));
        assert!(!is_semantic_name("center"));
    }
}
