//! Implicit framework tokens.
//!
//! Utility frameworks define a default theme that component CSS references
//! through `var(--...)` without redeclaring it. Each family has a dedicated
//! naming pattern; only references matching one of them are emitted.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::TokenCategory;

/// A family of framework-provided variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImplicitFamily {
    Color,
    Spacing,
    FontFamily,
    Radius,
    Shadow,
    TextSize,
    Opacity,
    ZIndex,
}

impl ImplicitFamily {
    pub fn category(&self) -> TokenCategory {
        match self {
            Self::Color => TokenCategory::Color,
            Self::Spacing => TokenCategory::Spacing,
            Self::FontFamily | Self::TextSize => TokenCategory::Typography,
            Self::Radius => TokenCategory::Border,
            Self::Shadow => TokenCategory::Shadow,
            Self::Opacity | Self::ZIndex => TokenCategory::Other,
        }
    }
}

static IMPLICIT_PATTERNS: Lazy<Vec<(ImplicitFamily, Regex)>> = Lazy::new(|| {
    [
        (ImplicitFamily::Color, r"^color-[a-z]+(?:-(?:50|[1-9]00|950))?$"),
        (ImplicitFamily::Spacing, r"^spacing(?:-[0-9a-z.]+)?$"),
        (ImplicitFamily::FontFamily, r"^font-(?:sans|serif|mono|display|body|heading)$"),
        (ImplicitFamily::Radius, r"^radius(?:-(?:xs|sm|md|lg|xl|2xl|3xl|4xl|full|none))?$"),
        (ImplicitFamily::Shadow, r"^(?:inset-)?shadow(?:-(?:2xs|xs|sm|md|lg|xl|2xl|inner|none))?$"),
        (ImplicitFamily::TextSize, r"^text-(?:xs|sm|base|lg|xl|[2-9]xl)(?:--line-height)?$"),
        (ImplicitFamily::Opacity, r"^opacity-\d{1,3}$"),
        (ImplicitFamily::ZIndex, r"^z-(?:\d{1,4}|auto)$"),
    ]
    .into_iter()
    .map(|(family, pattern)| (family, Regex::new(pattern).unwrap()))
    .collect()
});

/// Family of a referenced variable name (without the leading `--`).
pub fn classify_reference(name: &str) -> Option<ImplicitFamily> {
    IMPLICIT_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(name))
        .map(|(family, _)| *family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families() {
        assert_eq!(classify_reference("color-blue-500"), Some(ImplicitFamily::Color));
        assert_eq!(classify_reference("color-white"), Some(ImplicitFamily::Color));
        assert_eq!(classify_reference("spacing"), Some(ImplicitFamily::Spacing));
        assert_eq!(classify_reference("font-mono"), Some(ImplicitFamily::FontFamily));
        assert_eq!(classify_reference("radius-lg"), Some(ImplicitFamily::Radius));
        assert_eq!(classify_reference("shadow-md"), Some(ImplicitFamily::Shadow));
        assert_eq!(classify_reference("text-2xl"), Some(ImplicitFamily::TextSize));
        assert_eq!(classify_reference("opacity-50"), Some(ImplicitFamily::Opacity));
        assert_eq!(classify_reference("z-10"), Some(ImplicitFamily::ZIndex));
    }

    #[test]
    fn test_project_variables_are_not_implicit() {
        assert_eq!(classify_reference("primary"), None);
        assert_eq!(classify_reference("header-height"), None);
        assert_eq!(classify_reference("color-blue-123"), None);
    }
}
