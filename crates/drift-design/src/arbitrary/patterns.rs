//! Arbitrary value patterns, one per category
//!
//! Every pattern accepts a chain of variant prefixes (`dark:`, `md:`,
//! `hover:`, `@lg:`, `data-[state=open]:`, `[&>svg]:`) and an optional
//! important marker, either before the property prefix or after the value.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::ArbitraryCategory;
use crate::tokens::is_hardcoded_color;

/// Variant/modifier chain preceding a utility.
const VARIANTS: &str = r"(?:(?:[@a-z0-9-]+(?:-\[[^\]\s]+\])?(?:/[\w-]+)?|\[[^\]\s]+\]):)*!?";

/// Bracketed value; no whitespace or closing bracket inside.
const VALUE: &str = r"\[(?P<value>[^\]\s]+)\]";

/// Opacity modifier (`/50`, `/[.35]`).
const ALPHA: &str = r"(?:/(?:\d{1,3}|\[[^\]\s]+\]))?";

/// Extra acceptance check on the captured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueCheck {
    Any,
    Color,
    NotColor,
}

impl ValueCheck {
    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Color => is_hardcoded_color(&value.replace('_', " ")),
            Self::NotColor => !is_hardcoded_color(&value.replace('_', " ")),
        }
    }
}

/// A category pattern
pub(crate) struct ArbitraryPattern {
    pub name: &'static str,
    pub regex: Regex,
    pub category: ArbitraryCategory,
    pub check: ValueCheck,
}

impl ArbitraryPattern {
    fn new(name: &'static str, utility: &str, category: ArbitraryCategory, check: ValueCheck) -> Self {
        let pattern = format!(r"(?P<token>{VARIANTS}{utility}!?)");
        Self {
            name,
            regex: Regex::new(&pattern).unwrap(),
            category,
            check,
        }
    }

    /// Value accepted for this category; token references never are.
    pub fn accepts(&self, value: &str) -> bool {
        !is_reference_value(value) && self.check.accepts(value)
    }
}

/// `var(--x)`, `--x` shorthand and `theme(...)` reference tokens.
pub fn is_reference_value(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("var(") || lower.starts_with("--") || lower.starts_with("theme(")
}

/// Patterns in priority order; the catch-all must stay last.
pub(crate) static ARBITRARY_PATTERNS: Lazy<Vec<ArbitraryPattern>> = Lazy::new(|| {
    vec![
        ArbitraryPattern::new(
            "color",
            &format!(
                r"(?:bg|text|border(?:-[trblxyse])?|ring|ring-offset|outline|fill|stroke|from|via|to|decoration|accent|caret|divide|placeholder|shadow)-{VALUE}{ALPHA}"
            ),
            ArbitraryCategory::Color,
            ValueCheck::Color,
        ),
        ArbitraryPattern::new(
            "spacing",
            &format!(
                r"-?(?:p[xytrblse]?|m[xytrblse]?|gap(?:-[xy])?|space-[xy]|inset(?:-[xy])?|top|right|bottom|left|start|end|scroll-[mp][xytrblse]?|indent)-{VALUE}"
            ),
            ArbitraryCategory::Spacing,
            ValueCheck::Any,
        ),
        ArbitraryPattern::new(
            "size",
            &format!(r"(?:w|h|min-w|min-h|max-w|max-h|size|basis)-{VALUE}"),
            ArbitraryCategory::Size,
            ValueCheck::Any,
        ),
        ArbitraryPattern::new(
            "font-size",
            &format!(r"(?:text|leading|tracking)-{VALUE}"),
            ArbitraryCategory::Size,
            ValueCheck::NotColor,
        ),
        ArbitraryPattern::new(
            "grid",
            &format!(r"(?:grid-cols|grid-rows|col-span|row-span|col|row|auto-cols|auto-rows|grid-areas)-{VALUE}"),
            ArbitraryCategory::Grid,
            ValueCheck::Any,
        ),
        ArbitraryPattern::new(
            "timing",
            &format!(r"(?:duration|delay|ease|animate|transition)-{VALUE}"),
            ArbitraryCategory::Timing,
            ValueCheck::Any,
        ),
        ArbitraryPattern::new(
            "drop-shadow",
            &format!(r"(?:drop-shadow|shadow)-{VALUE}"),
            ArbitraryCategory::Other,
            ValueCheck::NotColor,
        ),
        ArbitraryPattern::new(
            "css-property",
            r"\[(?P<value>(?:--[\w-]+|[a-z][a-z-]*):[^\]\s]+)\]",
            ArbitraryCategory::CssProperty,
            ValueCheck::Any,
        ),
        ArbitraryPattern::new(
            "catch-all",
            &format!(r"[a-z][\w-]*-{VALUE}{ALPHA}"),
            ArbitraryCategory::Other,
            ValueCheck::NotColor,
        ),
    ]
});
