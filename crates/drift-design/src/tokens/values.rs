//! Token value parsing and color predicates.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{SpacingUnit, TokenValue};

static HEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

static RGB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*[,\s_]\s*(\d{1,3})\s*[,\s_]\s*(\d{1,3})\s*(?:[,/_]\s*([\d.]+%?)\s*)?\)$",
    )
    .unwrap()
});

static DIMENSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d*\.?\d+)(px|rem|em|%|vh|vw|vmin|vmax|ch|pt)$").unwrap()
});

/// Functional color notations that count as literal colors.
const COLOR_FUNCTIONS: &[&str] = &["rgb(", "rgba(", "hsl(", "hsla(", "color("];

/// Parse a raw declaration value into a typed token value.
///
/// `var()` references and `calc()` expressions are always raw.
pub fn parse_token_value(raw: &str) -> TokenValue {
    let value = raw.trim().trim_end_matches("!important").trim();
    let lower = value.to_ascii_lowercase();

    if is_token_reference(&lower) || lower.contains("calc(") {
        return TokenValue::raw(value);
    }
    if HEX_RE.is_match(value) {
        return TokenValue::Color { hex: normalize_hex(value) };
    }
    if let Some(caps) = RGB_RE.captures(&lower) {
        let channel = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u16>().ok());
        if let (Some(r), Some(g), Some(b)) = (channel(1), channel(2), channel(3)) {
            if r <= 255 && g <= 255 && b <= 255 {
                let alpha = caps.get(4).and_then(|m| parse_alpha(m.as_str()));
                let mut hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
                if let Some(a) = alpha.filter(|a| *a < 255) {
                    hex.push_str(&format!("{:02x}", a));
                }
                return TokenValue::Color { hex };
            }
        }
    }
    if value == "0" {
        return TokenValue::Spacing { value: 0.0, unit: SpacingUnit::Px };
    }
    if let Some(caps) = DIMENSION_RE.captures(&lower) {
        let number = caps[1].parse::<f64>().ok();
        let unit = SpacingUnit::parse(&caps[2]);
        if let (Some(value), Some(unit)) = (number, unit) {
            return TokenValue::Spacing { value, unit };
        }
    }
    TokenValue::raw(value)
}

fn parse_alpha(text: &str) -> Option<u8> {
    let fraction = match text.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => text.parse::<f64>().ok()?,
    };
    Some((fraction.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Lowercase, expanded `#rrggbb[aa]`.
pub fn normalize_hex(hex: &str) -> String {
    let digits = hex.trim_start_matches('#').to_ascii_lowercase();
    if digits.len() == 3 || digits.len() == 4 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        format!("#{expanded}")
    } else {
        format!("#{digits}")
    }
}

/// True for literal colors: hex, `rgb()/rgba()/hsl()/hsla()/color()`.
/// Anything containing a `var()` reference is a token reference, not a literal.
pub fn is_hardcoded_color(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    if is_token_reference(&lower) {
        return false;
    }
    if let Some(hex) = lower.strip_prefix('#') {
        return (3..=8).contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    COLOR_FUNCTIONS.iter().any(|f| lower.starts_with(f))
}

/// True when the value reads a custom property anywhere (`var(--x)`,
/// `hsl(var(--x))`, `calc(var(--x) * 2)`).
pub fn is_token_reference(value: &str) -> bool {
    value.to_ascii_lowercase().contains("var(")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_token_value("#0066CC"), TokenValue::Color { hex: "#0066cc".into() });
        assert_eq!(parse_token_value("#fff"), TokenValue::Color { hex: "#ffffff".into() });
        assert!(parse_token_value("#ggg").is_raw());
    }

    #[test]
    fn test_rgb_resolves_to_hex() {
        assert_eq!(parse_token_value("rgb(255, 0, 0)"), TokenValue::Color { hex: "#ff0000".into() });
        assert_eq!(
            parse_token_value("rgba(0 0 0 / 50%)"),
            TokenValue::Color { hex: "#00000080".into() }
        );
        assert!(parse_token_value("rgb(300, 0, 0)").is_raw());
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(parse_token_value("1.5rem"), TokenValue::Spacing { value: 1.5, unit: SpacingUnit::Rem });
        assert_eq!(parse_token_value("0"), TokenValue::Spacing { value: 0.0, unit: SpacingUnit::Px });
        assert_eq!(parse_token_value("-4px"), TokenValue::Spacing { value: -4.0, unit: SpacingUnit::Px });
        assert!(parse_token_value("1.5").is_raw());
    }

    #[test]
    fn test_references_and_expressions_are_raw() {
        assert!(parse_token_value("var(--spacing)").is_raw());
        assert!(parse_token_value("calc(var(--radius) - 2px)").is_raw());
        assert!(parse_token_value("oklch(0.9 0 0)").is_raw());
        assert!(parse_token_value("hsl(var(--primary))").is_raw());
    }

    #[test]
    fn test_hardcoded_color_predicate() {
        for v in ["#ff6b6b", "#FFF", "rgb(0,0,0)", "rgba(0_0_0_/_0.5)", "hsl(10 20% 30%)", "hsla(1,2%,3%,.4)", "color(display-p3 1 0 0)"] {
            assert!(is_hardcoded_color(v), "{v} should be hardcoded");
        }
        for v in ["var(--primary)", "rgb(var(--x))", "primary", "#zzz", "oklch(0.5 0 0)"] {
            assert!(!is_hardcoded_color(v), "{v} should not be hardcoded");
        }
    }

    #[test]
    fn test_token_reference_predicate() {
        assert!(is_token_reference("var(--primary)"));
        assert!(is_token_reference("hsl(VAR(--primary) / 0.5)"));
        assert!(is_token_reference("calc(var(--radius) - 2px)"));
        assert!(!is_token_reference("#fff"));
        assert!(!is_token_reference("variable"));
    }
}
