//! Generation A: object-literal style configuration (`tailwind.config.*`).

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{tags, DesignToken, TokenCategory, TokenSource, TokenSourceKind, TokenValue};
use super::values::parse_token_value;
use crate::errors::ResolveError;
use crate::text::{find_matching, parse_object, ObjectEntry, ObjectValue};

/// Config filenames looked up in the project root, in order.
pub const OBJECT_CONFIG_FILES: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.ts",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
];

static THEME_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\btheme['"]?\s*:\s*\{"#).unwrap());

/// Theme sections read from the config, with their token naming scheme.
#[derive(Debug, Clone, Copy)]
struct Section {
    key: &'static str,
    prefix: &'static str,
    category: TokenCategory,
}

const SECTIONS: &[Section] = &[
    Section { key: "colors", prefix: "", category: TokenCategory::Color },
    Section { key: "spacing", prefix: "spacing", category: TokenCategory::Spacing },
    Section { key: "fontSize", prefix: "font-size", category: TokenCategory::Typography },
    Section { key: "fontFamily", prefix: "font", category: TokenCategory::Typography },
    Section { key: "borderRadius", prefix: "radius", category: TokenCategory::Border },
    Section { key: "boxShadow", prefix: "shadow", category: TokenCategory::Shadow },
];

/// Extract tokens from the content of one object-literal config file.
///
/// `theme.extend` entries are read before the base theme so that extended
/// values are encountered first.
pub fn extract_object_config(
    content: &str,
    relative: &str,
    path: &Path,
) -> Result<Vec<DesignToken>, ResolveError> {
    let theme_match = THEME_KEY_RE.find(content).ok_or_else(|| ResolveError::Empty {
        path: path.to_path_buf(),
    })?;
    let open = theme_match.end() - 1;
    let close = find_matching(content, open).ok_or_else(|| ResolveError::Malformed {
        path: path.to_path_buf(),
        reason: "unbalanced theme object".to_string(),
    })?;
    let theme_body = &content[open + 1..close];
    let theme_entries = parse_object(theme_body);

    let source = TokenSource {
        kind: TokenSourceKind::JsConfig,
        path: relative.to_string(),
    };
    let mut tokens = Vec::new();

    if let Some(ObjectValue::Object { body, .. }) = theme_entries
        .iter()
        .find(|e| e.key == "extend")
        .map(|e| e.value.clone())
    {
        extract_sections(&parse_object(body), &source, tags::EXTEND, &mut tokens);
    }
    extract_sections(&theme_entries, &source, tags::THEME, &mut tokens);

    Ok(tokens)
}

fn extract_sections(
    entries: &[ObjectEntry<'_>],
    source: &TokenSource,
    origin: &str,
    out: &mut Vec<DesignToken>,
) {
    for section in SECTIONS {
        let Some(entry) = entries.iter().find(|e| e.key == section.key) else {
            continue;
        };
        let ObjectValue::Object { body, .. } = entry.value else {
            continue;
        };
        for item in parse_object(body) {
            if section.key == "colors" {
                flatten_color(&item.key, &item.value, source, origin, out);
            } else {
                let Some(raw) = scalar_value(section, &item.value) else {
                    continue;
                };
                let name = section_token_name(section, &item.key);
                let mut token = DesignToken::new(
                    name.clone(),
                    section.category,
                    parse_token_value(&raw),
                    source.clone(),
                )
                .with_tag(tags::CONFIG_V3)
                .with_tag(origin);
                if item.key == "DEFAULT" {
                    token = token.with_alias(format!("{}-DEFAULT", section.prefix));
                }
                out.push(token);
            }
        }
    }
}

/// `name -> { shade -> value }` becomes `name-shade`; `DEFAULT` maps to `name`.
fn flatten_color(
    name: &str,
    value: &ObjectValue<'_>,
    source: &TokenSource,
    origin: &str,
    out: &mut Vec<DesignToken>,
) {
    match value {
        ObjectValue::Str(s) => out.push(
            DesignToken::new(name, TokenCategory::Color, parse_token_value(s), source.clone())
                .with_tag(tags::CONFIG_V3)
                .with_tag(origin),
        ),
        ObjectValue::Object { body, .. } => {
            for shade in parse_object(body) {
                if shade.key == "DEFAULT" {
                    if let ObjectValue::Str(s) = shade.value {
                        out.push(
                            DesignToken::new(name, TokenCategory::Color, parse_token_value(s), source.clone())
                                .with_alias(format!("{name}-DEFAULT"))
                                .with_tag(tags::CONFIG_V3)
                                .with_tag(origin),
                        );
                    }
                } else {
                    flatten_color(&format!("{}-{}", name, shade.key), &shade.value, source, origin, out);
                }
            }
        }
        ObjectValue::Expr(expr) if is_plain_expr(expr) => out.push(
            DesignToken::new(name, TokenCategory::Color, TokenValue::raw(*expr), source.clone())
                .with_tag(tags::CONFIG_V3)
                .with_tag(origin),
        ),
        _ => {}
    }
}

/// Scalar text of a non-color entry: strings, first element of a
/// `fontSize` tuple, joined `fontFamily` stacks, or bare numbers.
fn scalar_value(section: &Section, value: &ObjectValue<'_>) -> Option<String> {
    match value {
        ObjectValue::Str(s) => Some(s.to_string()),
        ObjectValue::Array(_) => {
            let strings = value.strings();
            if strings.is_empty() {
                None
            } else if section.key == "fontFamily" {
                Some(strings.join(", "))
            } else {
                Some(strings[0].to_string())
            }
        }
        ObjectValue::Expr(expr) if is_plain_expr(expr) => Some(expr.to_string()),
        _ => None,
    }
}

/// Identifiers, numbers and member paths; not functions or calls.
fn is_plain_expr(expr: &str) -> bool {
    !expr.is_empty() && !expr.contains("=>") && !expr.contains('(') && !expr.starts_with("...")
}

fn section_token_name(section: &Section, key: &str) -> String {
    if key == "DEFAULT" {
        section.prefix.to_string()
    } else {
        format!("{}-{}", section.prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::types::SpacingUnit;

    const CONFIG: &str = r#"
/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./src/**/*.{ts,tsx}'],
  theme: {
    colors: {
      brand: { DEFAULT: '#0066cc', 500: '#3385d6', dark: { 900: '#001a33' } },
      white: '#fff',
      primary: 'hsl(var(--primary))',
    },
    spacing: { 1: '4px', 2: '0.5rem', px: '1px' },
    fontSize: { sm: ['0.875rem', { lineHeight: '1.25rem' }] },
    fontFamily: { sans: ['Inter', 'system-ui'] },
    borderRadius: { DEFAULT: '0.25rem', lg: 'var(--radius)' },
    extend: {
      boxShadow: { card: '0 1px 2px rgba(0,0,0,0.1)' },
    },
  },
  plugins: [require('tailwindcss-animate')],
}
"#;

    fn extract() -> Vec<DesignToken> {
        extract_object_config(CONFIG, "tailwind.config.js", Path::new("tailwind.config.js")).unwrap()
    }

    fn find<'a>(tokens: &'a [DesignToken], name: &str) -> &'a DesignToken {
        tokens.iter().find(|t| t.name == name).unwrap_or_else(|| panic!("missing {name}"))
    }

    #[test]
    fn test_color_scales_flatten() {
        let tokens = extract();
        assert_eq!(find(&tokens, "brand").value, TokenValue::Color { hex: "#0066cc".into() });
        assert!(find(&tokens, "brand").aliases.contains("brand-DEFAULT"));
        assert_eq!(find(&tokens, "brand-500").value, TokenValue::Color { hex: "#3385d6".into() });
        assert_eq!(find(&tokens, "brand-dark-900").category, TokenCategory::Color);
        assert!(find(&tokens, "primary").value.is_raw());
    }

    #[test]
    fn test_dimensions_become_spacing() {
        let tokens = extract();
        assert_eq!(
            find(&tokens, "spacing-2").value,
            TokenValue::Spacing { value: 0.5, unit: SpacingUnit::Rem }
        );
        assert_eq!(
            find(&tokens, "font-size-sm").value,
            TokenValue::Spacing { value: 0.875, unit: SpacingUnit::Rem }
        );
        assert_eq!(find(&tokens, "font-sans").value, TokenValue::raw("Inter, system-ui"));
        assert!(find(&tokens, "radius-lg").value.is_raw());
        assert_eq!(find(&tokens, "radius").category, TokenCategory::Border);
    }

    #[test]
    fn test_extend_first_and_tagged() {
        let tokens = extract();
        assert_eq!(tokens[0].name, "shadow-card");
        assert!(tokens[0].has_tag(tags::EXTEND));
        assert!(tokens.iter().all(|t| t.has_tag(tags::CONFIG_V3)));
    }

    #[test]
    fn test_unbalanced_theme_is_malformed() {
        let err = extract_object_config("module.exports = { theme: { colors: {", "t.js", Path::new("t.js"))
            .unwrap_err();
        assert!(matches!(err, ResolveError::Malformed { .. }));
    }

    #[test]
    fn test_missing_theme_is_empty() {
        let err = extract_object_config("module.exports = {}", "t.js", Path::new("t.js")).unwrap_err();
        assert!(matches!(err, ResolveError::Empty { .. }));
    }
}
