//! Inline-style audit: hardcoded values in statically known declarations.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{placeholder, StyleDeclaration};
use crate::signals::{
    DriftSignal, DriftType, Severity, SignalDetails, SignalExample, SignalLocation, SignalSource,
    MAX_EXAMPLES,
};
use crate::tokens::{is_hardcoded_color, is_token_reference};

static PX_LENGTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|[\s(,])(-?\d*\.?\d+)px\b").unwrap());

/// One hardcoded `prop: value` pair inside a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineFinding {
    pub property: String,
    pub value: String,
    pub is_color: bool,
    pub line: u32,
    pub column: u32,
}

/// `px` lengths other than hairlines and zero.
fn is_hardcoded_length(value: &str) -> bool {
    PX_LENGTH_RE
        .captures_iter(value)
        .filter_map(|c| c[1].parse::<f64>().ok())
        .any(|n| n.abs() > 1.0)
}

/// Hardcoded values in declarations, skipping placeholders and var() references.
pub fn find_hardcoded(declarations: &[StyleDeclaration]) -> Vec<InlineFinding> {
    let mut findings = Vec::new();
    for decl in declarations {
        if placeholder::is_placeholder(&decl.css) {
            continue;
        }
        for part in decl.css.split(';') {
            let Some((property, value)) = part.split_once(':') else {
                continue;
            };
            let (property, value) = (property.trim(), value.trim());
            if value.is_empty() || placeholder::is_placeholder(value) || is_token_reference(value) {
                continue;
            }
            let is_color = is_hardcoded_color(value);
            if is_color || is_hardcoded_length(value) {
                findings.push(InlineFinding {
                    property: property.to_string(),
                    value: value.to_string(),
                    is_color,
                    line: decl.line,
                    column: decl.column,
                });
            }
        }
    }
    findings
}

/// One signal per file with hardcoded inline values; `None` when clean.
pub fn audit_inline_styles(file: &str, declarations: &[StyleDeclaration]) -> Option<DriftSignal> {
    let findings = find_hardcoded(declarations);
    let first = findings.first()?;
    let has_color = findings.iter().any(|f| f.is_color);

    let mut suggestions = Vec::new();
    if let Some(color) = findings.iter().find(|f| f.is_color) {
        suggestions.push(format!(
            "Replace literal colors with a color token: `{}: var(--primary)` instead of `{}: {}`",
            color.property, color.property, color.value
        ));
    }
    if let Some(length) = findings.iter().find(|f| !f.is_color) {
        suggestions.push(format!(
            "Use a spacing or size token: `{}: var(--spacing-4)` instead of `{}: {}`",
            length.property, length.property, length.value
        ));
    }
    suggestions.push("Move static inline styles into utility classes or a component stylesheet".to_string());

    let entity_id = format!("{file}#inline-style");
    let source = SignalSource {
        entity_type: "inline-style".to_string(),
        entity_id,
        entity_name: format!("inline styles in {file}"),
        location: SignalLocation {
            file: file.to_string(),
            line: first.line,
            column: first.column,
        },
    };
    let details = SignalDetails {
        expected: "Inline styles reference design tokens instead of literal values".to_string(),
        actual_count: findings.len(),
        affected_files: vec![file.to_string()],
        suggestions,
        examples: findings
            .iter()
            .take(MAX_EXAMPLES)
            .map(|f| SignalExample {
                text: format!("{}: {}", f.property, f.value),
                line: f.line,
                column: f.column,
            })
            .collect(),
    };
    let severity = if has_color { Severity::Warning } else { Severity::Info };
    let message = format!("{} hardcoded inline style value(s) in {file}", findings.len());
    Some(DriftSignal::new(DriftType::HardcodedValue, severity, source, message, details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::{StyleDialect, StyleNormalizer};

    fn declarations(src: &str, dialect: StyleDialect) -> Vec<StyleDeclaration> {
        StyleNormalizer::normalize(src, dialect).iter().collect()
    }

    #[test]
    fn test_colors_warn_and_placeholders_skip() {
        let decls = declarations(
            "<div style={{ color: '#ff6b6b', padding: 16, margin: '24px', top: offset }} />",
            StyleDialect::Jsx,
        );
        let signal = audit_inline_styles("src/Card.tsx", &decls).unwrap();
        assert_eq!(signal.severity, Severity::Warning);
        assert_eq!(signal.details.actual_count, 2);
        assert_eq!(signal.source.entity_type, "inline-style");
        assert!(signal.details.suggestions[0].contains("#ff6b6b"));
    }

    #[test]
    fn test_lengths_only_are_info() {
        let decls = declarations("<p style=\"margin: 12px 0; border: 1px solid\">", StyleDialect::Plain);
        let signal = audit_inline_styles("index.html", &decls).unwrap();
        assert_eq!(signal.severity, Severity::Info);
        assert_eq!(signal.details.examples[0].text, "margin: 12px 0");
    }

    #[test]
    fn test_clean_file_has_no_signal() {
        let decls = declarations("<p style=\"color: var(--fg); width: 1px\" :style=\"x\">", StyleDialect::Vue);
        assert!(audit_inline_styles("a.vue", &decls).is_none());
    }
}
