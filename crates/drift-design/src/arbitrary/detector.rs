//! Arbitrary value detection and drift signal grouping

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use super::patterns::ARBITRARY_PATTERNS;
use super::types::{ArbitraryCategory, ArbitraryValue};
use crate::signals::{
    DriftSignal, DriftType, Severity, SignalDetails, SignalExample, SignalLocation, SignalSource,
    MAX_EXAMPLES,
};

/// Detects bracket-notation literals in class text
#[derive(Debug, Default, Clone, Copy)]
pub struct ArbitraryValueDetector;

impl ArbitraryValueDetector {
    pub fn new() -> Self {
        Self
    }

    /// Every arbitrary value in `content`, in (line, column) order.
    pub fn detect(&self, file: &str, content: &str) -> Vec<ArbitraryValue> {
        let mut values = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if !line.contains('[') {
                continue;
            }
            let mut seen: FxHashSet<(usize, &str)> = FxHashSet::default();
            let mut line_values = Vec::new();
            for pattern in ARBITRARY_PATTERNS.iter() {
                for caps in pattern.regex.captures_iter(line) {
                    let (Some(token), Some(value)) = (caps.name("token"), caps.name("value")) else {
                        continue;
                    };
                    if !is_token_boundary(line, token.start(), token.end()) {
                        continue;
                    }
                    if !pattern.accepts(value.as_str()) {
                        continue;
                    }
                    if !seen.insert((token.start(), token.as_str())) {
                        continue;
                    }
                    tracing::trace!(pattern = pattern.name, class = token.as_str(), "arbitrary value");
                    line_values.push((
                        token.start(),
                        ArbitraryValue {
                            category: pattern.category,
                            value: value.as_str().to_string(),
                            class_name: token.as_str().to_string(),
                            file: file.to_string(),
                            line: idx as u32 + 1,
                            column: line[..token.start()].chars().count() as u32 + 1,
                        },
                    ));
                }
            }
            line_values.sort_by_key(|(start, _)| *start);
            values.extend(line_values.into_iter().map(|(_, v)| v));
        }
        values
    }

    /// One signal per (file, category), ordered by file then category.
    pub fn to_signals(&self, values: &[ArbitraryValue]) -> Vec<DriftSignal> {
        let mut groups: BTreeMap<(&str, ArbitraryCategory), Vec<&ArbitraryValue>> = BTreeMap::new();
        for value in values {
            groups.entry((value.file.as_str(), value.category)).or_default().push(value);
        }
        groups
            .into_iter()
            .map(|((file, category), group)| build_signal(file, category, &group))
            .collect()
    }
}

const LEADING: &[char] = &['"', '\'', '`', '{', '(', ',', '>'];
const TRAILING: &[char] = &['"', '\'', '`', '}', ')', ',', '<', ';'];

/// The match must be a whole class token.
fn is_token_boundary(line: &str, start: usize, end: usize) -> bool {
    let before = line[..start].chars().next_back();
    let after = line[end..].chars().next();
    let ok_before = before.map_or(true, |c| c.is_whitespace() || LEADING.contains(&c));
    let ok_after = after.map_or(true, |c| c.is_whitespace() || TRAILING.contains(&c));
    ok_before && ok_after
}

fn build_signal(file: &str, category: ArbitraryCategory, group: &[&ArbitraryValue]) -> DriftSignal {
    let first = group[0];
    let severity = match category {
        ArbitraryCategory::Color => Severity::Warning,
        _ => Severity::Info,
    };
    let source = SignalSource {
        entity_type: "arbitrary-value".to_string(),
        entity_id: format!("{file}#{}", category.as_str()),
        entity_name: format!("{} arbitrary values in {file}", category.as_str()),
        location: SignalLocation {
            file: file.to_string(),
            line: first.line,
            column: first.column,
        },
    };
    let details = SignalDetails {
        expected: expected_for(category).to_string(),
        actual_count: group.len(),
        affected_files: vec![file.to_string()],
        suggestions: suggestions_for(category, first),
        examples: group
            .iter()
            .take(MAX_EXAMPLES)
            .map(|v| SignalExample {
                text: v.class_name.clone(),
                line: v.line,
                column: v.column,
            })
            .collect(),
    };
    let message = format!(
        "{} arbitrary {} value(s) in {file}",
        group.len(),
        category.as_str()
    );
    DriftSignal::new(DriftType::HardcodedValue, severity, source, message, details)
}

fn expected_for(category: ArbitraryCategory) -> &'static str {
    match category {
        ArbitraryCategory::Color => "Colors come from theme tokens",
        ArbitraryCategory::Spacing => "Spacing comes from the spacing scale",
        ArbitraryCategory::Size => "Sizes come from the size and type scales",
        ArbitraryCategory::Timing => "Durations and easing come from motion tokens",
        ArbitraryCategory::Grid => "Grid templates use named utilities or layout components",
        ArbitraryCategory::CssProperty => "Properties are set through utilities or component styles",
        ArbitraryCategory::Other => "Values come from design tokens",
    }
}

/// Replace the bracketed part of `class` with a scale step.
fn with_scale_step(class: &str, step: &str) -> String {
    match class.rfind("-[") {
        Some(idx) => format!("{}-{step}", &class[..idx]),
        None => class.to_string(),
    }
}

fn suggestions_for(category: ArbitraryCategory, example: &ArbitraryValue) -> Vec<String> {
    let class = example.class_name.as_str();
    let value = example.value.replace('_', " ");
    match category {
        ArbitraryCategory::Color => vec![
            format!("Use a theme color: `{}` instead of `{class}`", with_scale_step(class, "primary")),
            format!("If the color is new, define it once (`--color-brand: {value};`) and use `{}`", with_scale_step(class, "brand")),
        ],
        ArbitraryCategory::Spacing => vec![
            format!("Use the spacing scale: `{}` instead of `{class}`", with_scale_step(class, "4")),
            format!("Add a spacing token for `{value}` if the scale has no close step"),
        ],
        ArbitraryCategory::Size => vec![
            format!("Use a size utility: `{}` instead of `{class}`", with_scale_step(class, "lg")),
            format!("Add `{value}` to the theme if it is a recurring size"),
        ],
        ArbitraryCategory::Timing => vec![
            format!("Use a motion utility: `{}` instead of `{class}`", with_scale_step(class, "300")),
        ],
        ArbitraryCategory::Grid => vec![
            format!("Use a named grid utility: `{}` instead of `{class}`", with_scale_step(class, "3")),
            "Extract complex templates into a layout component".to_string(),
        ],
        ArbitraryCategory::CssProperty => vec![
            format!("Replace `{class}` with a utility class or a component stylesheet rule for `{value}`"),
        ],
        ArbitraryCategory::Other => vec![
            format!("Replace `{class}` with a token-backed utility"),
        ],
    }
}
