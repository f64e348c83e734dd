//! Binding rules, one pattern + handler pair per syntax.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::dialect::StyleDialect;
use super::types::{placeholder, BindingKind};
use crate::text::{
    camel_to_kebab, find_matching, has_top_level_ternary, is_numeric_literal, parse_object,
    single_literal, split_top_level, strip_quotes_once, ObjectValue,
};

/// Attribute value in double or single quotes; occupies two capture groups.
const ATTR: &str = r#"(?:"([^"]*)"|'([^']*)')"#;

/// Property name: custom property or identifier.
const PROP: &str = r"(--[\w-]+|[A-Za-z][\w-]*)";

/// Unit suffixes accepted on property bindings.
const CSS_UNITS: &[&str] = &[
    "px", "em", "rem", "%", "vh", "vw", "vmin", "vmax", "dvh", "svh", "lvh", "dvw", "ch", "ex",
    "pt", "pc", "cm", "mm", "in", "s", "ms", "deg", "rad", "turn", "fr",
];

/// A span consumed by one rule and its normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleMatch {
    pub span: Range<usize>,
    pub css: String,
    pub kind: BindingKind,
}

impl RuleMatch {
    fn whole(caps: &Captures<'_>, css: String, kind: BindingKind) -> Option<Self> {
        let m = caps.get(0)?;
        Some(Self {
            span: m.start()..m.end(),
            css,
            kind,
        })
    }
}

type Handler = fn(&str, &Captures<'_>) -> Option<RuleMatch>;

pub(crate) struct StyleRule {
    pub name: &'static str,
    pub regex: Regex,
    pub handler: Handler,
}

fn rule(name: &'static str, pattern: &str, handler: Handler) -> StyleRule {
    StyleRule {
        name,
        regex: Regex::new(pattern).unwrap(),
        handler,
    }
}

fn plain_rule() -> StyleRule {
    rule("style-attribute", &format!(r"(?:^|[\s<])(style)\s*=\s*{ATTR}"), style_attribute)
}

static PLAIN_RULES: Lazy<Vec<StyleRule>> = Lazy::new(|| vec![plain_rule()]);

static ANGULAR_RULES: Lazy<Vec<StyleRule>> = Lazy::new(|| {
    vec![
        rule(
            "angular-unit-property",
            &format!(r"\[style\.{PROP}\.([A-Za-z%]+)\]\s*=\s*{ATTR}"),
            angular_unit_property,
        ),
        rule("angular-property", &format!(r"\[style\.{PROP}\]\s*=\s*{ATTR}"), angular_property),
        rule("angular-style-map", &format!(r"\[ngStyle\]\s*=\s*{ATTR}"), angular_style_map),
        rule("angular-style-object", &format!(r"\[style\]\s*=\s*{ATTR}"), style_object),
        rule(
            "host-binding",
            &format!(
                r#"@HostBinding\(\s*['"]style\.{PROP}(?:\.([A-Za-z%]+))?['"]\s*\)\s*(?:(?:public|private|protected|readonly|override|get|set)\s+)*([A-Za-z_$][\w$]*)"#
            ),
            host_binding,
        ),
        plain_rule(),
    ]
});

static VUE_RULES: Lazy<Vec<StyleRule>> = Lazy::new(|| {
    vec![
        rule("vue-style-binding", &format!(r"(?:\bv-bind)?:style\s*=\s*{ATTR}"), vue_binding),
        plain_rule(),
    ]
});

static JSX_RULES: Lazy<Vec<StyleRule>> = Lazy::new(|| {
    vec![rule("jsx-style", r"\bstyle\s*=\s*\{", jsx_style), plain_rule()]
});

/// Rules for a dialect, in priority order.
pub(crate) fn rules_for(dialect: StyleDialect) -> &'static [StyleRule] {
    match dialect {
        StyleDialect::Plain => PLAIN_RULES.as_slice(),
        StyleDialect::Angular => ANGULAR_RULES.as_slice(),
        StyleDialect::Vue => VUE_RULES.as_slice(),
        StyleDialect::Jsx => JSX_RULES.as_slice(),
    }
}

pub fn is_css_unit(unit: &str) -> bool {
    CSS_UNITS.contains(&unit)
}

/// Attribute value from whichever quote group matched.
fn attr<'t>(caps: &Captures<'t>, first: usize) -> &'t str {
    caps.get(first)
        .or_else(|| caps.get(first + 1))
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// `100` + `px` -> `100px`; `size` + `px` -> `size px`.
fn with_unit(prop: &str, value: &str, unit: &str) -> String {
    if is_numeric_literal(value) {
        format!("{prop}: {value}{unit}")
    } else {
        format!("{prop}: {value} {unit}")
    }
}

fn style_attribute(_text: &str, caps: &Captures<'_>) -> Option<RuleMatch> {
    let start = caps.get(1)?.start();
    let end = caps.get(0)?.end();
    let css = attr(caps, 2).trim().to_string();
    Some(RuleMatch {
        span: start..end,
        css,
        kind: BindingKind::Attribute,
    })
}

fn angular_unit_property(_text: &str, caps: &Captures<'_>) -> Option<RuleMatch> {
    let unit = caps.get(2)?.as_str();
    if !is_css_unit(unit) {
        return None;
    }
    let prop = camel_to_kebab(&caps[1]);
    let value = strip_quotes_once(attr(caps, 3).trim());
    RuleMatch::whole(caps, with_unit(&prop, value, unit), BindingKind::Property)
}

fn angular_property(_text: &str, caps: &Captures<'_>) -> Option<RuleMatch> {
    let prop = camel_to_kebab(&caps[1]);
    let value = strip_quotes_once(attr(caps, 2).trim());
    RuleMatch::whole(caps, format!("{prop}: {value}"), BindingKind::Property)
}

fn angular_style_map(_text: &str, caps: &Captures<'_>) -> Option<RuleMatch> {
    let expr = attr(caps, 1).trim();
    match enclosed(expr, '{', '}') {
        Some(body) => RuleMatch::whole(caps, flatten_object(body), BindingKind::StyleMap),
        None => RuleMatch::whole(caps, placeholder::STYLE_OBJECT.to_string(), BindingKind::StyleObject),
    }
}

fn style_object(_text: &str, caps: &Captures<'_>) -> Option<RuleMatch> {
    RuleMatch::whole(caps, placeholder::STYLE_OBJECT.to_string(), BindingKind::StyleObject)
}

fn host_binding(_text: &str, caps: &Captures<'_>) -> Option<RuleMatch> {
    let prop = camel_to_kebab(&caps[1]);
    let member = caps.get(3)?.as_str();
    let mut css = format!("{prop}: {}", placeholder::computed(member));
    if let Some(unit) = caps.get(2).map(|m| m.as_str()).filter(|u| is_css_unit(u)) {
        css.push(' ');
        css.push_str(unit);
    }
    RuleMatch::whole(caps, css, BindingKind::HostBinding)
}

fn vue_binding(_text: &str, caps: &Captures<'_>) -> Option<RuleMatch> {
    let (css, kind) = normalize_expression(attr(caps, 1));
    RuleMatch::whole(caps, css, kind)
}

fn jsx_style(text: &str, caps: &Captures<'_>) -> Option<RuleMatch> {
    let whole = caps.get(0)?;
    let open = whole.end() - 1;
    let close = find_matching(text, open)?;
    let expr = text[open + 1..close].trim();
    let (css, kind) = if let Some(body) = enclosed(expr, '{', '}') {
        (flatten_object(body), BindingKind::StyleMap)
    } else if has_top_level_ternary(expr) {
        (placeholder::TERNARY.to_string(), BindingKind::Ternary)
    } else {
        (placeholder::DYNAMIC.to_string(), BindingKind::Computed)
    };
    Some(RuleMatch {
        span: whole.start()..close + 1,
        css,
        kind,
    })
}

/// Normalize a bound style expression: object, array, literal, ternary, or computed.
pub(crate) fn normalize_expression(expr: &str) -> (String, BindingKind) {
    let expr = expr.trim();
    if let Some(body) = enclosed(expr, '{', '}') {
        return (flatten_object(body), BindingKind::StyleMap);
    }
    if let Some(body) = enclosed(expr, '[', ']') {
        let parts: Vec<String> = split_top_level(body, b',')
            .into_iter()
            .map(|(_, item)| item.trim())
            .filter(|item| !item.is_empty())
            .map(|item| normalize_expression(item).0)
            .filter(|css| !css.is_empty())
            .collect();
        return (parts.join("; "), BindingKind::Array);
    }
    if has_top_level_ternary(expr) {
        return (placeholder::TERNARY.to_string(), BindingKind::Ternary);
    }
    if let Some(literal) = single_literal(expr) {
        return (literal.trim().to_string(), BindingKind::Literal);
    }
    (placeholder::computed(expr), BindingKind::Computed)
}

/// `{ color: 'red', fontSize: size }` -> `color: red; font-size: [computed: size]`.
/// Keys with a unit suffix (`'width.px': 10`) get the unit appended.
pub(crate) fn flatten_object(body: &str) -> String {
    let declarations: Vec<String> = parse_object(body)
        .iter()
        .map(|entry| {
            let value = render_value(&entry.value);
            match entry.key.rsplit_once('.') {
                Some((prop, unit)) if is_css_unit(unit) => with_unit(&camel_to_kebab(prop), &value, unit),
                _ => format!("{}: {}", camel_to_kebab(&entry.key), value),
            }
        })
        .collect();
    if declarations.is_empty() {
        placeholder::STYLE_OBJECT.to_string()
    } else {
        declarations.join("; ")
    }
}

fn render_value(value: &ObjectValue<'_>) -> String {
    match value {
        ObjectValue::Str(s) => s.trim().to_string(),
        ObjectValue::Expr(e) if is_numeric_literal(e) => e.to_string(),
        ObjectValue::Expr(e) if has_top_level_ternary(e) => placeholder::TERNARY.to_string(),
        ObjectValue::Expr(e) => placeholder::computed(e),
        ObjectValue::Object { .. } => placeholder::STYLE_OBJECT.to_string(),
        ObjectValue::Array(a) => placeholder::computed(&format!("[{a}]")),
    }
}

/// Body of `expr` if it is exactly one balanced `open ... close` group.
fn enclosed(expr: &str, open: char, close: char) -> Option<&str> {
    if !expr.starts_with(open) || !expr.ends_with(close) {
        return None;
    }
    (find_matching(expr, 0)? == expr.len() - 1).then(|| &expr[1..expr.len() - 1])
}
