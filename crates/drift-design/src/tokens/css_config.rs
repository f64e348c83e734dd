//! Generation B: CSS-native configuration.
//!
//! Walks a stylesheet rule by rule with balanced-brace scanning, so variables
//! nested in `@layer base { :root { ... } }` or `@media (...) { ... }` are
//! bounded correctly at any depth.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use super::category::infer_category;
use super::types::{tags, DesignToken, TokenSource, TokenSourceKind};
use super::values::parse_token_value;
use crate::errors::ResolveError;
use crate::text::{blank_comments, find_matching, split_top_level};

static DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[;{\s])--([A-Za-z0-9_-]+)\s*:\s*([^;]+)").unwrap()
});

static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"@import\s+(?:url\(\s*["']?([^"')\s]+)["']?\s*\)|["']([^"']+)["'])"#).unwrap()
});

static VAR_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"var\(\s*--([A-Za-z0-9_-]+)").unwrap());

/// Theme namespaces whose unprefixed name is recorded as an alias.
const THEME_NAMESPACES: &[&str] = &["color-", "spacing-", "radius-", "font-", "text-", "shadow-"];

/// Variant names accepted on a bare class selector like `.dark`.
const KNOWN_VARIANTS: &[&str] = &["dark", "light", "dim", "contrast", "high-contrast", "dark-mode", "light-mode"];

/// Selector shapes that scope an alternate theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantShape {
    /// `.dark`, `html.dark`
    ClassBased,
    /// `[data-theme="dark"]`
    AttributeBased,
    /// `:root.dark`, `.dark:root`
    Compound,
    /// `.theme-dark`, `:is(.dark *)`, `:where(.dark)`
    Namespaced,
}

static VARIANT_SELECTORS: Lazy<Vec<(VariantShape, Regex)>> = Lazy::new(|| {
    [
        (
            VariantShape::AttributeBased,
            r#"^(?:html|body|:root)?\[data-(?:theme|mode|color-scheme|color-mode|appearance)\s*=\s*["']?([\w-]+)["']?\s*\]$"#,
        ),
        (VariantShape::Compound, r"^(?::root|html|body)\.([\w-]+)$"),
        (VariantShape::Compound, r"^\.([\w-]+):root$"),
        (VariantShape::Namespaced, r"^(?:html|body|:root)?\.theme-([\w-]+)$"),
        (VariantShape::Namespaced, r"^:(?:is|where)\(\s*\.([\w-]+)(?:\s*\*)?\s*(?:,[^)]*)?\)$"),
        (VariantShape::ClassBased, r"^(?:html|body)?\.([\w-]+)$"),
    ]
    .into_iter()
    .map(|(shape, pattern)| (shape, Regex::new(pattern).unwrap()))
    .collect()
});

/// Utility-class prefixes; class selectors starting with these are not token scopes.
const UTILITY_PREFIXES: &[&str] = &[
    "bg-", "text-", "font-", "p-", "px-", "py-", "pt-", "pr-", "pb-", "pl-", "m-", "mx-", "my-",
    "mt-", "mr-", "mb-", "ml-", "w-", "h-", "min-", "max-", "gap-", "space-", "border", "rounded",
    "shadow", "ring", "outline", "leading-", "tracking-", "opacity-", "z-", "inset-", "top-",
    "left-", "right-", "bottom-", "grid", "flex", "col-", "row-", "items-", "justify-", "self-",
    "order-", "fill-", "stroke-", "transition", "duration-", "ease-", "animate-", "cursor-",
];

const UTILITY_EXACT: &[&str] = &[
    "hidden", "block", "inline", "inline-block", "contents", "absolute", "relative", "fixed",
    "sticky", "static", "container", "truncate", "sr-only", "underline", "italic",
];

/// What a selector list scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorKind {
    Root,
    Variant(String),
    Scoped(String),
    Other,
}

/// Tokens and links found in one stylesheet.
#[derive(Debug, Default)]
pub struct CssExtraction {
    /// Defined tokens ordered theme, root, variants, layers, class scopes
    pub defined: Vec<DesignToken>,
    /// `@import` targets in source order
    pub imports: Vec<String>,
    /// Referenced variable names in order of first appearance
    pub references: Vec<String>,
}

#[derive(Default)]
struct Buckets {
    theme: Vec<DesignToken>,
    root: Vec<DesignToken>,
    variants: Vec<DesignToken>,
    layers: Vec<DesignToken>,
    classes: Vec<DesignToken>,
}

#[derive(Debug, Clone, Default)]
struct RuleContext {
    layer: Option<String>,
    variant: Option<String>,
}

/// Extract tokens, imports, and references from one stylesheet.
pub fn extract_css_tokens(
    content: &str,
    relative: &str,
    path: &Path,
) -> Result<CssExtraction, ResolveError> {
    let text = blank_comments(content);
    let source = TokenSource {
        kind: TokenSourceKind::Css,
        path: relative.to_string(),
    };

    let mut buckets = Buckets::default();
    walk_rules(&text, &RuleContext::default(), &source, &mut buckets).map_err(|reason| {
        ResolveError::Malformed {
            path: path.to_path_buf(),
            reason,
        }
    })?;

    let imports = IMPORT_RE
        .captures_iter(&text)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
        .collect();

    let mut seen = FxHashSet::default();
    let references = VAR_REF_RE
        .captures_iter(&text)
        .map(|c| c[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect();

    let mut defined = buckets.theme;
    defined.extend(buckets.root);
    defined.extend(buckets.variants);
    defined.extend(buckets.layers);
    defined.extend(buckets.classes);

    Ok(CssExtraction {
        defined,
        imports,
        references,
    })
}

fn walk_rules(
    text: &str,
    ctx: &RuleContext,
    source: &TokenSource,
    buckets: &mut Buckets,
) -> Result<(), String> {
    let mut cursor = 0;
    while let Some(rel) = text[cursor..].find('{') {
        let open = cursor + rel;
        let close = find_matching(text, open)
            .ok_or_else(|| format!("unbalanced block at byte {open}"))?;
        let region = &text[cursor..open];
        let prelude = region.rsplit([';', '}']).next().unwrap_or("").trim();
        let body = &text[open + 1..close];
        handle_rule(prelude, body, ctx, source, buckets)?;
        cursor = close + 1;
    }
    Ok(())
}

fn handle_rule(
    prelude: &str,
    body: &str,
    ctx: &RuleContext,
    source: &TokenSource,
    buckets: &mut Buckets,
) -> Result<(), String> {
    let lower = prelude.to_ascii_lowercase();

    if lower.starts_with("@theme") {
        for (name, value) in declarations(body) {
            let mut token = css_token(&name, &name, &value, source).with_tag(tags::THEME);
            if let Some(alias) = THEME_NAMESPACES
                .iter()
                .find_map(|ns| name.strip_prefix(ns))
                .filter(|rest| !rest.is_empty())
            {
                token = token.with_alias(alias);
            }
            buckets.theme.push(token);
        }
        return Ok(());
    }
    if let Some(layer) = lower.strip_prefix("@layer") {
        let inner = RuleContext {
            layer: Some(layer.trim().to_string()),
            variant: ctx.variant.clone(),
        };
        return walk_rules(body, &inner, source, buckets);
    }
    if lower.starts_with("@media") {
        let inner = if lower.contains("prefers-color-scheme") && lower.contains("dark") {
            RuleContext {
                layer: ctx.layer.clone(),
                variant: Some("dark".to_string()),
            }
        } else {
            ctx.clone()
        };
        return walk_rules(body, &inner, source, buckets);
    }
    if ["@supports", "@container", "@scope"].iter().any(|p| lower.starts_with(p)) {
        return walk_rules(body, ctx, source, buckets);
    }
    if lower.starts_with('@') {
        return Ok(());
    }

    let kind = classify_selector(prelude);
    let variant = match (&kind, &ctx.variant) {
        (SelectorKind::Variant(v), _) => Some(v.clone()),
        (SelectorKind::Root, Some(v)) => Some(v.clone()),
        _ => None,
    };

    if let Some(variant) = variant {
        for (name, value) in declarations(body) {
            let token = css_token(&format!("{name}-{variant}"), &name, &value, source)
                .with_tag(tags::VARIANT)
                .with_tag(variant.as_str());
            let token = match &ctx.layer {
                Some(layer) => token.with_tag(tags::layer(layer)),
                None => token,
            };
            buckets.variants.push(token);
        }
        return Ok(());
    }
    if ctx.variant.is_some() {
        return Ok(());
    }

    let scope_tag = match &kind {
        SelectorKind::Root => Some(tags::ROOT.to_string()),
        SelectorKind::Scoped(sel) => Some(tags::scope(sel)),
        _ if ctx.layer.is_some() => Some(tags::scope(prelude)),
        _ => None,
    };
    let Some(scope_tag) = scope_tag else {
        return Ok(());
    };

    for (name, value) in declarations(body) {
        let token = css_token(&name, &name, &value, source).with_tag(scope_tag.clone());
        match (&ctx.layer, &kind) {
            (Some(layer), _) => buckets.layers.push(token.with_tag(tags::layer(layer))),
            (None, SelectorKind::Root) => buckets.root.push(token),
            (None, _) => buckets.classes.push(token),
        }
    }
    Ok(())
}

fn css_token(name: &str, base_name: &str, raw: &str, source: &TokenSource) -> DesignToken {
    let value = parse_token_value(raw);
    let category = infer_category(base_name, &value);
    DesignToken::new(name, category, value, source.clone()).with_tag(tags::CONFIG_V4)
}

/// Custom-property declarations at the top level of a rule body.
fn declarations(body: &str) -> Vec<(String, String)> {
    let flat = strip_nested_blocks(body);
    DECL_RE
        .captures_iter(&flat)
        .filter_map(|c| {
            let name = c[1].to_string();
            let value = c[2].trim().to_string();
            (!value.is_empty() && !name.starts_with("tw-")).then_some((name, value))
        })
        .collect()
}

/// Replace nested `{...}` blocks (and their preludes' braces) with spaces.
fn strip_nested_blocks(body: &str) -> String {
    let mut out = body.to_string();
    let mut cursor = 0;
    while let Some(rel) = body[cursor..].find('{') {
        let open = cursor + rel;
        let close = find_matching(body, open).unwrap_or(body.len() - 1);
        out.replace_range(open..=close, &" ".repeat(close - open + 1));
        // Keep the nested rule's prelude from leaking a declaration.
        let prelude_start = body[..open].rfind([';', '}']).map(|p| p + 1).unwrap_or(0);
        out.replace_range(prelude_start..open, &" ".repeat(open - prelude_start));
        cursor = close + 1;
    }
    out
}

pub fn is_root_selector(selector: &str) -> bool {
    matches!(selector.trim(), ":root" | "html" | ":host")
}

/// Alternate-theme name scoped by `selector`, if it is a variant selector.
pub fn variant_name(selector: &str) -> Option<String> {
    let selector = selector.trim();
    for (shape, re) in VARIANT_SELECTORS.iter() {
        let Some(caps) = re.captures(selector) else {
            continue;
        };
        let raw = caps.get(1)?.as_str().to_ascii_lowercase();
        if *shape == VariantShape::ClassBased && !KNOWN_VARIANTS.contains(&raw.as_str()) {
            return None;
        }
        let name = raw
            .trim_end_matches("-mode")
            .trim_end_matches("-theme")
            .trim_start_matches("theme-")
            .to_string();
        return (!name.is_empty()).then_some(name);
    }
    None
}

/// True for class names that look like utility classes.
pub fn is_utility_class(name: &str) -> bool {
    UTILITY_EXACT.contains(&name) || UTILITY_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// `.card`, `.btn-primary > svg`: class selectors that are not utilities.
pub fn is_scoped_class_selector(selector: &str) -> bool {
    let Some(rest) = selector.trim().strip_prefix('.') else {
        return false;
    };
    let name: String = rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    !name.is_empty() && !rest[name.len()..].starts_with('\\') && !is_utility_class(&name)
}

pub fn classify_selector(prelude: &str) -> SelectorKind {
    let parts: Vec<&str> = split_top_level(prelude, b',')
        .into_iter()
        .map(|(_, part)| part.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.iter().any(|p| is_root_selector(p)) {
        return SelectorKind::Root;
    }
    if let Some(variant) = parts.iter().find_map(|p| variant_name(p)) {
        return SelectorKind::Variant(variant);
    }
    match parts.first() {
        Some(first) if is_scoped_class_selector(first) => SelectorKind::Scoped(first.to_string()),
        _ => SelectorKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::types::{TokenCategory, TokenValue};

    fn extract(css: &str) -> CssExtraction {
        extract_css_tokens(css, "app/globals.css", Path::new("app/globals.css")).unwrap()
    }

    fn names(extraction: &CssExtraction) -> Vec<&str> {
        extraction.defined.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_root_and_dark_class() {
        let e = extract(":root { --primary: #0066cc; } .dark { --primary: oklch(0.9 0 0); }");
        assert_eq!(names(&e), vec!["primary", "primary-dark"]);
        assert_eq!(e.defined[0].value, TokenValue::Color { hex: "#0066cc".into() });
        assert_eq!(e.defined[0].category, TokenCategory::Color);
        assert!(e.defined[1].value.is_raw());
        assert!(e.defined[1].has_tag("dark"));
    }

    #[test]
    fn test_variant_selector_shapes() {
        assert_eq!(variant_name(".dark").as_deref(), Some("dark"));
        assert_eq!(variant_name("html.dark").as_deref(), Some("dark"));
        assert_eq!(variant_name("[data-theme=\"dark\"]").as_deref(), Some("dark"));
        assert_eq!(variant_name(":root[data-mode='dim']").as_deref(), Some("dim"));
        assert_eq!(variant_name(":root.dark").as_deref(), Some("dark"));
        assert_eq!(variant_name(".dark:root").as_deref(), Some("dark"));
        assert_eq!(variant_name(".theme-ocean").as_deref(), Some("ocean"));
        assert_eq!(variant_name(":where(.dark, .dark *)").as_deref(), Some("dark"));
        assert_eq!(variant_name(".dark-mode").as_deref(), Some("dark"));
        assert_eq!(variant_name(".card"), None);
    }

    #[test]
    fn test_theme_block_with_aliases_and_wildcards() {
        let e = extract("@import \"tailwindcss\";\n@theme inline {\n  --color-*: initial;\n  --color-brand: #ff6b6b;\n  --spacing: 0.25rem;\n  --radius-lg: calc(var(--radius) + 2px);\n}");
        assert_eq!(names(&e), vec!["color-brand", "spacing", "radius-lg"]);
        assert!(e.defined[0].aliases.contains("brand"));
        assert!(e.defined[2].value.is_raw());
        assert_eq!(e.defined[2].category, TokenCategory::Border);
        assert!(e.defined.iter().all(|t| t.has_tag(tags::THEME)));
    }

    #[test]
    fn test_layers_nest_selectors() {
        let css = "@layer base {\n  :root { --background: #fff; }\n  .dark { --background: #000; }\n  body { --scrollbar: 8px; }\n}\n@layer components { .card { --card-pad: 1rem; .title { --nested: 1px; } } }";
        let e = extract(css);
        assert_eq!(names(&e), vec!["background-dark", "background", "scrollbar", "card-pad"]);
        let background = e.defined.iter().find(|t| t.name == "background").unwrap();
        assert!(background.has_tag("layer:base"));
        assert!(background.has_tag(tags::ROOT));
        let dark = e.defined.iter().find(|t| t.name == "background-dark").unwrap();
        assert!(dark.has_tag("layer:base"));
    }

    #[test]
    fn test_prefers_color_scheme_media() {
        let e = extract(":root { --fg: #111; }\n@media (prefers-color-scheme: dark) { :root { --fg: #eee; } }");
        assert_eq!(names(&e), vec!["fg", "fg-dark"]);
    }

    #[test]
    fn test_selector_lists() {
        assert_eq!(classify_selector(":root, .light"), SelectorKind::Root);
        assert_eq!(
            classify_selector(":where(.dark, .dark *)"),
            SelectorKind::Variant("dark".to_string())
        );
        assert_eq!(classify_selector("a:hover"), SelectorKind::Other);
    }

    #[test]
    fn test_class_scopes_exclude_utilities() {
        let e = extract(".sidebar { --sidebar-width: 16rem; }\n.bg-primary { --tw-bg-opacity: 1; --x: 1; }\n.h-screen { --y: 1px; }");
        assert_eq!(names(&e), vec!["sidebar-width"]);
        assert!(e.defined[0].has_tag("scope:.sidebar"));
    }

    #[test]
    fn test_imports_and_references() {
        let e = extract("@import './tokens.css';\n@import url(\"/styles/base.css\");\n.a { color: var(--color-blue-500); margin: var(--spacing) var(--spacing); }");
        assert_eq!(e.imports, vec!["./tokens.css", "/styles/base.css"]);
        assert_eq!(e.references, vec!["color-blue-500", "spacing"]);
    }

    #[test]
    fn test_comments_are_ignored() {
        let e = extract("/* :root { --ghost: 1px; } */ :root { --real: 2px; /* { */ }");
        assert_eq!(names(&e), vec!["real"]);
    }

    #[test]
    fn test_unbalanced_is_malformed() {
        let err = extract_css_tokens(":root { --a: 1px;", "x.css", Path::new("x.css")).unwrap_err();
        assert!(matches!(err, ResolveError::Malformed { .. }));
    }
}
