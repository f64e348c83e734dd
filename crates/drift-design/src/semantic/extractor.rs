//! Semantic usage extraction and cross-file accumulation

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use super::predicates::is_semantic_name;
use super::types::{SemanticToken, SemanticUsage, MAX_SEMANTIC_EXAMPLES};
use crate::classes::{class_tokens, FileClasses};
use crate::tokens::{tags, DesignToken, TokenCategory, TokenSource, TokenSourceKind, TokenValue};

/// Property prefixes, longest first, with the category each implies.
const PREFIX_CATEGORIES: &[(&str, TokenCategory)] = &[
    ("ring-offset", TokenCategory::Color),
    ("placeholder", TokenCategory::Color),
    ("decoration", TokenCategory::Color),
    ("outline", TokenCategory::Color),
    ("border-t", TokenCategory::Color),
    ("border-r", TokenCategory::Color),
    ("border-b", TokenCategory::Color),
    ("border-l", TokenCategory::Color),
    ("border-x", TokenCategory::Color),
    ("border-y", TokenCategory::Color),
    ("border-s", TokenCategory::Color),
    ("border-e", TokenCategory::Color),
    ("border", TokenCategory::Color),
    ("divide", TokenCategory::Color),
    ("accent", TokenCategory::Color),
    ("stroke", TokenCategory::Color),
    ("caret", TokenCategory::Color),
    ("ring", TokenCategory::Color),
    ("fill", TokenCategory::Color),
    ("from", TokenCategory::Color),
    ("text", TokenCategory::Color),
    ("via", TokenCategory::Color),
    ("bg", TokenCategory::Color),
    ("to", TokenCategory::Color),
    ("rounded", TokenCategory::Border),
    ("shadow", TokenCategory::Shadow),
    ("font", TokenCategory::Typography),
    ("gap", TokenCategory::Spacing),
    ("px", TokenCategory::Spacing),
    ("py", TokenCategory::Spacing),
    ("mx", TokenCategory::Spacing),
    ("my", TokenCategory::Spacing),
    ("p", TokenCategory::Spacing),
    ("m", TokenCategory::Spacing),
];

static SEMANTIC_CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    let prefixes: Vec<&str> = PREFIX_CATEGORIES.iter().map(|(p, _)| *p).collect();
    Regex::new(&format!(
        r"^(?:[\w@\[\]&=.-]+:)*!?(?P<prefix>{})-(?P<name>[a-z][a-z0-9-]*)(?:/\d{{1,3}})?$",
        prefixes.join("|")
    ))
    .unwrap()
});

fn category_for(prefix: &str) -> TokenCategory {
    PREFIX_CATEGORIES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, c)| *c)
        .unwrap_or(TokenCategory::Other)
}

/// Semantic reference in one class token, if any.
pub fn semantic_usage(class_name: &str) -> Option<SemanticUsage> {
    let caps = SEMANTIC_CLASS_RE.captures(class_name)?;
    let name = caps.name("name")?.as_str();
    if !is_semantic_name(name) {
        return None;
    }
    Some(SemanticUsage {
        name: name.to_string(),
        category: category_for(caps.name("prefix")?.as_str()),
        class_name: class_name.to_string(),
    })
}

/// Semantic references in every class string of a file, in source order.
pub fn extract_semantic_usages(classes: &FileClasses) -> Vec<SemanticUsage> {
    classes
        .class_strings
        .iter()
        .flat_map(|c| class_tokens(&c.text).filter_map(semantic_usage).collect::<Vec<_>>())
        .collect()
}

/// Per-scan accumulator of semantic tokens.
#[derive(Debug, Default)]
pub struct SemanticIndex {
    tokens: FxHashMap<String, SemanticToken>,
}

impl SemanticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's usages into the index.
    pub fn add_file(&mut self, file: &str, usages: Vec<SemanticUsage>) {
        for usage in usages {
            let token = self.tokens.entry(usage.name.clone()).or_insert_with(|| SemanticToken {
                name: usage.name.clone(),
                category: usage.category,
                usage_count: 0,
                files: Vec::new(),
                examples: Vec::new(),
            });
            token.usage_count += 1;
            if !token.files.iter().any(|f| f == file) {
                token.files.push(file.to_string());
            }
            if token.examples.len() < MAX_SEMANTIC_EXAMPLES && !token.examples.contains(&usage.class_name) {
                token.examples.push(usage.class_name);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens by descending usage, then name.
    pub fn finish(self) -> Vec<SemanticToken> {
        let mut tokens: Vec<SemanticToken> = self.tokens.into_values().collect();
        tokens.sort_by(|a, b| b.usage_count.cmp(&a.usage_count).then_with(|| a.name.cmp(&b.name)));
        tokens
    }
}

impl SemanticToken {
    /// Design token view for aggregation; sourced from the first file of use.
    pub fn to_design_token(&self) -> DesignToken {
        let source = TokenSource {
            kind: TokenSourceKind::Usage,
            path: self.files.first().cloned().unwrap_or_default(),
        };
        DesignToken::new(
            self.name.clone(),
            self.category,
            TokenValue::raw(format!("var(--{})", self.name)),
            source,
        )
        .with_tag(tags::INFERRED)
    }
}
