//! Style normalizer: runs a dialect's rule table over template text.

use std::ops::Range;
use std::path::Path;

use super::dialect::StyleDialect;
use super::rules::rules_for;
use super::types::{StyleContext, StyleDeclaration};
use crate::text::LineIndex;

/// Entry point for inline-style normalization.
pub struct StyleNormalizer;

impl StyleNormalizer {
    /// Declarations in `text` for an explicit dialect. Nothing is matched
    /// until the result is iterated.
    pub fn normalize(text: &str, dialect: StyleDialect) -> StyleDeclarations<'_> {
        StyleDeclarations { text, dialect }
    }

    /// Declarations in `text`, with the dialect picked from `path`.
    pub fn normalize_file<'a>(path: &Path, text: &'a str) -> StyleDeclarations<'a> {
        Self::normalize(text, StyleDialect::for_path(path, text))
    }
}

/// A restartable view over one text's inline-style declarations.
#[derive(Debug, Clone, Copy)]
pub struct StyleDeclarations<'a> {
    text: &'a str,
    dialect: StyleDialect,
}

impl<'a> StyleDeclarations<'a> {
    pub fn dialect(&self) -> StyleDialect {
        self.dialect
    }

    /// Declarations ordered by (line, column). Each call re-runs the rules.
    pub fn iter(&self) -> std::vec::IntoIter<StyleDeclaration> {
        collect_declarations(self.text, self.dialect).into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b StyleDeclarations<'a> {
    type Item = StyleDeclaration;
    type IntoIter = std::vec::IntoIter<StyleDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn collect_declarations(text: &str, dialect: StyleDialect) -> Vec<StyleDeclaration> {
    let lines = LineIndex::new(text);
    let mut consumed: Vec<Range<usize>> = Vec::new();
    let mut found: Vec<(usize, StyleDeclaration)> = Vec::new();

    for rule in rules_for(dialect) {
        for caps in rule.regex.captures_iter(text) {
            let Some(m) = (rule.handler)(text, &caps) else {
                continue;
            };
            if consumed.iter().any(|r| r.start < m.span.end && m.span.start < r.end) {
                tracing::trace!(rule = rule.name, offset = m.span.start, "span already consumed");
                continue;
            }
            let (line, column) = lines.position(m.span.start);
            found.push((
                m.span.start,
                StyleDeclaration {
                    css: m.css,
                    line,
                    column,
                    context: StyleContext::Inline,
                    kind: m.kind,
                },
            ));
            consumed.push(m.span);
        }
    }

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, decl)| decl).collect()
}
