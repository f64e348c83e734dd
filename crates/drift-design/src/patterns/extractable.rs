//! Recurring class idioms that could become a shared utility or component

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{ExtractablePattern, PatternCategory};
use crate::classes::FileClasses;

/// Occurrences required before an idiom is worth extracting.
pub const MIN_EXTRACTABLE_OCCURRENCES: usize = 2;

struct IdiomPattern {
    name: &'static str,
    regex: Regex,
    category: PatternCategory,
}

impl IdiomPattern {
    fn new(name: &'static str, pattern: &str, category: PatternCategory) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
            category,
        }
    }
}

static IDIOM_PATTERNS: Lazy<Vec<IdiomPattern>> = Lazy::new(|| {
    vec![
        IdiomPattern::new(
            "focus-run",
            r"(?:^|\s)(?P<run>focus(?:-visible|-within)?:\S+(?:\s+focus(?:-visible|-within)?:\S+)+)",
            PatternCategory::Focus,
        ),
        IdiomPattern::new(
            "ring-pair",
            r"(?:^|\s)(?P<run>ring(?:-\d+|-\[[^\]\s]+\])?\s+ring-[a-z][\w-]*(?:/\d+)?)(?:\s|$)",
            PatternCategory::Focus,
        ),
        IdiomPattern::new(
            "flex-center",
            r"(?:^|\s)(?P<run>(?:inline-)?flex\s+items-center\s+justify-center)(?:\s|$)",
            PatternCategory::Layout,
        ),
        IdiomPattern::new(
            "hover-run",
            r"(?:^|\s)(?P<run>hover:\S+(?:\s+hover:\S+)+)",
            PatternCategory::Interactive,
        ),
    ]
});

/// Keyword tests for a suggested name, first match wins.
const NAME_KEYWORDS: &[(&[&str], &str)] = &[
    (&["focus", "ring"], "focus-ring"),
    (&["focus"], "focus-state"),
    (&["items-center", "justify-center"], "flex-center"),
    (&["hover:bg-"], "hover-background"),
    (&["hover:text-"], "hover-text"),
    (&["hover:"], "hover-state"),
    (&["ring"], "ring"),
    (&["text-", "font-"], "text-style"),
];

pub fn suggest_name(pattern: &str) -> &'static str {
    NAME_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().all(|k| pattern.contains(k)))
        .map(|(_, name)| *name)
        .unwrap_or("class-pattern")
}

/// Category from the idiom, refined to typography when every class is textual.
fn categorize(pattern: &str, idiom: PatternCategory) -> PatternCategory {
    let textual = pattern.split_whitespace().all(|class| {
        let base = class.rsplit(':').next().unwrap_or(class);
        ["text-", "font-", "leading-", "tracking-", "underline"]
            .iter()
            .any(|p| base.starts_with(p))
    });
    if textual {
        PatternCategory::Typography
    } else {
        idiom
    }
}

/// Idiom runs recurring at least twice across all files.
pub fn find_extractable(files: &[FileClasses]) -> Vec<ExtractablePattern> {
    let mut groups: BTreeMap<String, (PatternCategory, BTreeSet<&str>, usize)> = BTreeMap::new();
    for file in files {
        let joined = file
            .class_strings
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        for idiom in IDIOM_PATTERNS.iter() {
            for caps in idiom.regex.captures_iter(&joined) {
                let Some(run) = caps.name("run") else { continue };
                let normalized = run.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
                if normalized.split(' ').count() < 2 {
                    continue;
                }
                tracing::trace!(idiom = idiom.name, run = %normalized, file = %file.file, "idiom match");
                let (_, seen_in, count) = groups
                    .entry(normalized)
                    .or_insert_with(|| (idiom.category, BTreeSet::new(), 0));
                seen_in.insert(file.file.as_str());
                *count += 1;
            }
        }
    }

    let mut found: Vec<ExtractablePattern> = groups
        .into_iter()
        .filter(|(_, (_, _, count))| *count >= MIN_EXTRACTABLE_OCCURRENCES)
        .map(|(pattern, (category, seen_in, occurrences))| ExtractablePattern {
            suggested_name: suggest_name(&pattern).to_string(),
            category: categorize(&pattern, category),
            files: seen_in.into_iter().map(str::to_string).collect(),
            occurrences,
            pattern,
        })
        .collect();
    found.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::extract_file_classes;

    #[test]
    fn test_suggest_name() {
        assert_eq!(suggest_name("focus-visible:outline-none focus-visible:ring-2"), "focus-ring");
        assert_eq!(suggest_name("flex items-center justify-center"), "flex-center");
        assert_eq!(suggest_name("hover:bg-accent hover:text-accent-foreground"), "hover-background");
        assert_eq!(suggest_name("ring-2 ring-primary"), "ring");
    }

    #[test]
    fn test_recurring_idioms() {
        let a = r#"<button className="inline-flex items-center justify-center focus-visible:outline-none focus-visible:ring-2 ring-2 ring-primary" />"#;
        let b = r#"<a className="flex items-center justify-center gap-2" /><i className="focus-visible:outline-none focus-visible:ring-2" />"#;
        let files = vec![extract_file_classes("a.tsx", a), extract_file_classes("b.tsx", b)];
        let found = find_extractable(&files);

        let focus = found
            .iter()
            .find(|p| p.pattern == "focus-visible:outline-none focus-visible:ring-2")
            .unwrap();
        assert_eq!(focus.occurrences, 2);
        assert_eq!(focus.category, PatternCategory::Focus);
        assert_eq!(focus.suggested_name, "focus-ring");
        assert_eq!(focus.files, vec!["a.tsx", "b.tsx"]);

        // Distinct idiom texts are counted separately.
        assert!(found.iter().all(|p| p.pattern != "inline-flex items-center justify-center"));
        assert!(found.iter().all(|p| p.pattern != "ring-2 ring-primary"));
    }

    #[test]
    fn test_single_occurrence_not_reported() {
        let files = vec![extract_file_classes("a.tsx", r#"<b className="hover:bg-muted hover:underline" />"#)];
        assert!(find_extractable(&files).is_empty());
    }
}
