//! Duplicated class list detection

use std::collections::{BTreeMap, BTreeSet};

use super::types::DuplicatedClassPattern;
use crate::classes::{class_tokens, FileClasses};

/// Class lists shorter than this are too common to be interesting.
pub const MIN_DUPLICATE_TOKENS: usize = 3;

/// Sorted token multiset of a class string, or `None` when too short.
pub fn normalize_class_list(text: &str) -> Option<String> {
    let mut tokens: Vec<&str> = class_tokens(text).collect();
    if tokens.len() < MIN_DUPLICATE_TOKENS {
        return None;
    }
    tokens.sort_unstable();
    Some(tokens.join(" "))
}

/// Normalized class lists that occur in at least two files.
pub fn find_duplicates(files: &[FileClasses]) -> Vec<DuplicatedClassPattern> {
    let mut groups: BTreeMap<String, (BTreeSet<&str>, usize)> = BTreeMap::new();
    for file in files {
        for class_string in &file.class_strings {
            let Some(normalized) = normalize_class_list(&class_string.text) else {
                continue;
            };
            let (seen_in, count) = groups.entry(normalized).or_default();
            seen_in.insert(file.file.as_str());
            *count += 1;
        }
    }

    let mut duplicates: Vec<DuplicatedClassPattern> = groups
        .into_iter()
        .filter(|(_, (seen_in, _))| seen_in.len() >= 2)
        .map(|(classes, (seen_in, occurrences))| DuplicatedClassPattern {
            classes,
            files: seen_in.into_iter().map(str::to_string).collect(),
            occurrences,
        })
        .collect();
    // BTreeMap iteration already orders ties by class list.
    duplicates.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::extract_file_classes;

    #[test]
    fn test_normalize_sorts_and_filters() {
        assert_eq!(normalize_class_list("px-4 flex  gap-2").as_deref(), Some("flex gap-2 px-4"));
        assert_eq!(normalize_class_list("flex gap-2"), None);
    }

    #[test]
    fn test_duplicates_need_two_files() {
        let files = vec![
            extract_file_classes("a.tsx", r#"<a className="flex items-center gap-2" /><b className="gap-2 flex items-center" />"#),
            extract_file_classes("b.tsx", r#"<c className="items-center flex gap-2" /><d className="p-4 m-2 block" /><e className="p-4 m-2 block" />"#),
            extract_file_classes("c.tsx", r#"<f className="rounded border p-2" />"#),
        ];
        let dups = find_duplicates(&files);
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].classes, "flex gap-2 items-center");
        assert_eq!(dups[0].occurrences, 3);
        assert_eq!(dups[0].files, vec!["a.tsx", "b.tsx"]);
    }
}
