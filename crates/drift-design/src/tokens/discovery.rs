//! Candidate discovery and scoring for CSS-native configuration.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ResolveError;
use crate::scanner::{SourceFile, SourceKind};

/// Conventional entry stylesheets, checked before the broader search.
pub const PRIORITY_PATHS: &[&str] = &[
    "src/app/globals.css",
    "app/globals.css",
    "src/globals.css",
    "styles/globals.css",
    "src/styles/globals.css",
    "src/index.css",
    "src/app.css",
    "app/app.css",
    "src/styles/tailwind.css",
    "styles/tailwind.css",
    "src/main.css",
    "src/style.css",
    "assets/css/main.css",
];

static THEME_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@theme\b[^{;]*\{").unwrap());
static FRAMEWORK_IMPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"@import\s+["']tailwindcss|@tailwind\s+\w+"#).unwrap());
static ROOT_VARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[\s,}])(?::root|html|:host)\s*\{[^}]*--[\w-]+\s*:").unwrap());

const DIR_HINTS: &[&str] = &["styles", "app", "src"];
const NAME_HINTS: &[&str] = &["global", "theme", "tokens", "variables"];

/// A stylesheet candidate and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub relative: String,
    pub score: u32,
}

/// Score a stylesheet's likelihood of being the design-token entry point.
///
/// A file with neither a theme block, a framework import, nor a root
/// variable block scores zero regardless of its name or location.
pub fn score_candidate(relative: &str, content: &str) -> u32 {
    let has_theme = THEME_BLOCK_RE.is_match(content);
    let has_import = FRAMEWORK_IMPORT_RE.is_match(content);
    let has_root_vars = ROOT_VARS_RE.is_match(content);
    if !(has_theme || has_import || has_root_vars) {
        return 0;
    }

    let mut score = 0;
    if has_theme {
        score += 40;
    }
    if has_import {
        score += 20;
    }
    if has_root_vars {
        score += 30;
    }
    score += (content.len() / 1000).min(10) as u32;

    let path = Path::new(relative);
    if path
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .any(|c| DIR_HINTS.contains(&c.as_os_str().to_string_lossy().as_ref()))
    {
        score += 5;
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if NAME_HINTS.iter().any(|hint| file_name.contains(hint)) {
        score += 10;
    }
    if PRIORITY_PATHS.contains(&relative) {
        score += 25;
    }
    score
}

/// Candidate paths in lookup order: priority paths that exist, then every
/// other discovered stylesheet.
pub fn candidate_paths(root: &Path, files: &[SourceFile]) -> Vec<String> {
    let mut paths: Vec<String> = PRIORITY_PATHS
        .iter()
        .filter(|p| root.join(p).is_file())
        .map(|p| p.to_string())
        .collect();
    for file in files {
        if file.kind() == SourceKind::Stylesheet && !paths.contains(&file.relative) {
            paths.push(file.relative.clone());
        }
    }
    paths
}

/// Read a configuration file, refusing anything larger than `limit` bytes.
pub(crate) fn read_capped(path: &Path, limit: u64) -> Result<String, ResolveError> {
    let unreadable = |source| ResolveError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(unreadable)?.len();
    if size > limit {
        return Err(ResolveError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }
    std::fs::read_to_string(path).map_err(unreadable)
}

/// Read and score every candidate, dropping unreadable, oversized and
/// zero-scored files. Sorted by score descending, then path ascending.
pub fn rank_candidates(root: &Path, files: &[SourceFile], max_file_size: u64) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = candidate_paths(root, files)
        .into_iter()
        .filter_map(|relative| {
            let content = match read_capped(&root.join(&relative), max_file_size) {
                Ok(c) => c,
                Err(e) => {
                    tracing::debug!(path = %relative, error = %e, "skipping stylesheet candidate");
                    return None;
                }
            };
            let score = score_candidate(&relative, &content);
            (score > 0).then_some(Candidate { relative, score })
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.relative.cmp(&b.relative)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_markers_drive_score() {
        assert_eq!(score_candidate("src/app/globals.css", "body { margin: 0 }"), 0);
        let theme = score_candidate("src/components/x.css", "@theme { --color-a: red; }");
        let root = score_candidate("src/components/x.css", ":root { --a: red; }");
        assert!(theme > root);
        let both = score_candidate(
            "src/app/globals.css",
            "@import \"tailwindcss\";\n@theme inline { --color-a: red; }\n:root { --a: red; }",
        );
        assert_eq!(both, 40 + 20 + 30 + 5 + 10 + 25);
    }

    #[test]
    fn test_rank_prefers_priority_paths_and_breaks_ties_by_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let write = |rel: &str, content: &str| {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
            SourceFile {
                relative: rel.to_string(),
                path,
                size: content.len() as u64,
            }
        };
        let files = vec![
            write("lib/b.css", ":root { --a: 1px; }"),
            write("lib/a.css", ":root { --a: 1px; }"),
            write("lib/plain.css", "a { color: red }"),
            write("src/index.css", ":root { --a: 1px; }"),
        ];
        let ranked = rank_candidates(dir.path(), &files, 1024 * 1024);
        let order: Vec<&str> = ranked.iter().map(|c| c.relative.as_str()).collect();
        assert_eq!(order, vec!["src/index.css", "lib/a.css", "lib/b.css"]);
    }

    #[test]
    fn test_oversized_candidates_are_dropped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("src/index.css");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let content = format!(":root {{ --a: 1px; }}\n/*{}*/", "x".repeat(256));
        fs::write(&path, &content).unwrap();
        let files = vec![SourceFile {
            relative: "src/index.css".to_string(),
            path: path.clone(),
            size: content.len() as u64,
        }];

        assert!(rank_candidates(dir.path(), &files, 64).is_empty());
        assert_eq!(rank_candidates(dir.path(), &files, 4096).len(), 1);
        assert!(matches!(read_capped(&path, 64), Err(ResolveError::TooLarge { limit: 64, .. })));
    }
}
