//! Deterministic file walker using ignore + globset
//!
//! Discovery is a single-threaded walk; the returned list is sorted so
//! every downstream "first occurrence wins" policy is reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use super::ignores::IgnorePatterns;
use super::types::SourceFile;

/// Source discovery for one project root
pub struct FileScanner {
    root: PathBuf,
    ignores: IgnorePatterns,
    include_globs: GlobSet,
    exclude_globs: GlobSet,
}

impl FileScanner {
    /// Create a scanner; invalid globs are skipped with a warning.
    pub fn new(root: &Path, include: &[String], exclude: &[String]) -> Self {
        Self {
            root: root.to_path_buf(),
            ignores: IgnorePatterns::new(root, &[]),
            include_globs: build_globset(include),
            exclude_globs: build_globset(exclude),
        }
    }

    /// Walk the root and return matching files sorted by relative path
    pub fn discover(&self) -> Vec<SourceFile> {
        let mut files = Vec::new();
        self.walk_dir(&self.root, &mut files);
        files.sort();
        tracing::debug!(root = %self.root.display(), files = files.len(), "discovered sources");
        files
    }

    fn walk_dir(&self, dir: &Path, files: &mut Vec<SourceFile>) {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path).to_path_buf();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                if !self.ignores.is_ignored(&relative, true) {
                    self.walk_dir(&path, files);
                }
            } else if file_type.is_file() {
                if self.ignores.is_ignored(&relative, false) {
                    continue;
                }
                let relative = to_slash(&relative);
                if !self.include_globs.is_empty() && !self.include_globs.is_match(&relative) {
                    continue;
                }
                if self.exclude_globs.is_match(&relative) {
                    continue;
                }
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                files.push(SourceFile { relative, path, size });
            }
        }
    }
}

fn build_globset(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => tracing::warn!(pattern = %pattern, error = %e, "skipping invalid glob"),
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Root-relative path with `/` separators on every platform.
pub(crate) fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = tempfile::TempDir::new().unwrap();
        touch(dir.path(), "src/b/Card.tsx");
        touch(dir.path(), "src/a/Button.tsx");
        touch(dir.path(), "src/a/Button.test.tsx");
        touch(dir.path(), "node_modules/lib/index.js");
        touch(dir.path(), "README.md");

        let scanner = FileScanner::new(
            dir.path(),
            &["**/*.tsx".to_string()],
            &["**/*.test.*".to_string()],
        );
        let files: Vec<String> = scanner.discover().into_iter().map(|f| f.relative).collect();
        assert_eq!(files, vec!["src/a/Button.tsx", "src/b/Card.tsx"]);
    }

    #[test]
    fn test_empty_include_matches_everything() {
        let dir = tempfile::TempDir::new().unwrap();
        touch(dir.path(), "a.css");
        touch(dir.path(), "b.vue");
        let scanner = FileScanner::new(dir.path(), &[], &[]);
        assert_eq!(scanner.discover().len(), 2);
    }
}
