//! Token source resolution across configuration generations.
//!
//! Generations are tried in order; the first one that yields tokens wins.
//! Every failure is logged and converted into "no tokens from here", so
//! resolution as a whole never errors.

use std::path::{Component, Path, PathBuf};

use rustc_hash::FxHashSet;

use super::css_config::extract_css_tokens;
use super::discovery::{rank_candidates, read_capped};
use super::implicit::classify_reference;
use super::object_config::{extract_object_config, OBJECT_CONFIG_FILES};
use super::types::{tags, DesignToken, TokenSource, TokenSourceKind, TokenValue};
use crate::errors::ResolveError;
use crate::scanner::{to_slash, SourceFile};

/// Resolution progress. `Exhausted` means no generation produced tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStage {
    ObjectConfig,
    CssConfig,
    Exhausted,
}

impl ResolveStage {
    fn next(self) -> Self {
        match self {
            Self::ObjectConfig => Self::CssConfig,
            Self::CssConfig | Self::Exhausted => Self::Exhausted,
        }
    }
}

/// Size cap applied when no explicit limit is set.
const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Resolves design tokens for one project root.
pub struct TokenSourceResolver<'a> {
    root: &'a Path,
    files: &'a [SourceFile],
    max_file_size: u64,
}

impl<'a> TokenSourceResolver<'a> {
    pub fn new(root: &'a Path, files: &'a [SourceFile]) -> Self {
        Self {
            root,
            files,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Skip configuration files larger than `bytes`.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Resolve tokens from the first generation that yields any.
    pub fn resolve(&self) -> Vec<DesignToken> {
        let mut stage = ResolveStage::ObjectConfig;
        while stage != ResolveStage::Exhausted {
            let tokens = match stage {
                ResolveStage::ObjectConfig => self.resolve_object_config(),
                ResolveStage::CssConfig => self.resolve_css_config(),
                ResolveStage::Exhausted => Vec::new(),
            };
            if !tokens.is_empty() {
                tracing::debug!(stage = ?stage, tokens = tokens.len(), "resolved design tokens");
                return tokens;
            }
            stage = stage.next();
        }
        tracing::debug!(root = %self.root.display(), "no token source found");
        Vec::new()
    }

    fn resolve_object_config(&self) -> Vec<DesignToken> {
        for name in OBJECT_CONFIG_FILES {
            let path = self.root.join(name);
            if !path.is_file() {
                continue;
            }
            let result = read_capped(&path, self.max_file_size)
                .and_then(|content| extract_object_config(&content, name, &path));
            match result {
                Ok(tokens) if !tokens.is_empty() => return tokens,
                Ok(_) => tracing::debug!(path = %name, "object config has no theme tokens"),
                Err(e) => tracing::debug!(error = %e, "object config candidate rejected"),
            }
        }
        Vec::new()
    }

    fn resolve_css_config(&self) -> Vec<DesignToken> {
        for candidate in rank_candidates(self.root, self.files, self.max_file_size) {
            match self.resolve_css_chain(&candidate.relative) {
                Ok(tokens) if !tokens.is_empty() => return tokens,
                Ok(_) => tracing::debug!(path = %candidate.relative, "stylesheet chain has no tokens"),
                Err(e) => tracing::debug!(error = %e, "stylesheet candidate rejected"),
            }
        }
        Vec::new()
    }

    /// Tokens from `entry` and everything it imports, depth first, followed by
    /// implicit framework tokens referenced anywhere in the chain.
    pub fn resolve_css_chain(&self, entry: &str) -> Result<Vec<DesignToken>, ResolveError> {
        let mut visited = FxHashSet::default();
        let mut defined = Vec::new();
        let mut references = Vec::new();
        self.visit_stylesheet(&self.root.join(entry), &mut visited, &mut defined, &mut references)?;

        let implicit: Vec<DesignToken> = {
            let defined_names: FxHashSet<&str> = defined
                .iter()
                .flat_map(|t: &DesignToken| {
                    std::iter::once(t.name.as_str()).chain(t.aliases.iter().map(String::as_str))
                })
                .collect();
            let mut seen = FxHashSet::default();
            references
                .iter()
                .filter(|(name, _)| !defined_names.contains(name.as_str()) && seen.insert(name.clone()))
                .filter_map(|(name, relative)| {
                    let family = classify_reference(name)?;
                    let source = TokenSource {
                        kind: TokenSourceKind::Css,
                        path: relative.clone(),
                    };
                    Some(
                        DesignToken::new(
                            name.clone(),
                            family.category(),
                            TokenValue::raw(format!("var(--{name})")),
                            source,
                        )
                        .with_tag(tags::REFERENCE),
                    )
                })
                .collect()
        };

        defined.extend(implicit);
        Ok(defined)
    }

    fn visit_stylesheet(
        &self,
        path: &Path,
        visited: &mut FxHashSet<PathBuf>,
        defined: &mut Vec<DesignToken>,
        references: &mut Vec<(String, String)>,
    ) -> Result<(), ResolveError> {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !visited.insert(key) {
            return Ok(());
        }
        let content = read_capped(path, self.max_file_size)?;
        let relative = to_slash(&self.relative_to_root(path));
        let extraction = extract_css_tokens(&content, &relative, path)?;

        defined.extend(extraction.defined);
        references.extend(extraction.references.into_iter().map(|name| (name, relative.clone())));

        for import in &extraction.imports {
            let Some(target) = self.resolve_import(path, import) else {
                continue;
            };
            if !target.is_file() {
                let e = ResolveError::ImportNotFound {
                    target: import.clone(),
                    from: path.to_path_buf(),
                };
                tracing::debug!(error = %e, "skipping import");
                continue;
            }
            if let Err(e) = self.visit_stylesheet(&target, visited, defined, references) {
                tracing::debug!(error = %e, "skipping imported stylesheet");
            }
        }
        Ok(())
    }

    /// `path` relative to the project root with `.` and `..` segments folded.
    fn relative_to_root(&self, path: &Path) -> PathBuf {
        let path = normalize_lexically(path);
        let root = normalize_lexically(self.root);
        match path.strip_prefix(&root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path,
        }
    }

    /// Local path for an `@import` target; package and remote imports are not followed.
    fn resolve_import(&self, from: &Path, specifier: &str) -> Option<PathBuf> {
        if specifier.contains("://") || specifier.starts_with("//") {
            return None;
        }
        let is_local = specifier.starts_with('.') || specifier.starts_with('/');
        if !is_local {
            return None;
        }
        let mut target = match specifier.strip_prefix('/') {
            Some(rooted) => self.root.join(rooted),
            None => from.parent().unwrap_or(self.root).join(specifier),
        };
        if target.extension().is_none() {
            target.set_extension("css");
        }
        Some(normalize_lexically(&target))
    }
}

/// Fold `.` and `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::FileScanner;
    use std::fs;

    fn project(files: &[(&str, &str)]) -> (tempfile::TempDir, Vec<SourceFile>) {
        let dir = tempfile::TempDir::new().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let sources = FileScanner::new(dir.path(), &[], &[]).discover();
        (dir, sources)
    }

    fn names(tokens: &[DesignToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_object_config_wins_over_css() {
        let (dir, files) = project(&[
            ("tailwind.config.js", "module.exports = { theme: { colors: { brand: '#123456' } } }"),
            ("src/index.css", ":root { --other: #fff; }"),
        ]);
        let tokens = TokenSourceResolver::new(dir.path(), &files).resolve();
        assert_eq!(names(&tokens), vec!["brand"]);
        assert!(tokens[0].has_tag(tags::CONFIG_V3));
    }

    #[test]
    fn test_broken_object_config_falls_through() {
        let (dir, files) = project(&[
            ("tailwind.config.js", "module.exports = { theme: { colors: {"),
            ("src/index.css", ":root { --other: #fff; }"),
        ]);
        let tokens = TokenSourceResolver::new(dir.path(), &files).resolve();
        assert_eq!(names(&tokens), vec!["other"]);
    }

    #[test]
    fn test_import_chain_is_followed_once() {
        let (dir, files) = project(&[
            ("src/index.css", "@import './tokens.css';\n@import '/styles/base';\n:root { --a: 1px; }"),
            ("src/tokens.css", "@import './index.css';\n:root { --b: 2px; }"),
            ("styles/base.css", ":root { --c: 3px; }"),
        ]);
        let resolver = TokenSourceResolver::new(dir.path(), &files);
        let tokens = resolver.resolve_css_chain("src/index.css").unwrap();
        assert_eq!(names(&tokens), vec!["a", "b", "c"]);
        assert_eq!(tokens[1].source.path, "src/tokens.css");
    }

    #[test]
    fn test_parent_relative_import_reports_normalized_path() {
        let (dir, files) = project(&[
            ("src/theme/index.css", "@import '../vendor/c.css';\n@import './.././theme/own.css';\n:root { --a: 1px; }"),
            ("src/theme/own.css", ":root { --b: 2px; }"),
            ("src/vendor/c.css", ":root { --c: 3px; }"),
        ]);
        let tokens = TokenSourceResolver::new(dir.path(), &files)
            .resolve_css_chain("src/theme/index.css")
            .unwrap();
        assert_eq!(names(&tokens), vec!["a", "c", "b"]);
        assert_eq!(tokens[1].source.path, "src/vendor/c.css");
        assert_eq!(tokens[2].source.path, "src/theme/own.css");
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("/p/src/theme/../vendor/./c.css")),
            PathBuf::from("/p/src/vendor/c.css")
        );
        assert_eq!(normalize_lexically(Path::new("../a/b")), PathBuf::from("../a/b"));
    }

    #[test]
    fn test_oversized_sources_are_skipped() {
        let big = format!("@import './tokens.css';\n:root {{ --a: 1px; }}\n/*{}*/", "x".repeat(512));
        let (dir, files) = project(&[
            ("tailwind.config.js", "module.exports = { theme: { colors: { brand: '#123456' } } }"),
            ("src/index.css", "@import './big.css';\n:root { --small: 1px; }"),
            ("src/big.css", big.as_str()),
        ]);
        let tokens = TokenSourceResolver::new(dir.path(), &files).with_max_file_size(50).resolve();
        assert_eq!(names(&tokens), vec!["small"]);

        let tokens = TokenSourceResolver::new(dir.path(), &files).with_max_file_size(8).resolve();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_implicit_references_after_chain() {
        let (dir, files) = project(&[(
            "app/globals.css",
            "@import \"tailwindcss\";\n.btn { color: var(--color-blue-500); padding: var(--spacing); gap: var(--own); }\n:root { --own: 4px; }",
        )]);
        let tokens = TokenSourceResolver::new(dir.path(), &files).resolve();
        assert_eq!(names(&tokens), vec!["own", "color-blue-500", "spacing"]);
        assert!(tokens[1].has_tag(tags::REFERENCE));
        assert_eq!(tokens[1].value, TokenValue::raw("var(--color-blue-500)"));
    }

    #[test]
    fn test_missing_import_is_skipped() {
        let (dir, files) = project(&[("src/index.css", "@import './gone.css';\n:root { --a: 1px; }")]);
        let tokens = TokenSourceResolver::new(dir.path(), &files).resolve();
        assert_eq!(names(&tokens), vec!["a"]);
    }

    #[test]
    fn test_nothing_found_is_empty_not_error() {
        let (dir, files) = project(&[("src/Button.tsx", "export const B = () => null")]);
        assert!(TokenSourceResolver::new(dir.path(), &files).resolve().is_empty());
    }
}
