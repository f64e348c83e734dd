//! Default ignore patterns for front-end codebases
//!
//! Keeps dependency trees, build output, and generated bundles out of the
//! scan so design analysis only sees authored sources.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Directories that never contain authored UI sources
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Package managers
    "node_modules",
    ".pnpm",
    ".yarn",
    "bower_components",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // IDE/Editor
    ".idea",
    ".vscode",
    // Build outputs
    "dist",
    "build",
    "out",
    ".output",
    "storybook-static",
    // Framework caches
    ".cache",
    ".parcel-cache",
    ".next",
    ".nuxt",
    ".svelte-kit",
    ".astro",
    ".angular",
    ".turbo",
    ".vercel",
    // Coverage/Testing
    "coverage",
    ".nyc_output",
    "__snapshots__",
    // Temp
    "tmp",
    ".tmp",
    // Drift's own data
    ".drift",
];

/// Generated or bundled files
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    "*.min.js",
    "*.min.css",
    "*.map",
    "*.bundle.js",
    "*.chunk.js",
    "*.generated.*",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
];

/// Patterns for the ignore crate
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Create ignore patterns from defaults, project ignore files, and extras
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS.iter().chain(DEFAULT_IGNORE_FILES) {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in extra_patterns {
            let _ = builder.add_line(None, pattern);
        }

        for name in [".driftignore", ".gitignore"] {
            let path = root.join(name);
            if path.exists() {
                if let Some(e) = builder.add(&path) {
                    tracing::warn!(file = %path.display(), error = %e, "ignoring unreadable ignore file");
                }
            }
        }

        let gitignore = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid ignore patterns, falling back to none");
            Gitignore::empty()
        });

        Self { gitignore }
    }

    /// Check if a root-relative path should be ignored
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}
