//! Scanner types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Broad role of a source file in a design scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Stylesheets (`.css`, `.scss`, ...)
    Stylesheet,
    /// Component templates (`.vue`, `.svelte`, `.html`, `.astro`)
    Template,
    /// Script modules that may carry JSX or class strings
    Script,
    Other,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "css" | "scss" | "sass" | "less" | "pcss" => Self::Stylesheet,
            "vue" | "svelte" | "html" | "htm" | "astro" => Self::Template,
            "ts" | "tsx" | "js" | "jsx" | "mjs" | "cjs" | "mts" | "cts" => Self::Script,
            _ => Self::Other,
        }
    }
}

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceFile {
    /// Root-relative path with `/` separators (ordering key)
    pub relative: String,
    /// Absolute path on disk
    pub path: PathBuf,
    /// File size in bytes at discovery time
    pub size: u64,
}

impl SourceFile {
    pub fn kind(&self) -> SourceKind {
        SourceKind::from_path(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind() {
        assert_eq!(SourceKind::from_path(Path::new("a/Button.tsx")), SourceKind::Script);
        assert_eq!(SourceKind::from_path(Path::new("App.vue")), SourceKind::Template);
        assert_eq!(SourceKind::from_path(Path::new("globals.CSS")), SourceKind::Stylesheet);
        assert_eq!(SourceKind::from_path(Path::new("README.md")), SourceKind::Other);
    }
}
