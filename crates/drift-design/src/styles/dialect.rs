//! Template dialect selection.

use std::path::Path;

/// Template syntax family that decides which binding rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleDialect {
    /// HTML, Svelte, Astro: `style="..."` only
    Plain,
    /// `[style.x.unit]`, `[ngStyle]`, `[style]`, `@HostBinding('style.x')`
    Angular,
    /// `:style` / `v-bind:style`
    Vue,
    /// `style={{ ... }}` / `style={expr}`
    Jsx,
}

const ANGULAR_MARKERS: &[&str] = &["@Component", "@HostBinding", "[ngStyle]", "[style.", "[style]"];
const VUE_MARKERS: &[&str] = &[":style=", "v-bind:style"];

impl StyleDialect {
    /// Pick a dialect from the file extension and content markers.
    pub fn for_path(path: &Path, content: &str) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let has_any = |markers: &[&str]| markers.iter().any(|m| content.contains(m));
        match ext.as_str() {
            "vue" => Self::Vue,
            "tsx" | "jsx" => Self::Jsx,
            "ts" | "html" | "htm" if has_any(ANGULAR_MARKERS) => Self::Angular,
            "html" | "htm" if has_any(VUE_MARKERS) => Self::Vue,
            "ts" | "js" | "mjs" | "cjs" if content.contains("style={") => Self::Jsx,
            _ => Self::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_selection() {
        let pick = |p: &str, c: &str| StyleDialect::for_path(Path::new(p), c);
        assert_eq!(pick("App.vue", ""), StyleDialect::Vue);
        assert_eq!(pick("Button.tsx", ""), StyleDialect::Jsx);
        assert_eq!(pick("card.component.html", "<div [ngStyle]=\"x\">"), StyleDialect::Angular);
        assert_eq!(pick("card.component.ts", "@Component({})"), StyleDialect::Angular);
        assert_eq!(pick("index.html", "<div :style=\"s\">"), StyleDialect::Vue);
        assert_eq!(pick("index.html", "<div style=\"color: red\">"), StyleDialect::Plain);
        assert_eq!(pick("Page.svelte", "<div style:color={c}>"), StyleDialect::Plain);
    }
}
