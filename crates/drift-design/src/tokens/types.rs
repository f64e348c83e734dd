//! Design token data model.

use std::collections::BTreeSet;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Category of a design decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Spacing,
    Border,
    Typography,
    Shadow,
    Other,
}

impl TokenCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::Border => "border",
            Self::Typography => "typography",
            Self::Shadow => "shadow",
            Self::Other => "other",
        }
    }
}

/// Unit of a resolved spacing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingUnit {
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "rem")]
    Rem,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "vh")]
    Vh,
    #[serde(rename = "vw")]
    Vw,
    #[serde(rename = "vmin")]
    Vmin,
    #[serde(rename = "vmax")]
    Vmax,
    #[serde(rename = "ch")]
    Ch,
    #[serde(rename = "pt")]
    Pt,
}

impl SpacingUnit {
    pub fn parse(unit: &str) -> Option<Self> {
        Some(match unit {
            "px" => Self::Px,
            "rem" => Self::Rem,
            "em" => Self::Em,
            "%" => Self::Percent,
            "vh" => Self::Vh,
            "vw" => Self::Vw,
            "vmin" => Self::Vmin,
            "vmax" => Self::Vmax,
            "ch" => Self::Ch,
            "pt" => Self::Pt,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Percent => "%",
            Self::Vh => "vh",
            Self::Vw => "vw",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Ch => "ch",
            Self::Pt => "pt",
        }
    }
}

/// Typed token value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TokenValue {
    /// Resolved color as lowercase `#rrggbb` or `#rrggbbaa`
    Color { hex: String },
    /// Resolved length
    Spacing { value: f64, unit: SpacingUnit },
    /// Anything not fully parsed: `oklch()`, `calc()`, `var()` ...
    Raw { value: String },
}

impl TokenValue {
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw { value: value.into() }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw { .. })
    }

    /// CSS text of the value.
    pub fn css(&self) -> String {
        match self {
            Self::Color { hex } => hex.clone(),
            Self::Spacing { value, unit } => format!("{}{}", value, unit.as_str()),
            Self::Raw { value } => value.clone(),
        }
    }
}

/// Where a token was declared or inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenSourceKind {
    /// Object-literal config (`tailwind.config.*`)
    JsConfig,
    /// CSS-native config (`@theme`, `:root`, ...)
    Css,
    /// Inferred from component class usage
    Usage,
}

impl TokenSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JsConfig => "js-config",
            Self::Css => "css",
            Self::Usage => "usage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSource {
    pub kind: TokenSourceKind,
    /// Root-relative path
    pub path: String,
}

/// A named design decision.
///
/// Identity is `(source, name)`: the `id` is derived from both, so equal
/// names from different files stay distinct until aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignToken {
    pub id: String,
    pub name: String,
    pub category: TokenCategory,
    pub value: TokenValue,
    pub source: TokenSource,
    pub aliases: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub captured_at: SystemTime,
}

impl DesignToken {
    pub fn new(
        name: impl Into<String>,
        category: TokenCategory,
        value: TokenValue,
        source: TokenSource,
    ) -> Self {
        let name = name.into();
        let id = token_id(&source, &name);
        Self {
            id,
            name,
            category,
            value,
            source,
            aliases: BTreeSet::new(),
            tags: BTreeSet::new(),
            captured_at: SystemTime::now(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        if alias != self.name {
            self.aliases.insert(alias);
        }
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// `<kind>:<xxh3 of path#name>`
pub fn token_id(source: &TokenSource, name: &str) -> String {
    let hash = xxh3_64(format!("{}#{}", source.path, name).as_bytes());
    format!("{}:{:016x}", source.kind.as_str(), hash)
}

/// Provenance tags attached to resolved tokens.
pub mod tags {
    pub const CONFIG_V3: &str = "config-v3";
    pub const CONFIG_V4: &str = "config-v4";
    pub const THEME: &str = "theme";
    pub const EXTEND: &str = "extend";
    pub const ROOT: &str = "root";
    pub const VARIANT: &str = "variant";
    pub const REFERENCE: &str = "reference";
    pub const INFERRED: &str = "inferred";

    pub fn layer(name: &str) -> String {
        format!("layer:{name}")
    }

    pub fn scope(selector: &str) -> String {
        format!("scope:{selector}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css_source(path: &str) -> TokenSource {
        TokenSource { kind: TokenSourceKind::Css, path: path.to_string() }
    }

    #[test]
    fn test_identity_is_source_and_name() {
        let a = DesignToken::new("primary", TokenCategory::Color, TokenValue::raw("x"), css_source("a.css"));
        let b = DesignToken::new("primary", TokenCategory::Color, TokenValue::raw("x"), css_source("b.css"));
        let a2 = DesignToken::new("primary", TokenCategory::Color, TokenValue::raw("y"), css_source("a.css"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.id, a2.id);
        assert!(a.id.starts_with("css:"));
    }

    #[test]
    fn test_alias_never_equals_name() {
        let t = DesignToken::new("color-primary", TokenCategory::Color, TokenValue::raw("x"), css_source("a.css"))
            .with_alias("color-primary")
            .with_alias("primary");
        assert_eq!(t.aliases.len(), 1);
        assert!(t.aliases.contains("primary"));
    }

    #[test]
    fn test_value_serialization_shape() {
        let v = TokenValue::Spacing { value: 1.5, unit: SpacingUnit::Rem };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "spacing");
        assert_eq!(json["unit"], "rem");
        assert_eq!(v.css(), "1.5rem");
    }
}
