//! Style normalizer types

use serde::{Deserialize, Serialize};

/// Where a declaration was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleContext {
    Inline,
}

/// Syntactic form a declaration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingKind {
    /// `style="color: red"`
    Attribute,
    /// Single-property binding, optionally unit-suffixed
    Property,
    /// Object literal bound as a style map
    StyleMap,
    /// Whole style object bound from an expression
    StyleObject,
    /// Property bound out-of-line to a class member
    HostBinding,
    /// Array of style objects
    Array,
    /// Template or string literal
    Literal,
    /// Conditional expression
    Ternary,
    /// Identifier, member access, or call
    Computed,
}

/// One normalized inline-style expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDeclaration {
    /// CSS text, or a placeholder such as `[dynamic]` or `[computed: expr]`
    pub css: String,
    /// 1-based line of the binding
    pub line: u32,
    /// 1-based column of the binding
    pub column: u32,
    pub context: StyleContext,
    pub kind: BindingKind,
}

/// Placeholder markers for values that cannot be resolved statically.
pub mod placeholder {
    pub const DYNAMIC: &str = "[dynamic]";
    pub const TERNARY: &str = "[ternary]";
    pub const STYLE_OBJECT: &str = "[style-object]";

    pub fn computed(expr: &str) -> String {
        format!("[computed: {}]", expr.trim())
    }

    /// True if `value` is any placeholder marker.
    pub fn is_placeholder(value: &str) -> bool {
        let value = value.trim();
        value == DYNAMIC || value == TERNARY || value == STYLE_OBJECT || value.starts_with("[computed:")
    }
}
