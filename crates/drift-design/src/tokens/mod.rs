//! Design tokens: value model, source resolution, and aggregation.
//!
//! Tokens come from the project's style configuration. Two generations are
//! supported: an object-literal config file (`tailwind.config.*`) and
//! CSS-native configuration (`@theme` blocks and custom properties on
//! root, variant, layer, and class scopes). Semantic tokens inferred from
//! class usage join the same aggregate.

pub mod aggregator;
pub mod category;
pub mod css_config;
pub mod discovery;
pub mod implicit;
pub mod object_config;
pub mod resolver;
pub mod types;
pub mod values;

pub use aggregator::TokenAggregator;
pub use category::infer_category;
pub use implicit::{classify_reference, ImplicitFamily};
pub use resolver::{ResolveStage, TokenSourceResolver};
pub use types::{
    tags, token_id, DesignToken, SpacingUnit, TokenCategory, TokenSource, TokenSourceKind,
    TokenValue,
};
pub use values::{is_hardcoded_color, is_token_reference, parse_token_value};
