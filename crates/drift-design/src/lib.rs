//! drift-design: design-system drift engine
//!
//! This crate provides the token extraction and cross-file style analysis
//! components for Drift:
//! - Tokens: design token resolution from object-literal and CSS-native config
//! - Styles: inline-style normalization across four template dialects
//! - Arbitrary: bracket-notation literals in utility classes
//! - Semantic: tokens inferred from how components reference them
//! - Patterns: duplicated class lists, diverging variants, extractable idioms
//! - Scan: orchestration, bounded parallelism, statistics

pub mod cancellation;
pub mod config;
pub mod errors;
pub mod tracing_setup;

pub mod scanner;
pub mod text;

pub mod arbitrary;
pub mod classes;
pub mod patterns;
pub mod scan;
pub mod semantic;
pub mod signals;
pub mod styles;
pub mod tokens;

// Re-exports for convenience
pub use cancellation::{Cancellable, CancellationToken};
pub use config::{DesignConfig, ScanRequest};
pub use errors::{ConfigError, DesignErrorCode, ResolveError, ScanError};
pub use scan::{DesignScanResult, DesignScanner, ScanStats};
pub use signals::{DriftSignal, DriftType, Severity};
pub use arbitrary::{ArbitraryCategory, ArbitraryValue, ArbitraryValueDetector};
pub use patterns::{
    ClassPatternAnalyzer, ClassPatternReport, DuplicatedClassPattern, ExtractablePattern,
    PatternCategory, VariantInconsistency,
};
pub use semantic::{SemanticIndex, SemanticToken};
pub use styles::{StyleDeclaration, StyleDialect, StyleNormalizer};
pub use tokens::{DesignToken, TokenAggregator, TokenCategory, TokenSourceResolver, TokenValue};
pub use tracing_setup::init_tracing;
