//! Scan result types

use serde::{Deserialize, Serialize};

use crate::arbitrary::ArbitraryValue;
use crate::classes::FileClasses;
use crate::patterns::ClassPatternReport;
use crate::semantic::SemanticToken;
use crate::signals::DriftSignal;
use crate::tokens::DesignToken;

/// Statistics about a design scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files read and analyzed
    pub files_scanned: usize,
    /// Files skipped as unreadable or oversized
    pub files_failed: usize,
    /// Arbitrary values found across all files
    pub arbitrary_values_found: usize,
    /// Unique tokens after aggregation
    pub tokens_extracted: usize,
    /// Token definitions before aggregation
    pub tokens_raw: usize,
    pub semantic_tokens_found: usize,
    /// Class strings and variant entries examined by the pattern analyzer
    pub patterns_analyzed: usize,
    /// Inline style declarations normalized
    pub inline_styles_found: usize,
    pub duration_ms: u64,
}

/// Everything a scan returns to its caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignScanResult {
    /// Aggregated tokens, first occurrence of each name
    pub tokens: Vec<DesignToken>,
    /// Arbitrary-value signals, then inline-style signals in file order
    pub signals: Vec<DriftSignal>,
    /// Present when semantic extraction was enabled
    pub semantic_tokens: Option<Vec<SemanticToken>>,
    /// Present when class pattern analysis was enabled
    pub class_patterns: Option<ClassPatternReport>,
    pub stats: ScanStats,
    /// One message per file that could not be analyzed
    pub errors: Vec<String>,
}

/// Per-file extraction output, merged in file order after the parallel stage.
#[derive(Debug, Default)]
pub(crate) struct FileReport {
    pub arbitrary: Vec<ArbitraryValue>,
    pub classes: Option<FileClasses>,
    pub inline_signal: Option<DriftSignal>,
    pub inline_declarations: usize,
}

#[derive(Debug)]
pub(crate) enum FileOutcome {
    Scanned(FileReport),
    Failed(String),
}
