//! Drift signal model
//!
//! A drift signal is one place (or cluster of places) where code diverges
//! from the design token inventory. Detectors emit signals; callers decide
//! how to render, persist, or forward them.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Kind of divergence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriftType {
    /// A literal value used where a token should be
    HardcodedValue,
}

/// Signal severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - worth tokenizing eventually
    Info,
    /// Warning - visible drift such as literal colors
    Warning,
    /// Critical - reserved for host-side escalation
    Critical,
}

/// Where a signal points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalLocation {
    /// Root-relative file path
    pub file: String,
    /// 1-based line of the first occurrence
    pub line: u32,
    /// 1-based column of the first occurrence
    pub column: u32,
}

/// The entity a signal is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSource {
    /// Entity kind, e.g. `arbitrary-value` or `inline-style`
    pub entity_type: String,
    /// Stable entity id (file + category)
    pub entity_id: String,
    /// Human-readable entity name
    pub entity_name: String,
    /// First occurrence
    pub location: SignalLocation,
}

/// One concrete occurrence backing a signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalExample {
    /// The offending text (class token or declaration)
    pub text: String,
    pub line: u32,
    pub column: u32,
}

/// Structured details for remediation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalDetails {
    /// What the code should do instead
    pub expected: String,
    /// Number of occurrences folded into this signal
    pub actual_count: usize,
    /// Files involved
    pub affected_files: Vec<String>,
    /// Ordered remediation suggestions with concrete examples
    pub suggestions: Vec<String>,
    /// Up to `MAX_EXAMPLES` occurrences
    pub examples: Vec<SignalExample>,
}

/// Examples kept per signal.
pub const MAX_EXAMPLES: usize = 3;

/// A drift finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftSignal {
    /// Stable id derived from drift type and entity id
    pub id: String,
    pub drift_type: DriftType,
    pub severity: Severity,
    pub source: SignalSource,
    /// One-line human message
    pub message: String,
    pub details: SignalDetails,
    pub detected_at: SystemTime,
}

impl DriftSignal {
    pub fn new(
        drift_type: DriftType,
        severity: Severity,
        source: SignalSource,
        message: String,
        details: SignalDetails,
    ) -> Self {
        Self {
            id: signal_id(drift_type, &source.entity_id),
            drift_type,
            severity,
            source,
            message,
            details,
            detected_at: SystemTime::now(),
        }
    }
}

/// `drift:<xxh3 hex of type#entity>`
pub fn signal_id(drift_type: DriftType, entity_id: &str) -> String {
    let hash = xxh3_64(format!("{drift_type:?}#{entity_id}").as_bytes());
    format!("drift:{hash:016x}")
}
