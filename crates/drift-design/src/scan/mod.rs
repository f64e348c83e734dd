//! Design scan orchestration
//!
//! `DesignScanner` discovers files, runs per-file extraction on a bounded
//! worker pool, then folds the results in file order: arbitrary values into
//! signals, class strings into semantic tokens and pattern reports, and
//! resolved plus inferred tokens through the aggregator.

mod scanner;
mod types;

pub use scanner::DesignScanner;
pub use types::{DesignScanResult, ScanStats};
