//! Token source resolution errors.
//!
//! These never escape the resolver: a failing candidate is logged and
//! resolution falls through to the next candidate or generation.

use std::path::PathBuf;

use super::error_code::{self, DesignErrorCode};

/// Errors raised while reading a style configuration candidate.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Skipping {path}: {size} bytes exceeds the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Malformed config in {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Import target not found: {target} (from {from})")]
    ImportNotFound { target: String, from: PathBuf },

    #[error("No tokens found in {path}")]
    Empty { path: PathBuf },
}

impl DesignErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        error_code::RESOLVE_ERROR
    }
}
