//! Scan errors. These are the only errors that abort a whole scan.

use std::path::PathBuf;

use super::error_code::{self, DesignErrorCode};

/// Errors that terminate a design scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid project root: {path}")]
    InvalidRoot { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("Scan cancelled")]
    Cancelled,
}

impl DesignErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRoot { .. } => error_code::INVALID_ROOT,
            Self::Cancelled => error_code::CANCELLED,
            _ => error_code::SCAN_ERROR,
        }
    }
}
