//! DesignErrorCode trait for structured error codes at the host boundary.

/// Trait for converting design engine errors to stable error code strings.
pub trait DesignErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host error string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const INVALID_ROOT: &str = "INVALID_ROOT";
pub const CANCELLED: &str = "CANCELLED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RESOLVE_ERROR: &str = "RESOLVE_ERROR";
