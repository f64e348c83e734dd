//! Error handling for the design drift engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod resolve_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::DesignErrorCode;
pub use resolve_error::ResolveError;
pub use scan_error::ScanError;
