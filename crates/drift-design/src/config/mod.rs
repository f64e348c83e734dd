//! Configuration for design scans.
//! TOML-based, 3-layer resolution: env > project `drift.toml` > defaults.

pub mod design_config;

pub use design_config::{DesignConfig, ScanRequest};
