//! Design scan configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default source globs: UI templates, scripts, and stylesheets.
pub const DEFAULT_INCLUDE: &[&str] = &["**/*.{tsx,jsx,ts,js,mjs,cjs,vue,svelte,astro,html,css}"];

/// Default exclusions on top of the scanner's ignore set.
pub const DEFAULT_EXCLUDE: &[&str] = &["**/*.d.ts", "**/*.min.*"];

/// Configuration for a design scan.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DRIFT_DESIGN_*`)
/// 2. Project config (`[design]` table of `drift.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DesignConfig {
    /// Include globs. Empty means `DEFAULT_INCLUDE`.
    pub include: Vec<String>,
    /// Exclude globs, applied after `include`.
    pub exclude: Vec<String>,
    /// Resolve design tokens from style configuration. Default: true.
    pub extract_tokens: Option<bool>,
    /// Report bracket-notation literals in utility classes. Default: true.
    pub detect_arbitrary_values: Option<bool>,
    /// Infer semantic tokens from class usage. Default: true.
    pub extract_semantic_tokens: Option<bool>,
    /// Analyze duplicated classes, variant tables, and extractable idioms. Default: true.
    pub detect_class_patterns: Option<bool>,
    /// Report hardcoded values in inline style bindings. Default: true.
    pub audit_inline_styles: Option<bool>,
    /// Maximum files read concurrently. Default: 16.
    pub max_concurrency: Option<usize>,
    /// Files larger than this are skipped and counted as failed. Default: 1 MiB.
    pub max_file_size: Option<u64>,
}

/// Shape of `drift.toml`; only the `[design]` table is read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectFile {
    design: DesignConfig,
}

impl DesignConfig {
    /// Load configuration for `root`: defaults, then `drift.toml`, then env.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("drift.toml");
        if project_config_path.exists() {
            let content = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            let file: ProjectFile = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
            config = file.design;
        }

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a bare `DesignConfig` from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(n) = self.max_concurrency {
            if !(1..=256).contains(&n) {
                return Err(ConfigError::ValidationFailed {
                    field: "design.max_concurrency".to_string(),
                    message: "must be between 1 and 256".to_string(),
                });
            }
        }
        if self.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "design.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for pattern in self.include.iter().chain(&self.exclude) {
            if let Err(e) = globset::Glob::new(pattern) {
                return Err(ConfigError::InvalidValue {
                    field: "design.include/exclude".to_string(),
                    message: format!("{pattern}: {e}"),
                });
            }
        }
        Ok(())
    }

    fn apply_env_overrides(config: &mut DesignConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("DRIFT_DESIGN_MAX_CONCURRENCY") {
            let v = val.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                field: "DRIFT_DESIGN_MAX_CONCURRENCY".to_string(),
                message: e.to_string(),
            })?;
            config.max_concurrency = Some(v);
        }
        if let Ok(val) = std::env::var("DRIFT_DESIGN_MAX_FILE_SIZE") {
            let v = val.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                field: "DRIFT_DESIGN_MAX_FILE_SIZE".to_string(),
                message: e.to_string(),
            })?;
            config.max_file_size = Some(v);
        }
        Ok(())
    }

    pub fn effective_include(&self) -> Vec<String> {
        if self.include.is_empty() {
            DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect()
        } else {
            self.include.clone()
        }
    }

    pub fn effective_exclude(&self) -> Vec<String> {
        let mut exclude: Vec<String> = DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect();
        exclude.extend(self.exclude.iter().cloned());
        exclude
    }

    pub fn effective_extract_tokens(&self) -> bool {
        self.extract_tokens.unwrap_or(true)
    }

    pub fn effective_detect_arbitrary_values(&self) -> bool {
        self.detect_arbitrary_values.unwrap_or(true)
    }

    pub fn effective_extract_semantic_tokens(&self) -> bool {
        self.extract_semantic_tokens.unwrap_or(true)
    }

    pub fn effective_detect_class_patterns(&self) -> bool {
        self.detect_class_patterns.unwrap_or(true)
    }

    pub fn effective_audit_inline_styles(&self) -> bool {
        self.audit_inline_styles.unwrap_or(true)
    }

    /// Returns the effective concurrency limit, defaulting to 16.
    pub fn effective_max_concurrency(&self) -> usize {
        self.max_concurrency.unwrap_or(16)
    }

    /// Returns the effective file size cap, defaulting to 1 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1024 * 1024)
    }
}

/// A scan request as supplied by the host: where to look and how.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub root: PathBuf,
    pub config: DesignConfig,
}

impl ScanRequest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: DesignConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DesignConfig) -> Self {
        self.config = config;
        self
    }
}
