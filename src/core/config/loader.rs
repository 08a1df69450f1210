#![allow(clippy::result_large_err)]

use super::AmenderConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::env;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "amender.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from an explicit file, or from amender.toml in the working
    /// directory. Environment variables override config file values.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(explicit: Option<&Path>) -> Result<AmenderConfig, AppError> {
        let config_file = match explicit {
            Some(path) => Some(Self::load_from_file(path)?.ok_or_else(|| {
                AppError::new(
                    ErrorCategory::IoError,
                    format!("Config file {} does not exist", path.display()),
                )
                .with_code("AMD-CONFIG-001")
                .with_suggestion("Pass an existing file to --config or drop the flag")
            })?),
            None => Self::load_from_file(Path::new(CONFIG_FILE_NAME))?,
        };

        let mut config = config_file.unwrap_or_else(|| {
            tracing::debug!("no {} found; using defaults", CONFIG_FILE_NAME);
            AmenderConfig::default()
        });

        // Apply environment variable overrides
        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<AmenderConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: AmenderConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ValidationError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
            .with_code("AMD-CONFIG-002")
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(Some(config))
    }

    /// Environment variables take precedence over config file values
    fn apply_env_overrides(config: &mut AmenderConfig) {
        if let Ok(directory) = env::var("AMENDER_OUTPUT_DIR") {
            if !directory.trim().is_empty() {
                config.output.directory = PathBuf::from(directory);
            }
        }

        if let Ok(base_name) = env::var("AMENDER_OUTPUT_BASE_NAME") {
            config.output.base_name = base_name;
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "AMENDER_OUTPUT_DIR - Override the directory saved output is written to (default: .)",
            "AMENDER_OUTPUT_BASE_NAME - Override the saved file name without extension (default: output)",
            "AMENDER_LOG_LEVEL - Override the logging filter when RUST_LOG is unset (default: warn)",
        ]
    }

    /// Validate configuration values that do not depend on the registry
    pub fn validate_config(config: &AmenderConfig) -> Result<(), AppError> {
        let base_name = &config.output.base_name;
        if base_name.trim().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "Output base name cannot be empty".to_string(),
            )
            .with_code("AMD-CONFIG-003"));
        }

        if base_name.contains('/') || base_name.contains('\\') {
            let mut error = AppError::new(
                ErrorCategory::ValidationError,
                "Output base name must not contain path separators".to_string(),
            )
            .with_code("AMD-CONFIG-003")
            .with_suggestion("Use [output] directory to choose where the file is written");
            error.add_context("base_name", base_name);
            return Err(error);
        }

        if config.output.directory.as_os_str().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "Output directory cannot be empty".to_string(),
            )
            .with_code("AMD-CONFIG-003"));
        }

        Ok(())
    }
}
