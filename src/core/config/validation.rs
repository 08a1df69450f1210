#![allow(clippy::result_large_err)]

use super::{AmenderConfig, ConfigLoader};
use crate::core::error::AppError;
use crate::core::registry::Registry;
use crate::core::types::ErrorCategory;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules, including preset keys against `registry`
    pub fn validate(config: &AmenderConfig, registry: &Registry) -> Result<(), AppError> {
        ConfigLoader::validate_config(config)?;

        for (name, keys) in &config.presets {
            if keys.is_empty() {
                let mut error = AppError::new(
                    ErrorCategory::ValidationError,
                    format!("preset '{}' must list at least one transform", name),
                )
                .with_code("AMD-CONFIG-004");
                error.add_context("preset", name);
                return Err(error);
            }

            if let Some(unknown) = keys.iter().find(|key| registry.get(key).is_none()) {
                let mut error = AppError::new(
                    ErrorCategory::ValidationError,
                    format!("preset '{}' references unknown transform '{}'", name, unknown),
                )
                .with_code("AMD-CONFIG-005")
                .with_suggestion("Run `amender list` to see the available keys");
                error.add_context("preset", name);
                error.add_context("key", unknown);
                return Err(error);
            }
        }

        Ok(())
    }
}
