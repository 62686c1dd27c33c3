// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as temperature ranges and non-empty paths.

use crate::diagnostic::ConfigError;
use crate::model::OptirouteConfig;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &OptirouteConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !VALID_LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of {}, got `{}`",
                VALID_LOG_LEVELS.join(", "),
                config.agent.log_level
            ),
        });
    }

    if config.openai.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "openai.model must not be empty".to_string(),
        });
    }

    if config.groq.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "groq.model must not be empty".to_string(),
        });
    }

    for (section, temperature) in [
        ("openai", config.openai.temperature),
        ("groq", config.groq.temperature),
    ] {
        if !(0.0..=2.0).contains(&temperature) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "{section}.temperature must be between 0.0 and 2.0, got {temperature}"
                ),
            });
        }
    }

    if config.history.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "history.path must not be empty".to_string(),
        });
    }

    if config.history.savings_per_fast_route_usd < 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "history.savings_per_fast_route_usd must be non-negative, got {}",
                config.history.savings_per_fast_route_usd
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
