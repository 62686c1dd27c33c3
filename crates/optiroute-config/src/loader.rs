// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./optiroute.toml` > `~/.config/optiroute/optiroute.toml`
//! > `/etc/optiroute/optiroute.toml` with environment variable overrides via
//! `OPTIROUTE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::OptirouteConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/optiroute/optiroute.toml` (system-wide)
/// 3. `~/.config/optiroute/optiroute.toml` (user XDG config)
/// 4. `./optiroute.toml` (local directory)
/// 5. `OPTIROUTE_*` environment variables
pub fn load_config() -> Result<OptirouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OptirouteConfig::default()))
        .merge(Toml::file("/etc/optiroute/optiroute.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("optiroute/optiroute.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("optiroute.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<OptirouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OptirouteConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<OptirouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OptirouteConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `OPTIROUTE_OPENAI_API_KEY` must map to
/// `openai.api_key`, not `openai.api.key`.
fn env_provider() -> Env {
    Env::prefixed("OPTIROUTE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: OPTIROUTE_OPENAI_API_KEY -> "openai_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("groq_", "groq.", 1)
            .replacen("history_", "history.", 1);
        mapped.into()
    })
}
