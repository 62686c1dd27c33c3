// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for OptiRoute.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, producing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level OptiRoute configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values; only
/// the API keys have no default (they may instead come from the providers'
/// conventional environment variables).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OptirouteConfig {
    /// Agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// OpenAI API settings (the smart tier).
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Groq API settings (the fast tier).
    #[serde(default)]
    pub groq: GroqConfig,

    /// Request history log settings.
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "optiroute".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// OpenAI API configuration for the smart tier.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// OpenAI API key. `None` falls back to the `OPENAI_API_KEY` env var.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model to use for complex queries.
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_openai_model(),
            temperature: default_temperature(),
        }
    }
}

fn default_openai_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

/// Groq API configuration for the fast tier.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GroqConfig {
    /// Groq API key. `None` falls back to the `GROQ_API_KEY` env var.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model to use for simple queries.
    #[serde(default = "default_groq_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_groq_model(),
            temperature: default_temperature(),
        }
    }
}

fn default_groq_model() -> String {
    "llama3-8b-8192".to_string()
}

/// Request history log configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    /// Path to the JSONL request log.
    #[serde(default = "default_history_path")]
    pub path: String,

    /// Estimated USD saved per request routed to the fast tier.
    #[serde(default = "default_savings_per_fast_route")]
    pub savings_per_fast_route_usd: f64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            savings_per_fast_route_usd: default_savings_per_fast_route(),
        }
    }
}

fn default_history_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("optiroute").join("history.jsonl"))
        .unwrap_or_else(|| std::path::PathBuf::from("history.jsonl"))
        .to_string_lossy()
        .into_owned()
}

fn default_savings_per_fast_route() -> f64 {
    0.02
}
