// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the OptiRoute configuration system.

use optiroute_config::diagnostic::{suggest_key, ConfigError};
use optiroute_config::model::OptirouteConfig;
use optiroute_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_optiroute_config() {
    let toml = r#"
[agent]
name = "test-router"
log_level = "debug"

[openai]
api_key = "sk-test-123"
model = "gpt-4"
temperature = 0.5

[groq]
api_key = "gsk-test-456"
model = "llama3-8b-8192"
temperature = 0.9

[history]
path = "/tmp/history.jsonl"
savings_per_fast_route_usd = 0.05
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-router");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-test-123"));
    assert_eq!(config.openai.model, "gpt-4");
    assert_eq!(config.openai.temperature, 0.5);
    assert_eq!(config.groq.api_key.as_deref(), Some("gsk-test-456"));
    assert_eq!(config.groq.temperature, 0.9);
    assert_eq!(config.history.path, "/tmp/history.jsonl");
    assert_eq!(config.history.savings_per_fast_route_usd, 0.05);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "optiroute");
    assert_eq!(config.agent.log_level, "info");
    assert!(config.openai.api_key.is_none());
    assert_eq!(config.openai.model, "gpt-4");
    assert_eq!(config.openai.temperature, 0.7);
    assert!(config.groq.api_key.is_none());
    assert_eq!(config.groq.model, "llama3-8b-8192");
    assert_eq!(config.groq.temperature, 0.7);
    assert!(config.history.path.ends_with("history.jsonl"));
    assert_eq!(config.history.savings_per_fast_route_usd, 0.02);
}

/// Unknown field in a section produces an error mentioning the bad key.
#[test]
fn unknown_field_produces_error() {
    let toml = r#"
[openai]
api_kye = "sk-test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kye"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// The high-level entry point attaches a fuzzy suggestion to unknown keys.
#[test]
fn load_and_validate_str_suggests_correction() {
    let errors = load_and_validate_str("[groq]\nmodle = \"llama3-8b-8192\"\n")
        .expect_err("typo should fail");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "modle" && suggestion.as_deref() == Some("model")
    )));
}

/// Semantic validation runs after deserialization.
#[test]
fn load_and_validate_str_rejects_bad_temperature() {
    let errors = load_and_validate_str("[openai]\ntemperature = 9.0\n")
        .expect_err("out-of-range temperature should fail");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("openai.temperature")
    )));
}

/// Env-style override merges over TOML values.
#[test]
fn programmatic_override_wins_over_toml() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let toml_content = r#"
[agent]
name = "from-toml"
"#;

    let config: OptirouteConfig = Figment::new()
        .merge(Serialized::defaults(OptirouteConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("agent.name", "from-env"))
        .extract()
        .expect("merge should succeed");

    assert_eq!(config.agent.name, "from-env");
}

/// Suggestion helper is usable standalone.
#[test]
fn suggest_key_finds_close_match() {
    assert_eq!(
        suggest_key("temprature", &["api_key", "model", "temperature"]),
        Some("temperature".to_string())
    );
}
