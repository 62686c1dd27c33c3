// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible provider adapters for OptiRoute.
//!
//! This crate implements [`ProviderAdapter`] over the chat completions
//! protocol. Both of the router's tiers are served from here: the smart
//! tier through the OpenAI API and the fast tier through Groq's
//! OpenAI-compatible endpoint.

pub mod client;
pub mod types;

use async_trait::async_trait;
use optiroute_config::model::{GroqConfig, OpenAiConfig};
use optiroute_core::{OptirouteError, ProviderAdapter};

use crate::client::{ChatClient, GROQ_API_BASE, OPENAI_API_BASE};

/// A chat-completions provider bound to one endpoint and model.
pub struct ChatProvider {
    name: String,
    client: ChatClient,
}

impl ChatProvider {
    /// Build the smart-tier provider against the OpenAI API.
    ///
    /// The API key comes from config or the `OPENAI_API_KEY` environment
    /// variable; absence is a fatal configuration error raised here, before
    /// any request is served.
    pub fn openai(config: &OpenAiConfig) -> Result<Self, OptirouteError> {
        let api_key = resolve_api_key(config.api_key.as_deref(), "OPENAI_API_KEY")?;
        Ok(Self {
            name: "openai".to_string(),
            client: ChatClient::new(
                &api_key,
                OPENAI_API_BASE,
                config.model.clone(),
                config.temperature,
            )?,
        })
    }

    /// Build the fast-tier provider against Groq's OpenAI-compatible API.
    ///
    /// The API key comes from config or the `GROQ_API_KEY` environment
    /// variable; absence is a fatal configuration error.
    pub fn groq(config: &GroqConfig) -> Result<Self, OptirouteError> {
        let api_key = resolve_api_key(config.api_key.as_deref(), "GROQ_API_KEY")?;
        Ok(Self {
            name: "groq".to_string(),
            client: ChatClient::new(
                &api_key,
                GROQ_API_BASE,
                config.model.clone(),
                config.temperature,
            )?,
        })
    }

    /// Build a provider against an arbitrary OpenAI-compatible base URL.
    ///
    /// Used for self-hosted compatible endpoints and for tests.
    pub fn custom(
        name: impl Into<String>,
        api_key: &str,
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f64,
    ) -> Result<Self, OptirouteError> {
        Ok(Self {
            name: name.into(),
            client: ChatClient::new(api_key, base_url, model, temperature)?,
        })
    }
}

#[async_trait]
impl ProviderAdapter for ChatProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model_id(&self) -> &str {
        self.client.model()
    }

    async fn invoke(&self, prompt: &str) -> Result<String, OptirouteError> {
        self.client.complete(prompt).await
    }
}

/// Resolve an API key from config, falling back to the provider's
/// conventional environment variable.
fn resolve_api_key(configured: Option<&str>, env_var: &str) -> Result<String, OptirouteError> {
    if let Some(key) = configured {
        if !key.trim().is_empty() {
            return Ok(key.to_string());
        }
    }
    match std::env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(OptirouteError::Config(format!(
            "{env_var} not found in config or environment variables"
        ))),
    }
}
