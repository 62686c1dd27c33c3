// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for OpenAI-compatible chat completion APIs.
//!
//! Provides [`ChatClient`] which handles request construction, bearer
//! authentication, and transient error retry. The base URL selects the
//! provider: OpenAI and Groq both speak this protocol.

use std::time::Duration;

use optiroute_core::OptirouteError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::{ApiErrorResponse, ChatMessage, ChatRequest, ChatResponse};

/// Base URL for the OpenAI API.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Base URL for Groq's OpenAI-compatible API.
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Per-request timeout. The routing layer above enforces none of its own,
/// so this is the only bound on a hung downstream call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for one OpenAI-compatible endpoint.
///
/// Manages bearer authentication, connection pooling, and retry logic for
/// transient errors (429, 500, 503).
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f64,
    max_retries: u32,
}

impl ChatClient {
    /// Creates a new chat client.
    ///
    /// # Arguments
    /// * `api_key` - Bearer token for authentication
    /// * `base_url` - API base, e.g. [`OPENAI_API_BASE`] or [`GROQ_API_BASE`]
    /// * `model` - Model identifier sent with every request
    /// * `temperature` - Sampling temperature sent with every request
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f64,
    ) -> Result<Self, OptirouteError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
            OptirouteError::Config(format!("invalid API key header value: {e}"))
        })?;
        auth.set_sensitive(true);
        headers.insert("authorization", auth);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| OptirouteError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            temperature,
            max_retries: 1,
        })
    }

    /// Returns the model identifier this client requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a single-turn completion request and returns the response text.
    ///
    /// On transient errors (429, 500, 503), retries once after a 1-second delay.
    pub async fn complete(&self, prompt: &str) -> Result<String, OptirouteError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.temperature,
        };
        let url = format!("{}/chat/completions", self.base_url);

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying completion request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| OptirouteError::Provider {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, model = %self.model, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| OptirouteError::Provider {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let chat: ChatResponse =
                    serde_json::from_str(&body).map_err(|e| OptirouteError::Provider {
                        message: format!("failed to parse API response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                let choice = chat.choices.into_iter().next().ok_or_else(|| {
                    OptirouteError::Provider {
                        message: "API response contained no choices".into(),
                        source: None,
                    }
                })?;
                return Ok(choice.message.content);
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(OptirouteError::Provider {
                    message: format!("API returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!(
                    "API error ({}): {}",
                    api_err.error.type_.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                )
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(OptirouteError::Provider {
                message,
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| OptirouteError::Provider {
            message: "completion request failed after retries".into(),
            source: None,
        }))
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
