// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock LLM provider adapter for deterministic testing.
//!
//! `MockProvider` implements `ProviderAdapter` with pre-configured outcomes,
//! enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use optiroute_core::{OptirouteError, ProviderAdapter};

/// A mock LLM provider that returns pre-configured outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty,
/// a default "mock response" text is returned.
pub struct MockProvider {
    name: String,
    model_id: String,
    outcomes: Arc<Mutex<VecDeque<Result<String, String>>>>,
}

impl MockProvider {
    /// Create a new mock provider with an empty outcome queue.
    pub fn new(name: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model_id: model_id.into(),
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Create a mock provider pre-loaded with successful responses.
    pub fn with_responses(
        name: impl Into<String>,
        model_id: impl Into<String>,
        responses: Vec<String>,
    ) -> Self {
        let queued: VecDeque<_> = responses.into_iter().map(Ok).collect();
        Self {
            name: name.into(),
            model_id: model_id.into(),
            outcomes: Arc::new(Mutex::new(queued)),
        }
    }

    /// Add a successful response to the end of the queue.
    pub async fn add_response(&self, text: impl Into<String>) {
        self.outcomes.lock().await.push_back(Ok(text.into()));
    }

    /// Add a failure to the end of the queue.
    pub async fn add_failure(&self, message: impl Into<String>) {
        self.outcomes.lock().await.push_back(Err(message.into()));
    }

    /// Pop the next outcome, or return the default success.
    async fn next_outcome(&self) -> Result<String, String> {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("mock response".to_string()))
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn invoke(&self, _prompt: &str) -> Result<String, OptirouteError> {
        self.next_outcome().await.map_err(|message| {
            OptirouteError::Provider {
                message,
                source: None,
            }
        })
    }
}
