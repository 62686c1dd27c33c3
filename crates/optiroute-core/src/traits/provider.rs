// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for LLM provider integrations.

use async_trait::async_trait;

use crate::error::OptirouteError;

/// Adapter for a single language model endpoint.
///
/// A provider exposes one operation: text in, text out. All downstream
/// failure modes (network, auth, quota, malformed response) collapse into
/// [`OptirouteError::Provider`] at this seam, so the router above it sees a
/// single error channel.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + 'static {
    /// Human-readable name of this provider instance (e.g. "openai", "groq").
    fn name(&self) -> &str;

    /// Model identifier this provider invokes (e.g. "gpt-4").
    fn model_id(&self) -> &str;

    /// Sends the prompt to the model and returns the response text.
    async fn invoke(&self, prompt: &str) -> Result<String, OptirouteError>;
}
