// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request routing over a registry of model handles.
//!
//! The router owns one [`ModelHandle`] per [`RouteTarget`], delegates
//! classification to the analyzer, invokes the selected handle, and wraps
//! the outcome in a uniform [`ResponseEnvelope`]. A downstream failure never
//! escapes [`RequestRouter::get_response`]; it becomes a failure envelope.

use std::collections::HashMap;
use std::sync::Arc;

use optiroute_core::ProviderAdapter;
use tracing::{info, warn};

use crate::analyzer::{ComplexityAnalyzer, ComplexityVerdict, RouteTarget};

/// An immutable handle to a provider/model pair.
///
/// Handles are created once at router construction and shared read-only for
/// the lifetime of the router, so concurrent callers need no locking.
#[derive(Clone)]
pub struct ModelHandle {
    display_name: String,
    provider: Arc<dyn ProviderAdapter>,
}

impl ModelHandle {
    /// Create a handle wrapping the given provider.
    pub fn new(display_name: impl Into<String>, provider: Arc<dyn ProviderAdapter>) -> Self {
        Self {
            display_name: display_name.into(),
            provider,
        }
    }

    /// Display name shown to users (e.g. "GPT-4 (Smart Model)").
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Model identifier of the underlying provider.
    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("display_name", &self.display_name)
            .field("provider", &self.provider.name())
            .field("model_id", &self.provider.model_id())
            .finish()
    }
}

/// Uniform result wrapper returned to the router's caller.
///
/// Invariant: exactly one of `response`/`error` is `Some`. The verdict and
/// model name are populated even on failure -- the routing decision was made
/// correctly regardless of what happened downstream.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    /// Whether the model invocation succeeded.
    pub success: bool,
    /// Response text, present iff `success`.
    pub response: Option<String>,
    /// Display string for the model that was invoked, icon included.
    pub model: String,
    /// The complexity verdict that drove the routing decision.
    pub verdict: ComplexityVerdict,
    /// Stringified invocation error, present iff not `success`.
    pub error: Option<String>,
}

/// Routes prompts to the appropriate model tier.
///
/// Holds a registry mapping each [`RouteTarget`] to a [`ModelHandle`]. The
/// registry is populated at construction and never mutated per-request, so a
/// single router can serve concurrent callers.
pub struct RequestRouter {
    analyzer: ComplexityAnalyzer,
    targets: HashMap<RouteTarget, ModelHandle>,
}

impl RequestRouter {
    /// Create a router with the two standard tiers.
    pub fn new(fast: ModelHandle, smart: ModelHandle) -> Self {
        let mut targets = HashMap::new();
        targets.insert(RouteTarget::Fast, fast);
        targets.insert(RouteTarget::Smart, smart);
        Self {
            analyzer: ComplexityAnalyzer::new(),
            targets,
        }
    }

    /// Register or replace the handle for a tier.
    ///
    /// Exists so additional tiers can be wired in without touching the
    /// decision logic.
    pub fn register(&mut self, target: RouteTarget, handle: ModelHandle) {
        self.targets.insert(target, handle);
    }

    /// Look up the handle a tier would route to.
    pub fn handle_for(&self, target: RouteTarget) -> Option<&ModelHandle> {
        self.targets.get(&target)
    }

    /// Route the prompt to the best model and return the wrapped outcome.
    ///
    /// Never returns an error: invocation failures are caught and converted
    /// to a failure envelope with the verdict still populated. Callers are
    /// responsible for rejecting empty prompts before calling.
    pub async fn get_response(&self, prompt: &str) -> ResponseEnvelope {
        let verdict = self.analyzer.analyze(prompt);
        let target = verdict.target;

        let Some(handle) = self.targets.get(&target) else {
            // Unreachable via `new`, possible only with a hand-rolled registry.
            warn!(target = %target, "no model handle registered for tier");
            return ResponseEnvelope {
                success: false,
                response: None,
                model: target.to_string(),
                verdict,
                error: Some(format!("no model registered for {target} tier")),
            };
        };

        info!(
            target = %target,
            level = %verdict.level,
            word_count = verdict.word_count,
            model = handle.model_id(),
            "routing prompt"
        );

        let model = format!("{} {}", verdict.icon, handle.display_name());

        match handle.provider.invoke(prompt).await {
            Ok(text) => ResponseEnvelope {
                success: true,
                response: Some(text),
                model,
                verdict,
                error: None,
            },
            Err(e) => {
                warn!(target = %target, error = %e, "model invocation failed");
                ResponseEnvelope {
                    success: false,
                    response: None,
                    model,
                    verdict,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ComplexityLevel;
    use async_trait::async_trait;
    use optiroute_core::OptirouteError;

    struct StaticProvider {
        name: &'static str,
        model: &'static str,
        text: &'static str,
    }

    #[async_trait]
    impl ProviderAdapter for StaticProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn model_id(&self) -> &str {
            self.model
        }

        async fn invoke(&self, _prompt: &str) -> Result<String, OptirouteError> {
            Ok(self.text.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ProviderAdapter for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        fn model_id(&self) -> &str {
            "failing-1"
        }

        async fn invoke(&self, _prompt: &str) -> Result<String, OptirouteError> {
            Err(OptirouteError::Provider {
                message: "simulated provider outage".into(),
                source: None,
            })
        }
    }

    fn test_router() -> RequestRouter {
        let fast = ModelHandle::new(
            "Llama 3 via Groq (Fast Model)",
            Arc::new(StaticProvider {
                name: "groq",
                model: "llama3-8b-8192",
                text: "fast answer",
            }),
        );
        let smart = ModelHandle::new(
            "GPT-4 (Smart Model)",
            Arc::new(StaticProvider {
                name: "openai",
                model: "gpt-4",
                text: "smart answer",
            }),
        );
        RequestRouter::new(fast, smart)
    }

    #[tokio::test]
    async fn simple_prompt_routes_to_fast_model() {
        let router = test_router();
        let envelope = router.get_response("What is Python?").await;

        assert!(envelope.success);
        assert_eq!(envelope.response.as_deref(), Some("fast answer"));
        assert!(envelope.error.is_none());
        assert_eq!(envelope.verdict.target, RouteTarget::Fast);
        assert_eq!(envelope.model, "⚡ Llama 3 via Groq (Fast Model)");
    }

    #[tokio::test]
    async fn complex_prompt_routes_to_smart_model() {
        let router = test_router();
        let envelope = router
            .get_response("Explain the differences between REST and GraphQL APIs")
            .await;

        assert!(envelope.success);
        assert_eq!(envelope.response.as_deref(), Some("smart answer"));
        assert_eq!(envelope.verdict.target, RouteTarget::Smart);
        assert_eq!(envelope.verdict.level, ComplexityLevel::High);
        assert_eq!(envelope.model, "🧠 GPT-4 (Smart Model)");
    }

    #[tokio::test]
    async fn success_envelope_returns_provider_text_verbatim() {
        let fast = ModelHandle::new(
            "Fast",
            Arc::new(StaticProvider {
                name: "groq",
                model: "llama3-8b-8192",
                text: "T",
            }),
        );
        let smart = ModelHandle::new(
            "Smart",
            Arc::new(StaticProvider {
                name: "openai",
                model: "gpt-4",
                text: "unused",
            }),
        );
        let router = RequestRouter::new(fast, smart);
        let envelope = router.get_response("hello there").await;

        assert!(envelope.success);
        assert_eq!(envelope.response.as_deref(), Some("T"));
        assert!(envelope.error.is_none());
    }

    #[tokio::test]
    async fn invocation_failure_becomes_failure_envelope() {
        let fast = ModelHandle::new("Fast", Arc::new(FailingProvider));
        let smart = ModelHandle::new(
            "Smart",
            Arc::new(StaticProvider {
                name: "openai",
                model: "gpt-4",
                text: "unused",
            }),
        );
        let router = RequestRouter::new(fast, smart);

        let prompt = "What is Python?";
        let envelope = router.get_response(prompt).await;

        assert!(!envelope.success);
        assert!(envelope.response.is_none());
        let error = envelope.error.as_deref().expect("error must be set");
        assert!(error.contains("simulated provider outage"), "got: {error}");

        // The verdict is still populated and matches a standalone analysis.
        let standalone = ComplexityAnalyzer::new().analyze(prompt);
        assert_eq!(envelope.verdict, standalone);
        assert_eq!(envelope.model, "⚡ Fast");
    }

    #[tokio::test]
    async fn failure_on_smart_tier_reports_smart_verdict() {
        let fast = ModelHandle::new(
            "Fast",
            Arc::new(StaticProvider {
                name: "groq",
                model: "llama3-8b-8192",
                text: "unused",
            }),
        );
        let smart = ModelHandle::new("Smart", Arc::new(FailingProvider));
        let router = RequestRouter::new(fast, smart);

        let envelope = router.get_response("why is the sky blue").await;
        assert!(!envelope.success);
        assert_eq!(envelope.verdict.target, RouteTarget::Smart);
    }

    #[tokio::test]
    async fn envelope_has_exactly_one_of_response_or_error() {
        let router = test_router();

        let ok = router.get_response("short prompt").await;
        assert!(ok.response.is_some() && ok.error.is_none());

        let fast = ModelHandle::new("Fast", Arc::new(FailingProvider));
        let smart = ModelHandle::new("Smart", Arc::new(FailingProvider));
        let failing = RequestRouter::new(fast, smart);

        let failed = failing.get_response("short prompt").await;
        assert!(failed.response.is_none() && failed.error.is_some());
    }

    #[tokio::test]
    async fn handle_lookup_by_tier() {
        let router = test_router();
        assert_eq!(
            router.handle_for(RouteTarget::Fast).unwrap().model_id(),
            "llama3-8b-8192"
        );
        assert_eq!(
            router.handle_for(RouteTarget::Smart).unwrap().model_id(),
            "gpt-4"
        );
    }

    #[tokio::test]
    async fn register_replaces_a_tier_handle() {
        let mut router = test_router();
        router.register(
            RouteTarget::Fast,
            ModelHandle::new(
                "Replacement",
                Arc::new(StaticProvider {
                    name: "groq",
                    model: "llama-3.1-8b-instant",
                    text: "replaced",
                }),
            ),
        );

        let envelope = router.get_response("hi").await;
        assert_eq!(envelope.response.as_deref(), Some("replaced"));
        assert_eq!(envelope.model, "⚡ Replacement");
    }
}
