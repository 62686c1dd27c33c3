// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request log records and aggregate routing stats.

use serde::{Deserialize, Serialize};

/// A single routed request as recorded by the calling layer.
///
/// The response time is measured by the caller around the router call, never
/// inside the router itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestRecord {
    /// RFC 3339 timestamp of when the request completed.
    pub created_at: String,
    /// The prompt that was routed.
    pub prompt: String,
    /// Display string of the model that was invoked.
    pub model: String,
    /// Routing tier: "fast" or "smart".
    pub target: String,
    /// Classified complexity: "low" or "high".
    pub complexity: String,
    /// Word count the analyzer computed.
    pub word_count: usize,
    /// Whether the model invocation succeeded.
    pub success: bool,
    /// Response text, present iff `success`.
    pub response: Option<String>,
    /// Stringified invocation error, present iff not `success`.
    pub error: Option<String>,
    /// Caller-measured wall time for the full routed request.
    pub response_time_ms: u64,
}

impl RequestRecord {
    /// Create a record stamped with the current time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        target: impl Into<String>,
        complexity: impl Into<String>,
        word_count: usize,
        outcome: Result<String, String>,
        response_time_ms: u64,
    ) -> Self {
        let (success, response, error) = match outcome {
            Ok(text) => (true, Some(text), None),
            Err(message) => (false, None, Some(message)),
        };
        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            prompt: prompt.into(),
            model: model.into(),
            target: target.into(),
            complexity: complexity.into(),
            word_count,
            success,
            response,
            error,
            response_time_ms,
        }
    }
}

/// Aggregate counters over the request log.
///
/// `estimated_savings_usd` is a rough figure: the configured per-request
/// estimate times the number of fast-tier routes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouterStats {
    /// Total requests recorded.
    pub total_requests: u64,
    /// Requests routed to the fast tier.
    pub fast_requests: u64,
    /// Requests routed to the smart tier.
    pub smart_requests: u64,
    /// Requests whose model invocation failed.
    pub failed_requests: u64,
    /// Estimated USD saved by fast-tier routing.
    pub estimated_savings_usd: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_outcome_sets_response_only() {
        let record = RequestRecord::new(
            "What is Python?",
            "⚡ Llama 3 via Groq (Fast Model)",
            "fast",
            "low",
            3,
            Ok("A programming language.".to_string()),
            120,
        );
        assert!(record.success);
        assert_eq!(record.response.as_deref(), Some("A programming language."));
        assert!(record.error.is_none());
    }

    #[test]
    fn failure_outcome_sets_error_only() {
        let record = RequestRecord::new(
            "why?",
            "🧠 GPT-4 (Smart Model)",
            "smart",
            "high",
            1,
            Err("provider error: API returned 503".to_string()),
            45,
        );
        assert!(!record.success);
        assert!(record.response.is_none());
        assert!(record.error.as_deref().unwrap().contains("503"));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = RequestRecord::new("hi", "⚡ Fast", "fast", "low", 1, Ok("hello".into()), 9);
        let line = serde_json::to_string(&record).unwrap();
        let parsed: RequestRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.prompt, "hi");
        assert_eq!(parsed.word_count, 1);
        assert!(parsed.success);
    }
}
