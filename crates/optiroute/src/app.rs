// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application wiring: router, providers, and history log.
//!
//! `App` owns one `RequestRouter` and one `HistoryLog` and is shared by all
//! subcommands. Routing stays stateless; every routed request is recorded
//! here, at the calling layer.

use std::sync::Arc;
use std::time::Instant;

use optiroute_config::model::OptirouteConfig;
use optiroute_core::OptirouteError;
use optiroute_history::{HistoryLog, RequestRecord, RouterStats};
use optiroute_openai::ChatProvider;
use optiroute_router::{ModelHandle, RequestRouter, ResponseEnvelope};
use tracing::warn;

/// Display name for the fast tier handle.
pub const FAST_DISPLAY_NAME: &str = "Llama 3 via Groq (Fast Model)";

/// Display name for the smart tier handle.
pub const SMART_DISPLAY_NAME: &str = "GPT-4 (Smart Model)";

/// The assembled application: router plus request log.
pub struct App {
    router: RequestRouter,
    history: HistoryLog,
    savings_per_fast_route_usd: f64,
}

impl App {
    /// Wire up providers, router, and history log from configuration.
    ///
    /// Missing API keys are caught here, before any prompt is served.
    pub fn from_config(config: &OptirouteConfig) -> Result<Self, OptirouteError> {
        let fast = ModelHandle::new(
            FAST_DISPLAY_NAME,
            Arc::new(ChatProvider::groq(&config.groq)?),
        );
        let smart = ModelHandle::new(
            SMART_DISPLAY_NAME,
            Arc::new(ChatProvider::openai(&config.openai)?),
        );
        let router = RequestRouter::new(fast, smart);
        let history = HistoryLog::open(&config.history.path)?;

        Ok(Self {
            router,
            history,
            savings_per_fast_route_usd: config.history.savings_per_fast_route_usd,
        })
    }

    /// Route a prompt, record it in the history log, and return the envelope
    /// together with the measured wall time in milliseconds.
    ///
    /// A history write failure is logged and swallowed; the caller still gets
    /// the response.
    pub async fn ask(&self, prompt: &str) -> (ResponseEnvelope, u64) {
        let started = Instant::now();
        let envelope = self.router.get_response(prompt).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let outcome = if envelope.success {
            Ok(envelope.response.clone().unwrap_or_default())
        } else {
            Err(envelope.error.clone().unwrap_or_default())
        };
        let record = RequestRecord::new(
            prompt,
            &envelope.model,
            envelope.verdict.target.to_string(),
            envelope.verdict.level.to_string(),
            envelope.verdict.word_count,
            outcome,
            elapsed_ms,
        );
        if let Err(e) = self.history.append(&record) {
            warn!(error = %e, "failed to record request in history log");
        }

        (envelope, elapsed_ms)
    }

    /// The most recent `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<RequestRecord>, OptirouteError> {
        self.history.recent(limit)
    }

    /// Aggregate routing stats over the full log.
    pub fn stats(&self) -> Result<RouterStats, OptirouteError> {
        self.history.stats(self.savings_per_fast_route_usd)
    }

    /// Reset history and stats to zero.
    pub fn clear(&self) -> Result<(), OptirouteError> {
        self.history.clear()
    }
}
