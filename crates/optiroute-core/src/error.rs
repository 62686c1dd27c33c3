// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the OptiRoute workspace.

use thiserror::Error;

/// The primary error type used across OptiRoute crates.
///
/// The taxonomy mirrors the system's propagation policy: `Config` errors are
/// fatal and raised at construction time, before any request is served.
/// `Provider` errors are per-request and are caught at the router boundary,
/// never propagated to the router's caller.
#[derive(Debug, Error)]
pub enum OptirouteError {
    /// Configuration errors (missing credentials, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// LLM provider errors (network, auth, rate limiting, malformed response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Request history log errors (file I/O, serialization).
    #[error("history error: {source}")]
    History {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_context() {
        let err = OptirouteError::Config("GROQ_API_KEY not found".into());
        assert_eq!(
            err.to_string(),
            "configuration error: GROQ_API_KEY not found"
        );

        let err = OptirouteError::Provider {
            message: "API returned 429".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "provider error: API returned 429");
    }

    #[test]
    fn history_error_wraps_source() {
        let err = OptirouteError::History {
            source: Box::new(std::io::Error::other("disk full")),
        };
        assert!(err.to_string().contains("disk full"));
    }
}
