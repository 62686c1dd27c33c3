// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt complexity analysis and model routing for OptiRoute.
//!
//! This crate provides:
//! - [`ComplexityAnalyzer`]: heuristic complexity classification (zero-cost, zero-latency)
//! - [`RequestRouter`]: fast/smart model selection with uniform result envelopes
//!
//! The router sits between the caller (CLI, HTTP handler) and the model
//! providers, picking the cheap model for simple prompts and escalating to
//! the capable one when a prompt needs reasoning. Philosophy: high slope
//! beats high intercept -- optimize for speed and cost when possible,
//! escalate only when necessary.

pub mod analyzer;
pub mod router;

pub use analyzer::{
    ComplexityAnalyzer, ComplexityLevel, ComplexityVerdict, RouteTarget, REASONING_KEYWORDS,
    WORD_COUNT_THRESHOLD,
};
pub use router::{ModelHandle, RequestRouter, ResponseEnvelope};
