// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic prompt complexity analysis.
//!
//! Classifies prompts into Low/High complexity using two zero-cost signals:
//! word count and a fixed reasoning-keyword list. No LLM pre-call, no
//! network, no latency. Either signal alone is enough to escalate.

use strum::{Display, EnumString};

/// Word count above which a prompt is considered complex.
pub const WORD_COUNT_THRESHOLD: usize = 15;

/// Keywords that indicate a prompt needs multi-step reasoning.
///
/// Matched as case-insensitive substrings, not whole words: "explained"
/// matches "explain". "how does" is a keyword while standalone "how" is
/// not; that asymmetry is deliberate and pinned by tests.
pub const REASONING_KEYWORDS: &[&str] = &[
    "explain",
    "analyze",
    "compare",
    "evaluate",
    "why",
    "how does",
    "what is the difference",
    "reasoning",
    "elaborate",
    "justify",
];

const HIGH_REASON: &str = "Complex query detected - requires advanced reasoning";
const LOW_REASON: &str = "Simple query - optimizing for speed and cost";

/// Prompt complexity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ComplexityLevel {
    /// Short prompt with no reasoning keywords; routed to the fast model.
    Low,
    /// Long prompt or reasoning keyword present; routed to the smart model.
    High,
}

/// Routing tiers the analyzer can select.
///
/// Tagged-variant selection so additional tiers (e.g. an "ultra" tier) can
/// be added without changing the decision function's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RouteTarget {
    /// Cheap, low-latency model for simple queries.
    Fast,
    /// High-quality model for queries that need reasoning.
    Smart,
}

/// Result of analyzing a prompt's complexity.
///
/// Fully determined by the prompt text: same prompt, same verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityVerdict {
    /// Number of whitespace-delimited tokens in the prompt.
    pub word_count: usize,
    /// Whether any reasoning keyword matched.
    pub has_reasoning_keyword: bool,
    /// Classified complexity level.
    pub level: ComplexityLevel,
    /// Selected routing tier.
    pub target: RouteTarget,
    /// Human-readable reason for the classification.
    pub reason: &'static str,
    /// Display hint for the selected tier.
    pub icon: &'static str,
}

/// Heuristic complexity analyzer with zero cost and zero latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexityAnalyzer;

impl ComplexityAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyze a prompt and produce a routing verdict.
    ///
    /// Total over all strings: a whitespace-only prompt has word count 0
    /// and classifies Low. No side effects, no failure modes.
    pub fn analyze(&self, prompt: &str) -> ComplexityVerdict {
        let word_count = prompt.split_whitespace().count();
        let lower = prompt.to_lowercase();
        let has_reasoning_keyword = REASONING_KEYWORDS.iter().any(|k| lower.contains(k));

        if has_reasoning_keyword || word_count > WORD_COUNT_THRESHOLD {
            ComplexityVerdict {
                word_count,
                has_reasoning_keyword,
                level: ComplexityLevel::High,
                target: RouteTarget::Smart,
                reason: HIGH_REASON,
                icon: "🧠",
            }
        } else {
            ComplexityVerdict {
                word_count,
                has_reasoning_keyword,
                level: ComplexityLevel::Low,
                target: RouteTarget::Fast,
                reason: LOW_REASON,
                icon: "⚡",
            }
        }
    }
}
