// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for OptiRoute integration tests.
//!
//! Provides mock provider adapters for fast, deterministic, CI-runnable
//! tests without external services.

pub mod mock_provider;

pub use mock_provider::MockProvider;
