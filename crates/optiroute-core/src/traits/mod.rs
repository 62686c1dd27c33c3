// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.

pub mod provider;

pub use provider::ProviderAdapter;
