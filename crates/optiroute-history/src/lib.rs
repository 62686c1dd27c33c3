// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request history and routing stats for OptiRoute.
//!
//! This crate is the calling layer's append-only log: each routed request is
//! recorded as a [`RequestRecord`] in a JSONL file, and [`RouterStats`]
//! aggregates counts and the estimated fast-route savings. The router core
//! never touches this crate; it stays stateless.

pub mod log;
pub mod record;

pub use log::HistoryLog;
pub use record::{RequestRecord, RouterStats};
