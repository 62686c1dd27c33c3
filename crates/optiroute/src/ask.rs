// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `optiroute ask` command implementation.
//!
//! Routes a single prompt and prints the result.

use colored::Colorize;
use optiroute_core::OptirouteError;
use optiroute_router::ResponseEnvelope;

use crate::app::App;

/// Run the `optiroute ask` command for one prompt.
pub async fn run_ask(app: &App, prompt: &str) -> Result<(), OptirouteError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        eprintln!("{}: prompt must not be empty", "error".red());
        return Err(OptirouteError::Internal("empty prompt".to_string()));
    }

    let (envelope, elapsed_ms) = app.ask(trimmed).await;
    print_envelope(&envelope, elapsed_ms);
    Ok(())
}

/// Print a routed response: model line, routing details, then the body.
pub fn print_envelope(envelope: &ResponseEnvelope, elapsed_ms: u64) {
    println!("{}", envelope.model.bold());
    println!(
        "{}",
        format!(
            "complexity: {} | words: {} | {} | {elapsed_ms}ms",
            envelope.verdict.level, envelope.verdict.word_count, envelope.verdict.reason
        )
        .dimmed()
    );

    match (&envelope.response, &envelope.error) {
        (Some(text), _) => println!("\n{text}"),
        (None, Some(error)) => eprintln!("\n{}: {error}", "error".red()),
        (None, None) => eprintln!("\n{}: empty response envelope", "error".red()),
    }
}
