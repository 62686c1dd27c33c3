// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `optiroute history` output: the recent-request listing.

use colored::Colorize;
use optiroute_history::RequestRecord;

/// Print a newest-first record listing, one line per request.
pub fn print_recent(records: &[RequestRecord]) {
    if records.is_empty() {
        println!("no requests recorded yet");
        return;
    }
    for record in records {
        print_record(record);
    }
}

fn print_record(record: &RequestRecord) {
    let outcome = if record.success {
        "ok".green()
    } else {
        "failed".red()
    };
    println!(
        "{} {} [{}] {}",
        record.created_at.dimmed(),
        outcome,
        record.model,
        truncate(&record.prompt, 60),
    );
    if let Some(error) = &record.error {
        println!("  {}", error.red());
    }
}

/// Shorten long prompts for the one-line listing.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
