// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `optiroute shell` command implementation.
//!
//! Launches an interactive REPL with a colored prompt and readline history.
//! Each line is routed through the complexity analyzer to the matching model
//! tier; slash commands expose the request log.

use colored::Colorize;
use optiroute_core::OptirouteError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::app::App;
use crate::ask::print_envelope;
use crate::history::print_recent;
use crate::stats::print_stats;

/// Number of records `/history` shows, matching the `history` subcommand
/// default.
const SHELL_HISTORY_LIMIT: usize = 5;

/// Runs the `optiroute shell` interactive REPL.
pub async fn run_shell(app: App) -> Result<(), OptirouteError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| OptirouteError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "optiroute shell".bold().green());
    println!(
        "Type a prompt to route it. {} {} {} {} to exit.\n",
        "/history".yellow(),
        "/stats".yellow(),
        "/clear".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "optiroute".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }

                let _ = rl.add_history_entry(&line);

                if let Err(e) = handle_line(&app, trimmed).await {
                    eprintln!("{}: {e}", "error".red());
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Dispatch one REPL line: a slash command or a prompt to route.
async fn handle_line(app: &App, input: &str) -> Result<(), OptirouteError> {
    match input {
        "/stats" => {
            print_stats(&app.stats()?);
            Ok(())
        }
        "/history" => {
            let records = app.recent(SHELL_HISTORY_LIMIT)?;
            print_recent(&records);
            Ok(())
        }
        "/clear" => {
            app.clear()?;
            println!("{}", "history cleared".dimmed());
            Ok(())
        }
        _ if input.starts_with('/') => {
            eprintln!("{}: unknown command {input}", "error".red());
            Ok(())
        }
        prompt => {
            debug!(words = prompt.split_whitespace().count(), "routing shell prompt");
            let (envelope, elapsed_ms) = app.ask(prompt).await;
            print_envelope(&envelope, elapsed_ms);
            println!();
            Ok(())
        }
    }
}
