// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OptiRoute - a cost-optimizing prompt router for LLM workloads.
//!
//! This is the binary entry point. Simple prompts are routed to a fast,
//! cheap model; complex prompts go to a more capable one.

mod app;
mod ask;
mod history;
mod shell;
mod stats;

use clap::{Parser, Subcommand};

use crate::app::App;

/// OptiRoute - a cost-optimizing prompt router for LLM workloads.
#[derive(Parser, Debug)]
#[command(name = "optiroute", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive REPL session.
    Shell,
    /// Route a single prompt and print the response.
    Ask {
        /// The prompt to route.
        prompt: String,
    },
    /// Show recent routed requests.
    History {
        /// Number of requests to show, newest first.
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Show aggregate routing stats and estimated savings.
    Stats,
    /// Clear the request history, resetting stats to zero.
    Clear,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match optiroute_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            optiroute_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    // History and stats never need provider credentials; only routing
    // commands build the full app.
    let result = match cli.command {
        Some(Commands::Shell) | None => match App::from_config(&config) {
            Ok(app) => shell::run_shell(app).await,
            Err(e) => Err(e),
        },
        Some(Commands::Ask { prompt }) => match App::from_config(&config) {
            Ok(app) => ask::run_ask(&app, &prompt).await,
            Err(e) => Err(e),
        },
        Some(Commands::History { limit }) => open_log(&config).and_then(|log| {
            let records = log.recent(limit)?;
            history::print_recent(&records);
            Ok(())
        }),
        Some(Commands::Stats) => open_log(&config).and_then(|log| {
            let stats = log.stats(config.history.savings_per_fast_route_usd)?;
            stats::print_stats(&stats);
            Ok(())
        }),
        Some(Commands::Clear) => open_log(&config).and_then(|log| {
            log.clear()?;
            println!("history cleared");
            Ok(())
        }),
    };

    if let Err(e) = result {
        eprintln!("optiroute: {e}");
        std::process::exit(1);
    }
}

fn open_log(
    config: &optiroute_config::model::OptirouteConfig,
) -> Result<optiroute_history::HistoryLog, optiroute_core::OptirouteError> {
    optiroute_history::HistoryLog::open(&config.history.path)
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("optiroute={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed)
        let config =
            optiroute_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.agent.name, "optiroute");
    }
}
