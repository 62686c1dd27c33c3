// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `optiroute stats` output: aggregate routing counters.

use colored::Colorize;
use optiroute_history::RouterStats;

/// Print the aggregate counters and the estimated fast-tier savings.
pub fn print_stats(stats: &RouterStats) {
    println!("{}", "routing stats".bold());
    println!("  total requests:  {}", stats.total_requests);
    println!("  fast routed:     {}", stats.fast_requests);
    println!("  smart routed:    {}", stats.smart_requests);
    println!("  failed:          {}", stats.failed_requests);
    println!(
        "  est. savings:    {}",
        format!("${:.2}", stats.estimated_savings_usd).green()
    );
}
