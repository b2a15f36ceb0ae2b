// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — lgo-verify
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Runs the V13.0 verification with built-in inputs and prints the report.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lgo_core::verification::run_verification;
use lgo_types::config::VerificationConfig;

/// Diagnostics go to stderr so stdout carries only the report.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = VerificationConfig::default();
    let report = run_verification(&config).context("structural verification failed")?;
    tracing::info!(
        consistent = report.gravity.is_consistent,
        "verification complete"
    );

    println!("{report}");
    Ok(())
}
