//! Diagnostic logging for npm-depgraph.
//!
//! User-facing progress goes through the `ProgressReporter` port; this
//! module only wires up the `tracing` subscriber used for diagnostics
//! (per-request debug lines, failed lookups, renderer failures).

use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "npm_depgraph=info";

/// Initialize the tracing subscriber. Call once, before any logging occurs.
///
/// Level selection, first match wins:
/// 1. `verbose`: DEBUG for this crate
/// 2. `quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. INFO for this crate
pub fn init_logger(verbose: bool, quiet: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("npm_depgraph=debug")
    } else if quiet {
        EnvFilter::new("npm_depgraph=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
