//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Diagnostics always go to stderr so they never mix with rendered tables or JSON on
//! stdout. `RUST_LOG` wins when set; otherwise the level follows `-v`.
//!
//! - 0 (no `-v`): warn
//! - 1 (`-v`): debug
//! - 2+ (`-vv`): trace

use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Dependencies stay at warn to keep -v readable.
        EnvFilter::new(format!(
            "warn,orgtable={level},orgtable_cli={level}",
            level = level
        ))
    })
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(verbosity > 1)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(level_for(verbosity)))
        .with(layer)
        .try_init();
}
