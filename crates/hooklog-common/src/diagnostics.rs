//! Tracing setup for the hook binaries.
//!
//! Diagnostics go to stderr and are off unless asked for: the host must never
//! see output it did not expect. `HOOKLOG_LOG` takes an `EnvFilter` directive
//! and wins over `-v`.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_FILTER_ENV: &str = "HOOKLOG_LOG";

/// Filter level for a `-v` count.
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "off",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
