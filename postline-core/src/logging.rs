//! Tracing setup
//!
//! Library code only emits `tracing` events; binaries call [`init`] once to
//! install a subscriber. Events carry entity kinds and ids, never message
//! content or email addresses.
//!
//! ```bash
//! POSTLINE_LOG=debug pl messages
//! POSTLINE_LOG=postline_core::adapters=debug pl send "hi" --sender Alice
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "POSTLINE_LOG";

/// Build the filter: POSTLINE_LOG when set and valid, else `default_level`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a compact stderr subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
