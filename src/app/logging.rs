//! Tracing subscriber setup for the CLI.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MPLSGEN_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Logs go to stderr; stdout carries script text.
///
/// Calling this more than once keeps the first subscriber.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(filter_from_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
