//! Tracing setup: subscriber installation, export spans, and named events.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;
use varex_core::config::ObservabilityConfig;
use varex_core::constants::LOG_ENV_VAR;

/// Initialize the tracing subscriber.
///
/// Respects the `VAREX_LOG` environment variable for filtering and falls back
/// to `config.log_level`. Returns `false` when a global subscriber was
/// already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if config.json_output {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_test_writer()
        .try_init()
        .is_ok()
}
