//! Process-wide logging for the `bizcase` binary.
//!
//! Records are JSON lines on stderr; stdout is reserved for the report.

use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or fails to parse.
pub const DEFAULT_FILTER: &str = "info";

/// Install the subscriber with [`DEFAULT_FILTER`]. Later calls do nothing.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // first subscriber wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_the_first_subscriber() {
        init();
        init_with_filter("debug");
        tracing::info!(filter = DEFAULT_FILTER, "logging survives a repeated init");
    }

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
