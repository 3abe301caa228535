use crate::error::TelemetryError;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the default `warn` filter. Logs go to stderr so they
/// never interleave with the demo lines on stdout.
pub fn init() -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| TelemetryError::new(e.to_string()))
}

/// Like [`init`], but a subscriber that is already installed is fine.
pub fn try_init() {
    if let Err(err) = init() {
        tracing::debug!(%err, "log subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_but_try_init_does_not_panic() {
        try_init();
        assert!(init().is_err());
        try_init();
    }
}
