//! Logging for vj4
//!
//! Installs a `tracing-subscriber` registry writing text or JSON lines

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vj4_config::{LogFormat, TelemetryConfig};

/// Build the log filter
///
/// `RUST_LOG` takes precedence over the configured directives.
///
/// # Errors
///
/// Returns an error if the configured directives cannot be parsed
pub fn build_filter(config: &TelemetryConfig) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_filter)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {e}", config.log_filter))
}

/// Initialize logging from configuration
///
/// Must be called once, before the server starts.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = build_filter(config)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json().flatten_event(true)).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(filter: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_filter: filter.to_owned(),
            log_format: LogFormat::Json,
        }
    }

    #[test]
    fn configured_filter_is_used() {
        temp_env::with_var_unset("RUST_LOG", || {
            let filter = build_filter(&config("vj4_server=debug,warn")).unwrap();
            assert!(filter.to_string().contains("vj4_server=debug"));
        });
    }

    #[test]
    fn rust_log_wins() {
        temp_env::with_var("RUST_LOG", Some("trace"), || {
            let filter = build_filter(&config("info")).unwrap();
            assert_eq!(filter.to_string(), "trace");
        });
    }

    #[test]
    fn invalid_filter_is_an_error() {
        temp_env::with_var_unset("RUST_LOG", || {
            let err = build_filter(&config("vj4=notalevel")).unwrap_err();
            assert!(err.to_string().starts_with("invalid log filter"));
        });
    }

    #[test]
    fn second_init_fails() {
        temp_env::with_var_unset("RUST_LOG", || {
            let _ = init(&config("info"));
            assert!(init(&config("info")).is_err());
        });
    }
}
