//! jwtgate Observability
//!
//! Console logging for the server and the CLI.
//!
//! # Examples
//!
//! ```no_run
//! use jwtgate_config::LoggingConfig;
//! use jwtgate_observability::init_logging;
//!
//! init_logging(&LoggingConfig::default()).expect("logging already initialised");
//! tracing::info!("ready");
//! ```

use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

use jwtgate_config::{LogFormat, LoggingConfig};

/// Dependencies that are too chatty at `info`.
const QUIET_TARGETS: &str = "tower_http=warn,hyper=warn,h2=warn,sqlx=warn";

/// Builds the filter: `RUST_LOG` when set, otherwise `config.level` for the
/// jwtgate crates and `warn` for noisy dependencies.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jwtgate={},{}", config.level, QUIET_TARGETS)))
}

/// Installs the global subscriber.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` (default "info"), overridden by `RUST_LOG`
/// - **Format**: compact with ANSI colours, or one JSON object per line when
///   `LOG_FORMAT=json`
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let layer = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(env_filter(config)))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_configured_level() {
        // SAFETY: no other test in this crate reads RUST_LOG concurrently.
        unsafe { std::env::remove_var("RUST_LOG") };
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Compact,
        };
        let filter = env_filter(&config).to_string();
        assert!(filter.contains("jwtgate=debug"));
        assert!(filter.contains("sqlx=warn"));
    }
}
