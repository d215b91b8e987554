//! Tracing subscriber setup for binaries and test harnesses using this crate.
//!
//! The library itself only emits through the `log` facade; this module bridges
//! those records into `tracing` and installs a formatted subscriber.

use crate::error::ConfigError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_ENV: &str = "LAMBDAS_LOG_FORMAT";

/// Log output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text format with timestamp, level, target, and message
    #[default]
    Text,
    /// JSON format with structured fields: timestamp, level, target, message
    Json,
}

impl LogFormat {
    /// Parses a format name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            _ => Err(ConfigError::UnknownLogFormat {
                key: LOG_FORMAT_ENV,
                value: value.to_string(),
            }),
        }
    }

    /// Parses a format string from environment or returns the default Text format
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lambdas::utils::logger::LogFormat;
    ///
    /// assert_eq!(LogFormat::from_env_or_default(), LogFormat::Text); // default
    /// std::env::set_var("LAMBDAS_LOG_FORMAT", "json");
    /// assert_eq!(LogFormat::from_env_or_default(), LogFormat::Json);
    /// ```
    pub fn from_env_or_default() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|s| LogFormat::parse(&s).ok())
            .unwrap_or_default()
    }
}

/// Initializes the global tracing subscriber with an env filter and console output.
///
/// Sets up:
/// - `EnvFilter` from `RUST_LOG`, defaulting to `info`
/// - a `fmt` layer in the format selected by `LAMBDAS_LOG_FORMAT`
/// - the `log`-to-`tracing` bridge so the crate's `log` records are captured
///
/// Safe to call more than once: if a global subscriber is already installed
/// this returns `Ok(())` and leaves it in place.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging_with(LogFormat::from_env_or_default())
}

/// Same as [`init_logging`] with an explicit format.
pub fn init_logging_with(
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_log::LogTracer;
    use tracing_subscriber::fmt;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call reports the logger as already set, which is fine.
    let _ = LogTracer::init();

    let result = match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true).with_thread_names(true))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true).with_thread_names(true))
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already initialized: {}", e);
    }
    Ok(())
}
