use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Parses a log level name, falling back to `INFO`
#[must_use]
pub fn parse_log_level(level: &str) -> Level {
    match level.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global `tracing` subscriber
///
/// Safe to call more than once; only the first call has an effect. The level
/// comes from the `LOGLEVEL` environment variable and defaults to `INFO`.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var(LOG_LEVEL_ENV)
            .map(|v| parse_log_level(&v))
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("Global tracing subscriber already set");
        }
    });
}
