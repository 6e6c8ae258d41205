//! Logging infrastructure for the ragask client.
//!
//! Logs go to stderr so stdout carries only rendered answers. The log stream
//! is also the diagnostic channel for request failures: the user sees a fixed
//! message, the underlying error is logged here.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Initialize the tracing subscriber with stderr output.
///
/// The filter comes from `log_level` if given, else `info`. `RUST_LOG` and
/// `NO_COLOR` are already folded into `AppConfig`, so pass its values here.
///
/// # Example
/// ```no_run
/// use ragask_core::logging::init_logging;
///
/// init_logging(Some("debug"), true).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let env_filter = build_filter(log_level)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

fn build_filter(log_level: Option<&str>) -> AppResult<EnvFilter> {
    EnvFilter::try_new(log_level.unwrap_or("info"))
        .map_err(|e| AppError::Config(format!("Invalid log filter: {}", e)))
}
