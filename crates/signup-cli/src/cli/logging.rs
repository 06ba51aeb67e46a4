//! Tracing setup.
//!
//! The interactive screen owns the terminal, so log output goes to
//! `${SIGNUP_HOME}/logs/signup.log` instead of stderr. The filter comes from
//! `SIGNUP_LOG` (default `warn`).

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_ENV: &str = "SIGNUP_LOG";
const LOG_FILE: &str = "signup.log";
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber.
///
/// The returned guard flushes buffered lines on drop and must outlive every
/// command. Returns `None` (logging disabled) when the log file cannot be
/// opened.
pub fn init() -> Option<WorkerGuard> {
    let log_dir = signup_core::config::paths::log_dir();
    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(&log_dir)
    {
        Ok(appender) => appender,
        Err(err) => {
            eprintln!(
                "Warning: logging disabled, cannot open {}: {err}",
                log_dir.join(LOG_FILE).display()
            );
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    Some(guard)
}
