use std::{fs::File, path::PathBuf, sync::Mutex};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::{SectionedError, SectionedResult};

/// Environment variable holding the log filter, e.g. `SECTIONED_LOG=debug`.
pub const LOG_ENV: &str = "SECTIONED_LOG";

/// Where log lines are written. The terminal belongs to the UI, so logs
/// always go to a file.
pub fn log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("sectioned")
        .join("sectioned.log")
}

/// Parses the value of [`LOG_ENV`]. An unset variable disables logging;
/// a set but malformed one is an error.
fn filter_from(value: Option<&str>) -> SectionedResult<Option<EnvFilter>> {
    let Some(value) = value else {
        return Ok(None);
    };
    EnvFilter::try_new(value)
        .map(Some)
        .map_err(|e| SectionedError::LogFilterError(format!("{}={}: {}", LOG_ENV, value, e)))
}

/// Installs the global tracing subscriber when [`LOG_ENV`] is set.
///
/// Returns the log file path when logging was enabled.
pub fn init() -> SectionedResult<Option<PathBuf>> {
    let value = std::env::var(LOG_ENV).ok();
    let Some(filter) = filter_from(value.as_deref())? else {
        return Ok(None);
    };

    let path = log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(Some(path))
}
