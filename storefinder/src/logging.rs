//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::IndexingError;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
pub fn init_tracing(format: LogFormat) -> Result<(), IndexingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| IndexingError::LoggingError(e.to_string()))
}
