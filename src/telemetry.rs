//! Tracing subscriber setup.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, RuntimeConfig};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter when set. Installing twice
/// (tests, embedding) logs a warning instead of failing.
pub fn init_tracing(runtime: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&runtime.log_level));

    let builder = fmt().with_env_filter(filter);
    let result = match runtime.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
