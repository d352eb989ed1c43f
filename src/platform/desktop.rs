//! Desktop platform implementation.

use std::time::Duration;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::PlatformError;
use crate::formatter::CustomFormatter;

/// Sleeps for the given duration.
///
/// Spin-sleeps for frame pacing accuracy while the window is focused, and
/// falls back to a plain thread sleep otherwise to spare the CPU.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Installs the global tracing subscriber.
///
/// Respects `RUST_LOG`, defaulting to `info` when unset.
pub fn init_console() -> Result<(), PlatformError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().event_format(CustomFormatter))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| PlatformError::ConsoleInit(e.to_string()))?;

    Ok(())
}
