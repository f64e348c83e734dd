//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `DRIFT_LOG` environment variable for per-module log levels.
/// Format: `DRIFT_LOG=drift_design::tokens=debug,drift_design::scan=info`
///
/// Falls back to `drift_design=info` if `DRIFT_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("DRIFT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("drift_design=info"));

        // A host may already have installed a global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
