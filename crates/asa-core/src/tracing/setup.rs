//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "ASA_LOG";

/// Filter used when `ASA_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "asa=warn";

/// Initialize the ASA tracing/logging system.
///
/// Reads `ASA_LOG` for per-module log levels, e.g.
/// `ASA_LOG=asa_analysis::checks=debug,asa_core=info`.
/// Falls back to `asa=warn` if `ASA_LOG` is not set or is invalid.
///
/// Events go to stderr so reports on stdout stay clean. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
