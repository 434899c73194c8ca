//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`, filtered by the `BUDGET_LOG`
//! environment variable. The default level is `warn`, so command output on
//! stdout stays clean.

use std::sync::Once;

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "BUDGET_LOG";

const DEFAULT_FILTER: &str = "warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
