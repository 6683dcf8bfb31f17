//! Diagnostic logging setup
//!
//! The human-readable report goes to stdout; tracing output goes to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "housekeeping=warn,housekeeping_cli=warn";
const VERBOSE_FILTER: &str = "housekeeping=debug,housekeeping_cli=debug";

/// Initialize tracing, honouring `RUST_LOG` when set
pub fn init(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
