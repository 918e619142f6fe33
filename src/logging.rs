//! Diagnostic logging setup
//!
//! Log lines go to stderr so they never mix with command output or CSV
//! written to stdout.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// `RUST_LOG` takes precedence. Otherwise `default_filter` (from settings)
/// is used, raised to `debug` for this crate when `verbose` is set.
pub fn init_tracing(default_filter: &str, verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                let directive = if verbose {
                    format!("{},expense_tracker=debug", default_filter)
                } else {
                    default_filter.to_string()
                };
                EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
            }
        };

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
