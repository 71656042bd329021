//! Tracing setup
//!
//! Installs the global `tracing` subscriber once per process. The filter is
//! taken from `RUST_LOG` when set, with `farmdesk=info` added as the default
//! directive for the crate.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "farmdesk=info".parse() {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();

        tracing::debug!("tracing initialized");
    });
}
