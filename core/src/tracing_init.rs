//! Tracing setup for tests.

use once_cell::sync::Lazy;

/// Install a fmt subscriber once per test binary.
///
/// Filtering follows `RUST_LOG` (for example `RUST_LOG=morsica_core=debug` or
/// `RUST_LOG=morsica_core::player=trace`), defaulting to warnings only.
pub fn init_test_tracing() {
    static TRACING: Lazy<()> = Lazy::new(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("morsica_core=warn"));

        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_names(true)
            .with_line_number(true)
            .with_test_writer()
            .init();
    });

    Lazy::force(&TRACING);
}
