//! Logging setup on top of `tracing-subscriber`.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global fmt subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`, e.g.
/// `RUST_LOG=waste_routing=debug` to see per-stop selection and routing.
///
/// # Examples
///
/// ```no_run
/// waste_routing::logging::init();
/// tracing::info!("ready");
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Installs a `debug` subscriber that writes through the test harness.
///
/// Safe to call from several tests; only the first call takes effect.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
